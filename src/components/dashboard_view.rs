//! Dashboard View
//!
//! Inventory table, summary counters and the five dashboard charts, kept in
//! sync with the server by a polling controller.

use dashboard_core::{
    Trigger, ANOMALIES_CHART_ID, FORECAST_CHART_ID, LOCATION_CHART_ID, STOCK_CHART_ID, SUPPLIER_CHART_ID,
};
use leptos::prelude::*;

use super::{ChartCard, InventoryTable, ItemModalHost, LocationFilter, Summary};
use crate::context::{use_app_context, DashboardHandle};
use crate::controller::{DashboardController, ViewKind};
use crate::plotly::EXPORT_SLOT_ID;
use crate::store::{use_app_store, DashboardStateStoreFields, ItemModal};

#[component]
pub fn DashboardView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let controller = DashboardController::new(ViewKind::Dashboard, ctx.client(), &ctx.config(), store);
    let handle = DashboardHandle::new(controller);
    provide_context(handle);

    // Chart containers must be mounted before the first render lands
    Effect::new(move |_| handle.start());
    on_cleanup(move || handle.stop());

    let loaded = Signal::derive(move || store.loaded().get());

    view! {
        <div class="container my-4">
            <div id=EXPORT_SLOT_ID></div>
            <div class="dashboard-toolbar d-flex gap-2 align-items-center">
                <LocationFilter />
                <button class="btn btn-primary" on:click=move |_| store.modal().set(Some(ItemModal::Add))>
                    "Add Item"
                </button>
                <button class="btn btn-outline-secondary" on:click=move |_| handle.refresh(Trigger::Manual)>
                    "Refresh"
                </button>
            </div>

            <Summary />

            <div class="card-grid">
                <ChartCard card="stock" title="Stock Levels" container_id=STOCK_CHART_ID loaded=loaded />
                <ChartCard card="location" title="Stock by Location" container_id=LOCATION_CHART_ID loaded=loaded />
                <ChartCard card="supplier" title="Supplier Performance" container_id=SUPPLIER_CHART_ID loaded=loaded />
                <ChartCard card="forecast" title="Demand Forecast" container_id=FORECAST_CHART_ID loaded=loaded />
                <ChartCard card="anomalies" title="Anomalies Detected" container_id=ANOMALIES_CHART_ID loaded=loaded />
            </div>

            <InventoryTable loaded=loaded />
            <ItemModalHost />
        </div>
    }
}
