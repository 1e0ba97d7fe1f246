//! Insights View
//!
//! Forecast, anomaly and stock-trend charts scraped from `/insights/`.

use dashboard_core::{ANOMALIES_CHART_ID, FORECAST_CHART_ID, STOCK_TREND_CHART_ID};
use leptos::prelude::*;

use super::ChartCard;
use crate::context::{use_app_context, DashboardHandle};
use crate::controller::{DashboardController, ViewKind};
use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn InsightsView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let handle = DashboardHandle::new(DashboardController::new(ViewKind::Insights, ctx.client(), &ctx.config(), store));
    Effect::new(move |_| handle.start());
    on_cleanup(move || handle.stop());

    let loaded = Signal::derive(move || store.insights_loaded().get());

    view! {
        <div class="container my-4">
            <div class="card-grid">
                <ChartCard card="insights-forecast" title="Demand Forecast" container_id=FORECAST_CHART_ID loaded=loaded />
                <ChartCard card="insights-anomalies" title="Anomalies Detected" container_id=ANOMALIES_CHART_ID loaded=loaded />
                <ChartCard card="insights-trend" title="Stock Trends" container_id=STOCK_TREND_CHART_ID loaded=loaded />
            </div>
        </div>
    }
}
