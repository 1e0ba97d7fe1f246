//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::BTreeSet;

use dashboard_core::{
    AlertId, AlertStack, CardChange, CardExpansion, CardId, DashboardError, ItemFields, Origin,
    RenderPlan, Severity, Theme,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

/// Which page is mounted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Insights,
}

/// Open item modal
#[derive(Clone, Debug, PartialEq)]
pub enum ItemModal {
    Add,
    Edit { id: u32, fields: ItemFields },
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Latest dashboard render plan (table rows, counters)
    pub plan: RenderPlan,
    /// First dashboard render finished; hides the spinners
    pub loaded: bool,
    pub insights_loaded: bool,
    /// Every location seen so far, for the filter select
    pub locations: BTreeSet<String>,
    pub location_filter: Option<String>,
    pub cards: CardExpansion,
    pub alerts: AlertStack,
    pub alert_timeout_ms: u32,
    pub theme: Theme,
    pub modal: Option<ItemModal>,
    pub page: Page,
}

impl DashboardState {
    pub fn new(theme: Theme, location_filter: Option<String>, alert_timeout_ms: u32) -> Self {
        Self {
            theme,
            locations: location_filter.iter().cloned().collect(),
            location_filter,
            alert_timeout_ms,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<DashboardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the on-screen plan and refresh the known locations
pub fn store_set_plan(store: &AppStore, plan: RenderPlan, filtered: bool) {
    plan.update_locations(&mut store.locations().write(), filtered);
    store.plan().set(plan);
    store.loaded().set(true);
}

/// Push a notice and schedule its removal
pub fn store_notify(store: &AppStore, message: impl Into<String>, severity: Severity) -> AlertId {
    let id = store.alerts().write().notify(message, severity);
    schedule_dismiss(*store, id);
    id
}

/// Log a failure; user actions also get a danger notice
pub fn store_report(store: &AppStore, origin: Origin, notice: impl Into<String>, err: &DashboardError) {
    let id = store.alerts().write().report(origin, notice, err);
    if let Some(id) = id {
        schedule_dismiss(*store, id);
    }
}

pub fn store_dismiss(store: &AppStore, id: AlertId) {
    store.alerts().write().dismiss(id);
}

fn schedule_dismiss(store: AppStore, id: AlertId) {
    let timeout_ms = store.alert_timeout_ms().get_untracked();
    Timeout::new(timeout_ms, move || {
        // The page may have been torn down in the meantime
        store.alerts().try_update(|alerts| {
            alerts.dismiss(id);
        });
    })
    .forget();
}

pub fn store_toggle_card(store: &AppStore, card: CardId) -> CardChange {
    store.cards().write().toggle(card)
}

pub fn store_close_card(store: &AppStore, card: CardId) -> CardChange {
    store.cards().write().close(card)
}
