//! Summary Counters Component

use leptos::prelude::*;

use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn Summary() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="summary d-flex gap-4 my-3">
            <div class="summary-item">
                <span class="summary-label">"Total items"</span>
                <span class="summary-value">{move || store.plan().with(|plan| plan.total_items)}</span>
            </div>
            <div class="summary-item">
                <span class="summary-label">"Total value"</span>
                <span class="summary-value">{move || store.plan().with(|plan| format!("{:.2}", plan.total_value))}</span>
            </div>
        </div>
    }
}
