//! Location Filter Component

use dashboard_core::Trigger;
use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::{use_app_store, DashboardStateStoreFields};

#[component]
pub fn LocationFilter() -> impl IntoView {
    let store = use_app_store();
    let dashboard = use_dashboard();

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.location_filter().set((!value.is_empty()).then_some(value));
        if let Some(dashboard) = dashboard {
            dashboard.refresh(Trigger::FilterChange);
        }
    };

    view! {
        <select
            id="locationFilter"
            class="form-select w-auto"
            prop:value=move || store.location_filter().get().unwrap_or_default()
            on:change=on_change
        >
            <option value="">"All locations"</option>
            <For
                each=move || store.locations().with(|locations| locations.iter().cloned().collect::<Vec<_>>())
                key=|location| location.clone()
                children=move |location| {
                    let value = location.clone();
                    view! { <option value=value>{location}</option> }
                }
            />
        </select>
    }
}
