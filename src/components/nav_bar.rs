//! Navigation Bar Component
//!
//! Page switch and theme toggle.

use leptos::prelude::*;

use crate::dom;
use crate::store::{use_app_store, DashboardStateStoreFields, Page};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    let toggle_theme = move |_| {
        let theme = store.theme().get_untracked().toggled();
        store.theme().set(theme);
        if let Err(err) = dom::save_theme(theme) {
            log::warn!("[THEME] preference not saved: {}", err);
        }
    };

    let nav_class = move |page: Page| {
        move || {
            if store.page().get() == page {
                "nav-link btn btn-link active"
            } else {
                "nav-link btn btn-link"
            }
        }
    };

    view! {
        <nav class="navbar navbar-expand navbar-dark bg-dark px-3">
            <span class="navbar-brand">"Inventory"</span>
            <div class="navbar-nav me-auto">
                <button class=nav_class(Page::Dashboard) on:click=move |_| store.page().set(Page::Dashboard)>
                    "Dashboard"
                </button>
                <button class=nav_class(Page::Insights) on:click=move |_| store.page().set(Page::Insights)>
                    "Insights"
                </button>
            </div>
            <button id="theme-toggle" class="btn btn-outline-light btn-sm" on:click=toggle_theme>
                {move || store.theme().get().toggle_label()}
            </button>
        </nav>
    }
}
