//! Inventory Dashboard App
//!
//! Reads the page config, restores the theme and mounts the current page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AlertContainer, DashboardView, InsightsView, NavBar};
use crate::context::AppContext;
use crate::dom;
use crate::logger;
use crate::store::{DashboardState, DashboardStateStoreFields, Page};

#[component]
pub fn App() -> impl IntoView {
    let config = dom::read_config();
    logger::set_level(config.log_level());
    log::info!("[APP] starting, api base '{}', policy {:?}", config.api_base, config.fetch_policy);

    let store = Store::new(DashboardState::new(
        dom::load_theme(),
        dom::location_from_url(),
        config.alert_timeout_ms,
    ));
    provide_context(store);
    provide_context(AppContext::new(config));

    // Keep <body> in step with the theme
    Effect::new(move |_| {
        let theme = store.theme().get();
        if let Err(err) = dom::apply_theme(theme) {
            log::warn!("[APP] theme not applied: {}", err);
        }
    });

    view! {
        <NavBar />
        <AlertContainer />
        {move || match store.page().get() {
            Page::Dashboard => view! { <DashboardView /> }.into_any(),
            Page::Insights => view! { <InsightsView /> }.into_any(),
        }}
    }
}
