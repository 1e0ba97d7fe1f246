//! Chart Card Component
//!
//! Expandable card wrapping one chart container. At most one card is
//! expanded; the close control only ever collapses.

use dashboard_core::{CardId, RenderSurface};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::plotly::DomSurface;
use crate::store::{store_close_card, store_toggle_card, use_app_store, DashboardStateStoreFields};

const CLOSE_SELECTOR: &str = ".close-btn";

/// True when the click started on (or inside) the close control
fn is_close_target(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(CLOSE_SELECTOR).ok().flatten())
        .is_some()
}

/// Charts drawn while collapsed have stale dimensions; resize once the
/// expanded class has been applied.
fn resize_after_layout(container_id: &'static str) {
    Timeout::new(0, move || {
        if let Err(err) = DomSurface.resize(container_id) {
            log::debug!("[CARD] resize {} skipped: {}", container_id, err);
        }
    })
    .forget();
}

#[component]
pub fn ChartCard(
    card: CardId,
    title: &'static str,
    container_id: &'static str,
    #[prop(into)] loaded: Signal<bool>,
) -> impl IntoView {
    let store = use_app_store();
    let expanded = move || store.cards().with(|cards| cards.is_expanded(card));

    let on_card_click = move |ev: web_sys::MouseEvent| {
        if is_close_target(&ev) {
            return;
        }
        let change = store_toggle_card(&store, card);
        if change.expanded == Some(card) {
            resize_after_layout(container_id);
        }
    };

    let on_close = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        store_close_card(&store, card);
    };

    view! {
        <div class="card" class:expanded=expanded on:click=on_card_click>
            <div class="card-body">
                <span class="close-btn" title="Close" on:click=on_close>"×"</span>
                <h5 class="card-title">{title}</h5>
                <Show when=move || !loaded.get()>
                    <div class="spinner-container">
                        <div class="spinner-border" role="status"></div>
                    </div>
                </Show>
                <div class="chart-container">
                    <div id=container_id></div>
                </div>
            </div>
        </div>
    }
}
