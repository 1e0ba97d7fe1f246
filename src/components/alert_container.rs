//! Alert Container Component
//!
//! Fixed stack of dismissible notices.

use leptos::prelude::*;

use crate::store::{store_dismiss, use_app_store, DashboardStateStoreFields};

#[component]
pub fn AlertContainer() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="alert-container">
            <For
                each=move || store.alerts().with(|stack| stack.alerts().to_vec())
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div class=alert.severity.css_class() role="alert">
                            {alert.message.clone()}
                            " "
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| store_dismiss(&store, id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
