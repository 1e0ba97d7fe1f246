//! Item Modal Component
//!
//! Add and edit forms for inventory items.

use dashboard_core::{ItemFields, Origin, Severity, Trigger};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, use_dashboard};
use crate::store::{store_notify, store_report, use_app_store, DashboardStateStoreFields, ItemModal};

/// Mounts the form while a modal is open
#[component]
pub fn ItemModalHost() -> impl IntoView {
    let store = use_app_store();
    move || store.modal().get().map(|modal| view! { <ItemForm modal=modal /> })
}

/// Text input bound to a form signal
#[component]
fn FormField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label" for=name>{label}</label>
            <input
                class="form-control"
                id=name
                name=name
                type=input_type
                step={if input_type == "number" { "any" } else { "" }}
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn ItemForm(modal: ItemModal) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dashboard = use_dashboard();

    let (edit_id, initial, title) = match modal {
        ItemModal::Add => (None, ItemFields::default(), "Add Item"),
        ItemModal::Edit { id, fields } => (Some(id), fields, "Edit Item"),
    };
    let number = |n: String| if edit_id.is_some() { n } else { String::new() };

    let name = RwSignal::new(initial.name);
    let quantity = RwSignal::new(number(initial.quantity.to_string()));
    let price = RwSignal::new(number(initial.price.to_string()));
    let supplier = RwSignal::new(initial.supplier);
    let location = RwSignal::new(initial.location);
    let (saving, set_saving) = signal(false);

    let close = move |_| store.modal().set(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let fields = match ItemFields::from_form(
            &name.get_untracked(),
            &quantity.get_untracked(),
            &price.get_untracked(),
            &supplier.get_untracked(),
            &location.get_untracked(),
        ) {
            Ok(fields) => fields,
            Err(err) => {
                store_notify(&store, err.to_string(), Severity::Warning);
                return;
            }
        };

        set_saving.set(true);
        let client = ctx.client();
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => api::edit_item(&client, id, &fields).await,
                None => api::add_item(&client, &fields).await,
            };
            set_saving.set(false);
            match (result, edit_id) {
                (Ok(()), edit) => {
                    log::info!("[FORM] saved item {:?}", edit);
                    store.modal().set(None);
                    if let Some(dashboard) = dashboard {
                        dashboard.refresh(Trigger::Mutation);
                    }
                    let notice = if edit.is_some() { "Item updated successfully!" } else { "Item added successfully!" };
                    store_notify(&store, notice, Severity::Success);
                }
                (Err(err), Some(_)) => store_report(&store, Origin::User, "Failed to update item.", &err),
                (Err(err), None) => {
                    store_report(&store, Origin::User, format!("Failed to add item: {}", err), &err)
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop fade show"></div>
        <div class="modal d-block" tabindex="-1" role="dialog">
            <div class="modal-dialog">
                <form
                    id={if edit_id.is_some() { "edit-item-form" } else { "add-item-form" }}
                    class="modal-content"
                    on:submit=submit
                >
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button type="button" class="btn-close" aria-label="Close" on:click=close></button>
                    </div>
                    <div class="modal-body">
                        <FormField label="Name" name="name" value=name />
                        <FormField label="Quantity" name="quantity" input_type="number" value=quantity />
                        <FormField label="Price" name="price" input_type="number" value=price />
                        <FormField label="Supplier" name="supplier" value=supplier />
                        <FormField label="Location" name="location" value=location />
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" on:click=close>"Cancel"</button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
