//! Inventory Table Component
//!
//! One row per item in server order, with edit and delete actions.

use dashboard_core::{Origin, Severity, TableRow, Trigger};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, use_dashboard};
use crate::store::{store_notify, store_report, use_app_store, DashboardStateStoreFields, ItemModal};

/// Delete button that asks "Delete {name}?" before running `on_confirm`
#[component]
fn DeleteAction(name: String, on_confirm: Callback<()>) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let prompt = format!("Delete {}?", name);

    move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button
                        class="btn btn-sm btn-danger"
                        on:click=move |_| {
                            confirming.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button class="btn btn-sm btn-secondary" on:click=move |_| confirming.set(false)>
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="btn btn-sm btn-danger" on:click=move |_| confirming.set(true)>
                    "Delete"
                </button>
            }
            .into_any()
        }
    }
}

#[component]
fn InventoryRow(row: TableRow) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let dashboard = use_dashboard();
    let TableRow { id, name, quantity, price, supplier, location } = row;
    let delete_label = name.clone();

    let edit = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match api::get_item(&client, id).await {
                Ok(fields) => store.modal().set(Some(ItemModal::Edit { id, fields })),
                // Opening the editor is not worth a notice
                Err(err) => log::error!("[TABLE] fetch item {} failed: {}", id, err),
            }
        });
    };

    let delete = Callback::new(move |()| {
        let client = ctx.client();
        spawn_local(async move {
            match api::delete_item(&client, id).await {
                Ok(()) => {
                    if let Some(dashboard) = dashboard {
                        dashboard.refresh(Trigger::Mutation);
                    }
                    store_notify(&store, "Item deleted successfully!", Severity::Success);
                }
                Err(err) => store_report(&store, Origin::User, "Failed to delete item.", &err),
            }
        });
    });

    view! {
        <tr data-id=id>
            <td>{name}</td>
            <td>{quantity}</td>
            <td>{price}</td>
            <td>{supplier}</td>
            <td>{location}</td>
            <td>
                <button class="btn btn-sm btn-warning" on:click=edit>"Edit"</button>
                " "
                <DeleteAction name=delete_label on_confirm=delete />
            </td>
        </tr>
    }
}

#[component]
pub fn InventoryTable(#[prop(into)] loaded: Signal<bool>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <table id="inventory-table" class="table table-striped mt-4" class:d-none=move || !loaded.get()>
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Quantity"</th>
                    <th>"Price"</th>
                    <th>"Supplier"</th>
                    <th>"Location"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.plan().with(|plan| plan.rows.clone())
                    key=|row| (row.id, row.name.clone(), row.quantity.clone(), row.price.clone(), row.supplier.clone(), row.location.clone())
                    children=move |row| view! { <InventoryRow row=row /> }
                />
            </tbody>
        </table>
    }
}
