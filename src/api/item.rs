//! Item Endpoints
//!
//! CRUD calls for inventory items. Mutations answer `{"status": ...}`.

use dashboard_core::{ApiStatus, DashboardResult, ItemFields};
use serde::Serialize;

use super::HttpClient;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

#[derive(Serialize)]
struct EditItemArgs<'a> {
    id: u32,
    #[serde(flatten)]
    fields: &'a ItemFields,
}

// ========================
// Commands
// ========================

pub async fn get_item(client: &HttpClient, id: u32) -> DashboardResult<ItemFields> {
    client.get_json(&format!("/api/get_item/{}/", id)).await
}

pub async fn add_item(client: &HttpClient, fields: &ItemFields) -> DashboardResult<()> {
    let status: ApiStatus = client.post_json("/api/add_item/", fields).await?;
    status.into_result()
}

pub async fn edit_item(client: &HttpClient, id: u32, fields: &ItemFields) -> DashboardResult<()> {
    let status: ApiStatus = client.post_json("/api/edit_item/", &EditItemArgs { id, fields }).await?;
    status.into_result()
}

pub async fn delete_item(client: &HttpClient, id: u32) -> DashboardResult<()> {
    let status: ApiStatus = client.post_json("/api/delete_item/", &IdArgs { id }).await?;
    status.into_result()
}
