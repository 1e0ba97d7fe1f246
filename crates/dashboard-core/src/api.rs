//! Inventory API Seam
//!
//! Abstract interface over the server endpoints. The app implements it over
//! HTTP; tests use an in-memory server.

use crate::error::DashboardResult;
use crate::models::{DashboardSnapshot, InsightsSnapshot, ItemFields};

#[allow(async_fn_in_trait)]
pub trait InventoryApi {
    /// `GET /api/get_dashboard_data/?location=`
    async fn dashboard(&self, location: Option<&str>) -> DashboardResult<DashboardSnapshot>;

    /// `GET /api/get_item/{id}/`
    async fn item(&self, id: u32) -> DashboardResult<ItemFields>;

    /// `POST /api/add_item/`
    async fn add_item(&self, fields: &ItemFields) -> DashboardResult<()>;

    /// `POST /api/edit_item/`
    async fn edit_item(&self, id: u32, fields: &ItemFields) -> DashboardResult<()>;

    /// `POST /api/delete_item/`
    async fn delete_item(&self, id: u32) -> DashboardResult<()>;

    /// `GET /insights/`
    async fn insights(&self) -> DashboardResult<InsightsSnapshot>;
}
