//! Dashboard Core
//!
//! Browser-independent logic for the inventory dashboard:
//! - models: wire types shared with the server API
//! - poll: refresh state machine and response ordering
//! - render: render plans and the render surface seam
//! - cards, alerts, theme: small pieces of UI state
//!
//! Nothing here touches the DOM, so it is tested on the host.

mod alerts;
mod api;
mod cards;
mod config;
mod error;
mod models;
mod poll;
mod render;
mod theme;

pub use api::InventoryApi;
pub use alerts::{Alert, AlertId, AlertStack, Origin, Severity};
pub use cards::{CardChange, CardExpansion, CardId};
pub use config::{DashboardConfig, FetchPolicy};
pub use error::{DashboardError, DashboardResult};
pub use models::{
    ApiStatus, ChartSpec, DashboardSnapshot, InsightsSnapshot, InventoryItem, ItemFields,
    INSIGHTS_ANOMALIES_ID, INSIGHTS_FORECAST_ID, INSIGHTS_STOCK_TREND_ID,
};
pub use poll::{PollLoop, PollPhase, Resolution, Ticket, Trigger};
pub use render::{
    apply, placeholder_for, ChartContent, ChartSlot, RenderPlan, RenderReport, RenderSurface, TableRow,
    ANOMALIES_CHART_ID, EXPORT_BUTTON_ID, EXPORT_PATH, FORECAST_CHART_ID, LOCATION_CHART_ID,
    STOCK_CHART_ID, STOCK_TREND_CHART_ID, SUPPLIER_CHART_ID,
};
pub use theme::{Theme, THEME_STORAGE_KEY};

#[cfg(test)]
mod tests;
