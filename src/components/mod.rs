//! UI Components
//!
//! Reusable Leptos components.

mod alert_container;
mod chart_card;
mod dashboard_view;
mod insights_view;
mod inventory_table;
mod item_modal;
mod location_filter;
mod nav_bar;
mod summary;

pub use alert_container::AlertContainer;
pub use chart_card::ChartCard;
pub use dashboard_view::DashboardView;
pub use insights_view::InsightsView;
pub use inventory_table::InventoryTable;
pub use item_modal::ItemModalHost;
pub use location_filter::LocationFilter;
pub use nav_bar::NavBar;
pub use summary::Summary;
