//! Dashboard Endpoints

use dashboard_core::{DashboardResult, DashboardSnapshot, InsightsSnapshot, EXPORT_PATH};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::HttpClient;
use crate::dom;

const DASHBOARD_PATH: &str = "/api/get_dashboard_data/";
const INSIGHTS_PATH: &str = "/insights/";

pub fn dashboard_path(location: Option<&str>) -> String {
    match location.map(str::trim).filter(|l| !l.is_empty()) {
        Some(location) => format!(
            "{}?location={}",
            DASHBOARD_PATH,
            utf8_percent_encode(location, NON_ALPHANUMERIC)
        ),
        None => DASHBOARD_PATH.to_string(),
    }
}

pub async fn get_dashboard_data(client: &HttpClient, location: Option<&str>) -> DashboardResult<DashboardSnapshot> {
    client.get_json(&dashboard_path(location)).await
}

/// Charts embedded in the insights HTML page
pub async fn get_insights(client: &HttpClient) -> DashboardResult<InsightsSnapshot> {
    let html = client.get_text(INSIGHTS_PATH).await?;
    dom::extract_insights(&html)
}

/// CSV download link
pub fn export_url(client: &HttpClient) -> String {
    client.url(EXPORT_PATH)
}
