//! Page Hooks
//!
//! Everything read from or written to the surrounding page outside the
//! Leptos tree: the anti-forgery token, the config block, the URL query,
//! durable storage and the `<body>` theme class.

use dashboard_core::{
    DashboardConfig, DashboardError, DashboardResult, InsightsSnapshot, Theme, INSIGHTS_ANOMALIES_ID,
    INSIGHTS_FORECAST_ID, INSIGHTS_STOCK_TREND_ID, THEME_STORAGE_KEY,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DomParser, HtmlInputElement, SupportedType, Window};

const CSRF_SELECTOR: &str = "[name=csrfmiddlewaretoken]";
const CONFIG_ELEMENT_ID: &str = "dashboard-config";

pub fn window() -> DashboardResult<Window> {
    web_sys::window().ok_or_else(|| DashboardError::ElementMissing("window".into()))
}

pub fn document() -> DashboardResult<Document> {
    window()?
        .document()
        .ok_or_else(|| DashboardError::ElementMissing("document".into()))
}

/// Describe a JS exception for logging
pub fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Anti-forgery token from the page-embedded form field
pub fn csrf_token() -> DashboardResult<String> {
    let element = document()?
        .query_selector(CSRF_SELECTOR)
        .map_err(|e| DashboardError::Parse(js_message(&e)))?
        .ok_or_else(|| DashboardError::ElementMissing(CSRF_SELECTOR.into()))?;
    let input = element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| DashboardError::ElementMissing(format!("{} is not an input", CSRF_SELECTOR)))?;
    Ok(input.value())
}

/// Config from `<script id="dashboard-config" type="application/json">`,
/// or defaults when absent or unreadable.
pub fn read_config() -> DashboardConfig {
    let raw = document()
        .ok()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => DashboardConfig::from_json(&raw).unwrap_or_else(|err| {
            log::error!("[CONFIG] #{} ignored: {}", CONFIG_ELEMENT_ID, err);
            DashboardConfig::default()
        }),
        None => DashboardConfig::default(),
    }
}

/// `?location=` from the page URL
pub fn location_from_url() -> Option<String> {
    let search = window().ok()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("location").filter(|l| !l.is_empty())
}

pub fn load_theme() -> Theme {
    let stored = window()
        .ok()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn save_theme(theme: Theme) -> DashboardResult<()> {
    let storage = window()?
        .local_storage()
        .map_err(|e| DashboardError::ElementMissing(js_message(&e)))?
        .ok_or_else(|| DashboardError::ElementMissing("localStorage".into()))?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|e| DashboardError::Parse(js_message(&e)))
}

pub fn apply_theme(theme: Theme) -> DashboardResult<()> {
    let body = document()?
        .body()
        .ok_or_else(|| DashboardError::ElementMissing("body".into()))?;
    body.class_list()
        .toggle_with_force("dark-mode", theme.is_dark())
        .map(|_| ())
        .map_err(|e| DashboardError::Parse(js_message(&e)))
}

/// Pull the embedded chart JSON out of the `/insights/` page.
pub fn extract_insights(html: &str) -> DashboardResult<InsightsSnapshot> {
    let parser = DomParser::new().map_err(|e| DashboardError::Parse(js_message(&e)))?;
    let doc = parser
        .parse_from_string(html, SupportedType::TextHtml)
        .map_err(|e| DashboardError::Parse(js_message(&e)))?;
    let text = |id: &str| doc.get_element_by_id(id).and_then(|el| el.text_content());

    let forecast = text(INSIGHTS_FORECAST_ID);
    let anomalies = text(INSIGHTS_ANOMALIES_ID);
    let stock_trend = text(INSIGHTS_STOCK_TREND_ID);
    InsightsSnapshot::from_fragments(forecast.as_deref(), anomalies.as_deref(), stock_trend.as_deref())
}
