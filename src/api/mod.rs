//! Server API Client
//!
//! `fetch` wrappers for the dashboard endpoints, organized by domain.

mod dashboard;
mod item;

use dashboard_core::{
    DashboardConfig, DashboardError, DashboardResult, DashboardSnapshot, InsightsSnapshot, InventoryApi,
    ItemFields,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::dom;

pub use dashboard::*;
pub use item::*;

const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    fn is_mutating(self) -> bool {
        matches!(self, Method::Post)
    }
}

/// HTTP client bound to the configured API base
#[derive(Debug, Clone)]
pub struct HttpClient {
    base: String,
}

impl HttpClient {
    pub fn new(config: &DashboardConfig) -> Self {
        Self { base: config.api_base.trim_end_matches('/').to_string() }
    }

    /// Resolve an API path against the configured base
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Send a request and decode the JSON response.
    pub async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> DashboardResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.send(method, path, body).await?;
        serde_json::from_str(&text).map_err(DashboardError::from)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<T> {
        self.request::<(), T>(Method::Get, path, None).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> DashboardResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::Post, path, Some(body)).await
    }

    /// GET a non-JSON body (HTML fragments)
    pub async fn get_text(&self, path: &str) -> DashboardResult<String> {
        self.send::<()>(Method::Get, path, None).await
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> DashboardResult<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        if method.is_mutating() {
            match dom::csrf_token() {
                Ok(token) => builder = builder.header(CSRF_HEADER, &token),
                Err(err) => log::error!("[API] {} sent without anti-forgery token: {}", path, err),
            }
        }

        let sent = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| DashboardError::Parse(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| DashboardError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(DashboardError::HttpStatus {
                status,
                message: error_message(&text, &response.status_text()),
            });
        }
        log::debug!("[API] {:?} {} -> {}", method, path, status);
        Ok(text)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Prefer the server's `{"message": ...}` over the bare status text.
fn error_message(body: &str, status_text: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.message.is_empty() => parsed.message,
        _ if !status_text.is_empty() => status_text.to_string(),
        _ => "request failed".to_string(),
    }
}

impl InventoryApi for HttpClient {
    async fn dashboard(&self, location: Option<&str>) -> DashboardResult<DashboardSnapshot> {
        get_dashboard_data(self, location).await
    }

    async fn item(&self, id: u32) -> DashboardResult<ItemFields> {
        get_item(self, id).await
    }

    async fn add_item(&self, fields: &ItemFields) -> DashboardResult<()> {
        add_item(self, fields).await
    }

    async fn edit_item(&self, id: u32, fields: &ItemFields) -> DashboardResult<()> {
        edit_item(self, id, fields).await
    }

    async fn delete_item(&self, id: u32) -> DashboardResult<()> {
        delete_item(self, id).await
    }

    async fn insights(&self) -> DashboardResult<InsightsSnapshot> {
        get_insights(self).await
    }
}
