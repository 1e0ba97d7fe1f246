//! Application Context
//!
//! Shared values provided via Leptos Context API.

use dashboard_core::{DashboardConfig, Trigger};
use leptos::prelude::*;

use crate::api::HttpClient;
use crate::controller::DashboardController;

/// App-wide values, provided once by `App`
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<DashboardConfig>,
    client: StoredValue<HttpClient>,
}

impl AppContext {
    pub fn new(config: DashboardConfig) -> Self {
        let client = HttpClient::new(&config);
        Self {
            config: StoredValue::new(config),
            client: StoredValue::new(client),
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    pub fn client(&self) -> HttpClient {
        self.client.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Handle to the controller of a mounted view
#[derive(Clone, Copy)]
pub struct DashboardHandle(StoredValue<DashboardController, LocalStorage>);

impl DashboardHandle {
    pub fn new(controller: DashboardController) -> Self {
        Self(StoredValue::new_local(controller))
    }

    pub fn start(&self) {
        self.0.try_with_value(|controller| controller.start());
    }

    /// Request a refresh. No-op once the view is gone.
    pub fn refresh(&self, trigger: Trigger) {
        self.0.try_with_value(|controller| controller.refresh(trigger));
    }

    pub fn stop(&self) {
        self.0.try_with_value(|controller| controller.stop());
    }
}

pub fn use_dashboard() -> Option<DashboardHandle> {
    use_context::<DashboardHandle>()
}
