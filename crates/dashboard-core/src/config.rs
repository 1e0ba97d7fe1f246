//! Dashboard Configuration
//!
//! Optional JSON block embedded in the page. Every field has a default, so an
//! empty object (or no block at all) yields the stock dashboard.

use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

/// How overlapping refresh triggers are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchPolicy {
    /// One request in flight; later triggers collapse into one follow-up fetch
    #[default]
    Coalesce,
    /// Every trigger fetches; the last response to arrive wins
    Concurrent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub poll_interval_ms: u32,
    pub alert_timeout_ms: u32,
    /// Prefix for every API path, e.g. `https://inventory.example.com`
    pub api_base: String,
    pub fetch_policy: FetchPolicy,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 30_000,
            alert_timeout_ms: 3_000,
            api_base: String::new(),
            fetch_policy: FetchPolicy::Coalesce,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> DashboardResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    // A zero interval would spin the poll timer
    fn sanitized(mut self) -> Self {
        if self.poll_interval_ms == 0 {
            self.poll_interval_ms = Self::default().poll_interval_ms;
        }
        if self.alert_timeout_ms == 0 {
            self.alert_timeout_ms = Self::default().alert_timeout_ms;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_json("").unwrap();
        assert_eq!(config.poll_interval_ms, 30_000);
        assert_eq!(config.alert_timeout_ms, 3_000);
        assert_eq!(config.fetch_policy, FetchPolicy::Coalesce);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config =
            DashboardConfig::from_json(r#"{"poll_interval_ms": 5000, "fetch_policy": "concurrent", "log_level": "debug"}"#)
                .unwrap();
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.alert_timeout_ms, 3_000);
        assert_eq!(config.fetch_policy, FetchPolicy::Concurrent);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_zero_interval_falls_back() {
        let config = DashboardConfig::from_json(r#"{"poll_interval_ms": 0}"#).unwrap();
        assert_eq!(config.poll_interval_ms, 30_000);
    }

    #[test]
    fn test_invalid_json() {
        assert!(DashboardConfig::from_json("{poll").is_err());
    }
}
