//! Dashboard Errors
//!
//! Every failure the dashboard can observe. None of them is fatal: call sites
//! log them and, for user actions, turn them into a notice.

use thiserror::Error;

/// Common result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Malformed JSON or HTML payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// An expected DOM hook is absent
    #[error("Element not found: {0}")]
    ElementMissing(String),

    /// The server understood the request but reported `status != "success"`
    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl DashboardError {
    /// Missing DOM hooks are treated as no-ops by callers.
    pub fn is_noop(&self) -> bool {
        matches!(self, DashboardError::ElementMissing(_))
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Parse(err.to_string())
    }
}
