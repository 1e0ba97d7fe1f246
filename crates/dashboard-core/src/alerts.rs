//! Alert Emitter
//!
//! Stack of transient notices. Removal after the timeout is driven by the
//! view layer's timer calling [`AlertStack::dismiss`].

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn css_class(self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub message: String,
    pub severity: Severity,
}

/// Who started the action that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Add/edit/delete and other clicks: failures get a notice
    User,
    /// Timer-driven polling: failures are only logged
    Background,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertStack {
    next_id: u64,
    alerts: Vec<Alert>,
}

impl AlertStack {
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Append a notice. Identical messages stack.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> AlertId {
        self.next_id += 1;
        let id = AlertId(self.next_id);
        self.alerts.push(Alert { id, message: message.into(), severity });
        id
    }

    /// Remove a notice. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    /// Log `err` and, for user actions, raise `notice` as a danger alert.
    pub fn report(&mut self, origin: Origin, notice: impl Into<String>, err: &DashboardError) -> Option<AlertId> {
        let notice = notice.into();
        if err.is_noop() {
            log::debug!("[ALERT] {}: {}", notice, err);
            return None;
        }
        log::error!("[ALERT] {}: {}", notice, err);
        match origin {
            Origin::User => Some(self.notify(notice, Severity::Danger)),
            Origin::Background => None,
        }
    }
}
