//! Toast notification stack.
//!
//! DESIGN
//! ======
//! Each toast is removed by id from its own timer in `util::toast`; the
//! expiry instant it carries backs `prune` for callers that sweep by clock.
//! The container is rendered only while `toasts` is non-empty.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastSeverity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Warning => "toast toast-warning",
            Self::Error => "toast toast-error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✕",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: ToastSeverity,
    /// Clock reading (ms) after which the toast is removed.
    pub expires_at_ms: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Stack a new toast shown from `now_ms`; returns its id.
    pub fn push(&mut self, message: impl Into<String>, severity: ToastSeverity, now_ms: f64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            expires_at_ms: now_ms + TOAST_DURATION_MS,
        });
        id
    }

    /// Drop every toast whose expiry is at or before `now_ms`.
    pub fn prune(&mut self, now_ms: f64) {
        self.toasts.retain(|t| t.expires_at_ms > now_ms);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
