//! Host framework boundary
//!
//! The admin form never talks to the host framework directly. Everything it
//! needs — the settings cache, batch persistence, transient alerts,
//! translation lookup, and redraw scheduling — is injected through the traits
//! declared here.

use std::collections::BTreeMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;

/// Severity tag for a transient alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// Handle to a displayed alert, used to dismiss it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertHandle(Uuid);

impl AlertHandle {
    /// Allocate a fresh handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AlertHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// The host's flat settings store.
///
/// Reads are synchronous against the already-loaded baseline cache. Writes go
/// through [`save_batch`](SettingsStore::save_batch), which applies a whole
/// mapping as one logical update; on success the implementation must also
/// refresh its baseline cache so subsequent reads observe the saved values.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the baseline value for a namespaced key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a batch of namespaced key/value pairs as a single update.
    async fn save_batch(&self, batch: BTreeMap<String, String>) -> Result<()>;
}

/// Display and dismissal of transient alerts.
pub trait Notifier: Send + Sync {
    /// Show an alert, returning a handle that can later be dismissed.
    fn show(&self, alert: Alert) -> AlertHandle;

    /// Dismiss a previously shown alert. Unknown handles are ignored.
    fn dismiss(&self, handle: &AlertHandle);
}

/// Opaque translation lookup.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Schedules a UI re-render after state changes outside the reactive path.
pub trait RedrawHandle: Send + Sync {
    fn request_redraw(&self);
}
