//! Shared test doubles for the image-upload workspace.
//!
//! This crate provides standardised fakes for the host-boundary traits to
//! eliminate duplication across crate test suites. It is a dev-dependency
//! only — never published.
//!
//! - [`MemoryStore`] — in-memory settings store with save accounting and an
//!   optional hold-point for keeping a save in flight
//! - [`RecordingNotifier`] — records shown and dismissed alerts
//! - [`StaticTranslator`] — echoes translation keys unchanged
//! - [`RedrawCounter`] — counts redraw requests

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use upload_settings::{
    Alert, AlertHandle, Error, Notifier, RedrawHandle, Result, SettingsStore, Translator,
};

/// In-memory [`SettingsStore`].
///
/// Successful saves are applied to the baseline map, matching the host
/// framework's behavior of refreshing its settings cache after persistence.
/// Every `save_batch` invocation is counted on entry, before any gating or
/// failure, so tests can assert how many saves were attempted.
#[derive(Default)]
pub struct MemoryStore {
    settings: Mutex<BTreeMap<String, String>>,
    save_calls: AtomicUsize,
    saved_batches: Mutex<Vec<BTreeMap<String, String>>>,
    fail_message: Mutex<Option<String>>,
    gate: Option<Notify>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with namespaced key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let settings = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            settings: Mutex::new(settings),
            ..Self::default()
        }
    }

    /// Make every save wait at a hold-point until [`release`](Self::release)
    /// is called, so a test can act while a save is in flight.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    /// Let one held save proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Make the next save fail with the given message.
    pub fn fail_next_save(&self, message: impl Into<String>) {
        *self.fail_message.lock().unwrap() = Some(message.into());
    }

    /// Number of `save_batch` invocations so far.
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Batches applied by successful saves, oldest first.
    pub fn saved_batches(&self) -> Vec<BTreeMap<String, String>> {
        self.saved_batches.lock().unwrap().clone()
    }

    /// Current baseline value for a namespaced key.
    pub fn value(&self, key: &str) -> Option<String> {
        self.settings.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.settings.lock().unwrap().get(key).cloned()
    }

    async fn save_batch(&self, batch: BTreeMap<String, String>) -> Result<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if let Some(message) = self.fail_message.lock().unwrap().take() {
            return Err(Error::SaveFailed { message });
        }

        self.saved_batches.lock().unwrap().push(batch.clone());
        self.settings.lock().unwrap().extend(batch);
        Ok(())
    }
}

/// [`Notifier`] that records every show and dismiss call.
#[derive(Default)]
pub struct RecordingNotifier {
    shown: Mutex<Vec<(AlertHandle, Alert)>>,
    dismissed: Mutex<Vec<AlertHandle>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts shown so far, oldest first.
    pub fn shown(&self) -> Vec<(AlertHandle, Alert)> {
        self.shown.lock().unwrap().clone()
    }

    /// Handles dismissed so far, oldest first.
    pub fn dismissed(&self) -> Vec<AlertHandle> {
        self.dismissed.lock().unwrap().clone()
    }

    /// The most recently shown alert, if any.
    pub fn last_shown(&self) -> Option<(AlertHandle, Alert)> {
        self.shown.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, alert: Alert) -> AlertHandle {
        let handle = AlertHandle::new();
        self.shown.lock().unwrap().push((handle, alert));
        handle
    }

    fn dismiss(&self, handle: &AlertHandle) {
        self.dismissed.lock().unwrap().push(*handle);
    }
}

/// [`Translator`] that returns the key unchanged. Translation is opaque to
/// the form, so tests assert on keys rather than localized strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticTranslator;

impl Translator for StaticTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// [`RedrawHandle`] that counts requests.
#[derive(Debug, Default)]
pub struct RedrawCounter {
    count: AtomicUsize,
}

impl RedrawCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl RedrawHandle for RedrawCounter {
    fn request_redraw(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
