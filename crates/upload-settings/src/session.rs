//! Form session and save lifecycle
//!
//! A [`FormSession`] is created when the admin settings page opens, holds the
//! working copy of every tracked setting while the page is displayed, and is
//! dropped on navigation. It answers two questions — has anything diverged
//! from the baseline, and what would a save write — and runs the guarded
//! save protocol itself.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::diff::{SettingChange, SettingsDiff};
use crate::error::Result;
use crate::host::{Alert, AlertHandle, Notifier, RedrawHandle, SettingsStore, Translator};
use crate::keys::{self, FIELD_KEYS, FLAG_KEYS, parse_flag, prefixed, serialize_flag};
use crate::observable::Observable;

/// Translation key for the host's generic "settings saved" message.
const SAVED_MESSAGE_KEY: &str = "core.admin.basics.saved_message";

/// Outcome of a [`FormSession::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The batch was persisted.
    Saved,
    /// A save was already in flight; nothing was done.
    AlreadySaving,
}

/// Working state of the admin settings form.
///
/// Field observables hold the persisted string verbatim; flag observables
/// hold the decoded boolean. The baseline is read live from the injected
/// store on every comparison, never cached here.
pub struct FormSession {
    store: Arc<dyn SettingsStore>,
    notifier: Arc<dyn Notifier>,
    translator: Arc<dyn Translator>,
    redraw: Arc<dyn RedrawHandle>,

    /// Which upload backend receives new images.
    pub upload_method: Observable<String>,
    /// Client identifier for the third-party host.
    pub imgur_client_id: Observable<String>,
    /// Maximum width applied when resizing.
    pub resize_max_width: Observable<String>,
    /// Maximum height applied when resizing.
    pub resize_max_height: Observable<String>,
    /// Whether uploads are resized before storage.
    pub must_resize: Observable<bool>,

    /// At most one save in flight at a time.
    loading: Cell<bool>,
    /// Last shown success alert; a new save dismisses it first.
    success_alert: Cell<Option<AlertHandle>>,
}

impl FormSession {
    /// Open a session, initializing every working value from the baseline.
    ///
    /// Missing field keys initialize to the empty string; flag keys decode
    /// through the `"1"` convention.
    pub fn new(
        store: Arc<dyn SettingsStore>,
        notifier: Arc<dyn Notifier>,
        translator: Arc<dyn Translator>,
        redraw: Arc<dyn RedrawHandle>,
    ) -> Self {
        let read = |key: &str| store.get(&prefixed(key)).unwrap_or_default();
        let read_flag = |key: &str| parse_flag(store.get(&prefixed(key)).as_deref());

        Self {
            upload_method: Observable::new(read(keys::UPLOAD_METHOD)),
            imgur_client_id: Observable::new(read(keys::IMGUR_CLIENT_ID)),
            resize_max_width: Observable::new(read(keys::RESIZE_MAX_WIDTH)),
            resize_max_height: Observable::new(read(keys::RESIZE_MAX_HEIGHT)),
            must_resize: Observable::new(read_flag(keys::MUST_RESIZE)),
            store,
            notifier,
            translator,
            redraw,
            loading: Cell::new(false),
            success_alert: Cell::new(None),
        }
    }

    /// The field observable for a declared field key, if any.
    pub fn field(&self, key: &str) -> Option<&Observable<String>> {
        match key {
            keys::UPLOAD_METHOD => Some(&self.upload_method),
            keys::IMGUR_CLIENT_ID => Some(&self.imgur_client_id),
            keys::RESIZE_MAX_WIDTH => Some(&self.resize_max_width),
            keys::RESIZE_MAX_HEIGHT => Some(&self.resize_max_height),
            _ => None,
        }
    }

    /// The flag observable for a declared flag key, if any.
    pub fn flag(&self, key: &str) -> Option<&Observable<bool>> {
        match key {
            keys::MUST_RESIZE => Some(&self.must_resize),
            _ => None,
        }
    }

    /// Whether a save is currently in flight.
    pub fn is_saving(&self) -> bool {
        self.loading.get()
    }

    /// Enumerate every key whose working value diverges from the baseline.
    ///
    /// The baseline is read from the store on each call, so a save that
    /// refreshed the host's cache is reflected immediately. Absent baseline
    /// field values compare as empty strings.
    pub fn diff(&self) -> SettingsDiff {
        let mut changes = Vec::new();

        for key in FIELD_KEYS {
            let Some(observable) = self.field(key) else {
                continue;
            };
            let namespaced = prefixed(key);
            let baseline = self.store.get(&namespaced);
            let working = observable.get();
            if working != baseline.clone().unwrap_or_default() {
                changes.push(SettingChange {
                    key: namespaced,
                    baseline,
                    working,
                });
            }
        }

        for key in FLAG_KEYS {
            let Some(observable) = self.flag(key) else {
                continue;
            };
            let namespaced = prefixed(key);
            let baseline = self.store.get(&namespaced);
            let working = observable.get();
            if working != parse_flag(baseline.as_deref()) {
                changes.push(SettingChange {
                    key: namespaced,
                    baseline,
                    working: serialize_flag(working).to_string(),
                });
            }
        }

        SettingsDiff::with_changes(changes)
    }

    /// True iff at least one working value diverges from the baseline.
    ///
    /// Recomputed live on every call; never cached.
    pub fn changed(&self) -> bool {
        !self.diff().is_empty()
    }

    /// The full batch a save would persist: every declared key, prefixed,
    /// with fields verbatim and flags serialized — changed or not.
    pub fn batch(&self) -> BTreeMap<String, String> {
        let mut batch = BTreeMap::new();
        for key in FIELD_KEYS {
            if let Some(observable) = self.field(key) {
                batch.insert(prefixed(key), observable.get());
            }
        }
        for key in FLAG_KEYS {
            if let Some(observable) = self.flag(key) {
                batch.insert(prefixed(key), serialize_flag(observable.get()).to_string());
            }
        }
        batch
    }

    /// Persist the working set as a single batch.
    ///
    /// A submit while a save is already in flight is a no-op. On entry the
    /// previous success alert (if any) is dismissed; on success a fresh one
    /// is shown and retained. Whatever the outcome, the loading guard is
    /// cleared and a redraw is requested before returning — a persistence
    /// error then propagates to the caller for the host's generic handling.
    pub async fn submit(&self) -> Result<SubmitOutcome> {
        if self.loading.get() {
            tracing::debug!("save already in flight, ignoring submit");
            return Ok(SubmitOutcome::AlreadySaving);
        }
        self.loading.set(true);

        if let Some(handle) = self.success_alert.take() {
            self.notifier.dismiss(&handle);
        }

        let batch = self.batch();
        tracing::debug!(keys = batch.len(), "saving settings batch");
        let result = self.store.save_batch(batch).await;

        match &result {
            Ok(()) => {
                let message = self.translator.translate(SAVED_MESSAGE_KEY);
                let handle = self.notifier.show(Alert::success(message));
                self.success_alert.set(Some(handle));
                tracing::info!("settings saved");
            }
            Err(e) => {
                tracing::warn!("settings save failed: {e}");
            }
        }

        self.loading.set(false);
        self.redraw.request_redraw();

        result.map(|_| SubmitOutcome::Saved)
    }

    pub(crate) fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }
}
