//! Change enumeration between baseline and working settings

use serde::Serialize;

/// Result of comparing the working set against the settings baseline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsDiff {
    /// One entry per key whose working value diverges from the baseline.
    pub changes: Vec<SettingChange>,
}

impl SettingsDiff {
    /// A diff with no divergence.
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// Build a diff from collected changes.
    pub fn with_changes(changes: Vec<SettingChange>) -> Self {
        Self { changes }
    }

    /// True when no key diverges from the baseline.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of diverging keys.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Namespaced keys of the diverging settings, in declaration order.
    pub fn keys(&self) -> Vec<&str> {
        self.changes.iter().map(|c| c.key.as_str()).collect()
    }
}

/// A single diverging setting.
///
/// Values are in their persisted string form: fields verbatim, flags
/// serialized through the `"1"`/`"0"` convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingChange {
    /// Namespaced setting key.
    pub key: String,
    /// Baseline value, or `None` when the key is absent from the store.
    pub baseline: Option<String>,
    /// Working value as it would be persisted.
    pub working: String,
}
