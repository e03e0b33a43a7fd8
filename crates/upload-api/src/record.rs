//! Read-only view over a persisted split record
//!
//! Records arrive from the host's persistence layer as loosely-typed
//! attribute rows. The accessors here reproduce the host ORM's coercion
//! semantics: absent or null attributes coerce to empty/zero, and numeric
//! strings coerce to integers. Validation happened upstream; none is
//! repeated here.

use std::collections::BTreeMap;

use serde_json::Value;

/// A stored split record as read from the persistence layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitRecord {
    attributes: BTreeMap<String, Value>,
}

impl SplitRecord {
    /// Wrap an attribute row.
    pub fn new(attributes: BTreeMap<String, Value>) -> Self {
        Self { attributes }
    }

    /// Build a record from attribute name/value pairs.
    pub fn from_pairs<K>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self
    where
        K: Into<String>,
    {
        Self {
            attributes: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Raw attribute access.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// The stored file reference. Absent or non-string values coerce to the
    /// empty string.
    pub fn file_name(&self) -> String {
        self.attribute("file_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// The owning post identifier, coerced to an integer: numbers pass
    /// through (floats truncate), numeric strings parse, everything else is
    /// zero.
    pub fn post_id(&self) -> i64 {
        match self.attribute("post_id") {
            Some(value) => coerce_int(value),
            None => 0,
        }
    }
}

fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s
            .parse::<i64>()
            .ok()
            .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
            .unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}
