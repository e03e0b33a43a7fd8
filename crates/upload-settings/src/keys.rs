//! Setting keys, namespacing, and value conventions
//!
//! All plugin settings live in the host's flat key/value store under a
//! shared namespace prefix. This module declares the plugin's keys, the
//! prefixing rule, and the string convention used to persist boolean flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Namespace prefix for every setting persisted by this plugin.
pub const SETTINGS_PREFIX: &str = "flagrow.image-upload";

/// Upload method selector. Persisted as a free string.
pub const UPLOAD_METHOD: &str = "uploadMethod";
/// Client identifier for the third-party image host.
pub const IMGUR_CLIENT_ID: &str = "imgurClientId";
/// Maximum width applied when resizing is enabled.
pub const RESIZE_MAX_WIDTH: &str = "resizeMaxWidth";
/// Maximum height applied when resizing is enabled.
pub const RESIZE_MAX_HEIGHT: &str = "resizeMaxHeight";
/// Whether uploaded images are resized before storage.
pub const MUST_RESIZE: &str = "mustResize";

/// String-valued settings tracked by the admin form, in render order.
pub const FIELD_KEYS: [&str; 4] = [
    UPLOAD_METHOD,
    IMGUR_CLIENT_ID,
    RESIZE_MAX_WIDTH,
    RESIZE_MAX_HEIGHT,
];

/// Boolean-valued settings tracked by the admin form.
pub const FLAG_KEYS: [&str; 1] = [MUST_RESIZE];

/// Map a short key name to its namespaced form in the settings store.
pub fn prefixed(key: &str) -> String {
    format!("{}.{}", SETTINGS_PREFIX, key)
}

/// Read a persisted flag value.
///
/// A flag is true iff the stored string is exactly `"1"`. Absent values,
/// empty strings, `"0"`, and anything else all read as false.
pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some("1")
}

/// Serialize a flag for persistence. Writes `"1"` for true, `"0"` for false.
pub fn serialize_flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Where uploaded images are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMethod {
    /// Store uploads on the forum's own filesystem.
    #[default]
    Local,

    /// Upload to the Imgur image host using a client identifier.
    Imgur,
}

impl UploadMethod {
    /// Interpret a stored setting value, treating an empty string as the
    /// default method and falling back to the default for anything
    /// unrecognized.
    pub fn from_setting(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Whether this method needs the third-party client credentials section.
    pub fn requires_client_id(&self) -> bool {
        matches!(self, UploadMethod::Imgur)
    }
}

impl FromStr for UploadMethod {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "" | "local" => Ok(UploadMethod::Local),
            "imgur" => Ok(UploadMethod::Imgur),
            _ => Err(Error::UnknownUploadMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for UploadMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadMethod::Local => write!(f, "local"),
            UploadMethod::Imgur => write!(f, "imgur"),
        }
    }
}
