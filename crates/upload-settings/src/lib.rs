//! Admin settings synchronization for the image-upload plugin.
//!
//! This crate manages the plugin's admin settings form: a working set of
//! editable values, live change detection against the host's settings
//! baseline, and a guarded asynchronous batch save. Host services (settings
//! store, notifier, translator, redraw scheduler) are injected through the
//! traits in [`host`].

pub mod diff;
pub mod error;
pub mod host;
pub mod keys;
pub mod observable;
pub mod render;
pub mod session;

pub use diff::{SettingChange, SettingsDiff};
pub use error::{Error, Result};
pub use host::{Alert, AlertHandle, AlertKind, Notifier, RedrawHandle, SettingsStore, Translator};
pub use observable::Observable;
pub use render::{PageView, render};
pub use session::{FormSession, SubmitOutcome};
