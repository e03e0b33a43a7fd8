//! Pure render model for the admin settings page
//!
//! [`render`] turns a [`FormSession`] into a [`PageView`]: a plain
//! description of what the page shows right now. It has no side effects and
//! holds no state of its own, so the derived UI rules (default upload
//! method, disabled resize inputs, conditional imgur section, submit
//! enablement) can be tested without any UI framework.

use serde::Serialize;

use crate::keys::UploadMethod;
use crate::session::FormSession;

/// Derived view state for the whole settings page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub upload_method: SelectView,
    pub resize: ResizeView,
    pub imgur: ImgurView,
    pub submit: ButtonView,
}

/// The upload method dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectView {
    pub label: String,
    pub help_text: String,
    pub options: Vec<SelectOption>,
    /// Effective selection; defaults to `local` when the working value is
    /// empty.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The resize fieldset: a toggle plus two dimension inputs.
///
/// The inputs are always rendered; they are merely disabled while the toggle
/// is off. Their working values keep participating in change detection even
/// while disabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResizeView {
    pub label: String,
    pub help_text: String,
    pub toggle_label: String,
    /// State of the resize toggle.
    pub enabled: bool,
    pub max_width: InputView,
    pub max_height: InputView,
}

/// A labelled text input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputView {
    pub label: String,
    pub value: String,
    pub enabled: bool,
}

/// The imgur credentials section, shown only for the imgur upload method.
/// Hiding the section does not clear its stored value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImgurView {
    pub visible: bool,
    pub label: String,
    pub client_id: InputView,
}

/// The save button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    pub label: String,
    /// Disabled while nothing changed or a save is in flight.
    pub enabled: bool,
    pub loading: bool,
}

/// Compute the current view of the settings page. Pure: reads the session
/// and the injected translator, mutates nothing.
pub fn render(session: &FormSession) -> PageView {
    let t = |key: &str| session.translate(key);

    let method = UploadMethod::from_setting(&session.upload_method.get());
    let must_resize = session.must_resize.get();
    let saving = session.is_saving();

    PageView {
        upload_method: SelectView {
            label: t("flagrow-image-upload.admin.labels.upload_method"),
            help_text: t("flagrow-image-upload.admin.help_texts.upload_method"),
            options: vec![
                SelectOption {
                    value: UploadMethod::Local.to_string(),
                    label: t("flagrow-image-upload.admin.upload_methods.local"),
                },
                SelectOption {
                    value: UploadMethod::Imgur.to_string(),
                    label: t("flagrow-image-upload.admin.upload_methods.imgur"),
                },
            ],
            value: method.to_string(),
        },
        resize: ResizeView {
            label: t("flagrow-image-upload.admin.labels.resize.title"),
            help_text: t("flagrow-image-upload.admin.help_texts.resize"),
            toggle_label: t("flagrow-image-upload.admin.labels.resize.toggle"),
            enabled: must_resize,
            max_width: InputView {
                label: t("flagrow-image-upload.admin.labels.resize.max_width"),
                value: session.resize_max_width.get(),
                enabled: must_resize,
            },
            max_height: InputView {
                label: t("flagrow-image-upload.admin.labels.resize.max_height"),
                value: session.resize_max_height.get(),
                enabled: must_resize,
            },
        },
        imgur: ImgurView {
            visible: method.requires_client_id(),
            label: t("flagrow-image-upload.admin.labels.imgur.title"),
            client_id: InputView {
                label: t("flagrow-image-upload.admin.labels.imgur.client_id"),
                value: session.imgur_client_id.get(),
                enabled: true,
            },
        },
        submit: ButtonView {
            label: t("flagrow-image-upload.admin.buttons.save"),
            enabled: session.changed() && !saving,
            loading: saving,
        },
    }
}
