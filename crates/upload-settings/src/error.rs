//! Error types for upload-settings

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to save settings: {message}")]
    SaveFailed { message: String },

    #[error("Unknown upload method: {method}")]
    UnknownUploadMethod { method: String },
}
