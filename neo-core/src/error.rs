//! Error types for the core payloads.

use neo_io::IoError;
use thiserror::Error;

/// Errors raised while building, serializing or parsing core payloads.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Binary serialization failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Value has the wrong shape
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// Manifest failed validation
    #[error("Invalid manifest: {message}")]
    InvalidManifest { message: String },
}

impl CoreError {
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn invalid_manifest<S: Into<String>>(message: S) -> Self {
        Self::InvalidManifest {
            message: message.into(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
