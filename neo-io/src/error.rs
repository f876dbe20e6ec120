//! Error type for binary serialization.

use thiserror::Error;

/// Errors raised while serializing Neo payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    /// A value cannot be represented on the wire.
    #[error("{context}: {value}")]
    InvalidData {
        /// What was being written.
        context: String,
        /// Why it was rejected.
        value: String,
    },
}

impl IoError {
    /// Creates an invalid data error.
    pub fn invalid_data<C: Into<String>, V: Into<String>>(context: C, value: V) -> Self {
        Self::InvalidData {
            context: context.into(),
            value: value.into(),
        }
    }
}

/// Result type for IO operations.
pub type IoResult<T> = std::result::Result<T, IoError>;
