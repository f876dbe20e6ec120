//! Error types for script construction.

use thiserror::Error;

/// Errors raised while building or decoding scripts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// Invalid operation
    #[error("Invalid operation: {message}")]
    InvalidOperation { message: String },

    /// Byte does not map to a known opcode
    #[error("Invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),
}

impl VmError {
    /// Creates an invalid operation error from a message.
    pub fn invalid_operation_msg<S: Into<String>>(message: S) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}

/// Result type for VM operations.
pub type VmResult<T> = Result<T, VmError>;
