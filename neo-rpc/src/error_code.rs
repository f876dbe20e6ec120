//! JSON-RPC error codes used by Neo nodes and by this client.

use std::fmt;

/// Well-known JSON-RPC error codes.
///
/// The first five are defined by JSON-RPC 2.0; the rest are the Neo node
/// codes the contract pipeline is likely to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    /// The node could not find the requested contract or account.
    UnknownContract,
    /// The transaction or block failed verification.
    VerificationFailed,
    /// The transaction expired before it was accepted.
    ExpiredTransaction,
    /// The sender cannot pay the fees.
    InsufficientFunds,
    /// The transaction was already accepted.
    AlreadyExists,
}

impl RpcErrorCode {
    /// Numeric code carried in the `error.code` field.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::UnknownContract => -102,
            Self::VerificationFailed => -500,
            Self::ExpiredTransaction => -510,
            Self::InsufficientFunds => -511,
            Self::AlreadyExists => -501,
        }
    }

    /// Maps a numeric code back to a known variant.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        [
            Self::ParseError,
            Self::InvalidRequest,
            Self::MethodNotFound,
            Self::InvalidParams,
            Self::InternalError,
            Self::UnknownContract,
            Self::VerificationFailed,
            Self::ExpiredTransaction,
            Self::InsufficientFunds,
            Self::AlreadyExists,
        ]
        .into_iter()
        .find(|candidate| candidate.code() == code)
    }
}

impl fmt::Display for RpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<RpcErrorCode> for i32 {
    fn from(code: RpcErrorCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        assert_eq!(RpcErrorCode::ParseError.code(), -32700);
        assert_eq!(RpcErrorCode::InternalError.code(), -32603);
        assert_eq!(
            RpcErrorCode::from_code(-32601),
            Some(RpcErrorCode::MethodNotFound)
        );
        assert_eq!(RpcErrorCode::from_code(1), None);
    }
}
