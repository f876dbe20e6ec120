use thiserror::Error;

/// Errors raised by key handling and signing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("invalid private key material")]
    InvalidPrivateKey,

    #[error("invalid public key encoding")]
    InvalidPublicKey,

    #[error("invalid signature payload")]
    InvalidSignature,

    #[error("invalid base58check string: {message}")]
    InvalidBase58 { message: String },

    #[error("invalid WIF: {message}")]
    InvalidWif { message: String },
}

impl CryptoError {
    pub fn invalid_base58<S: Into<String>>(message: S) -> Self {
        Self::InvalidBase58 {
            message: message.into(),
        }
    }

    pub fn invalid_wif<S: Into<String>>(message: S) -> Self {
        Self::InvalidWif {
            message: message.into(),
        }
    }
}

pub type CryptoResult<T> = Result<T, CryptoError>;
