// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::RpcErrorCode;
use neo_core::CoreError;
use neo_crypto::CryptoError;
use neo_primitives::UInt160;
use neo_vm::VmError;
use thiserror::Error;

/// Error returned by a node or raised while talking to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("RPC error {code}: {message}")]
pub struct ClientRpcError {
    code: i32,
    message: String,
}

impl ClientRpcError {
    pub fn new<S: Into<String>>(code: i32, message: S) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Error raised on the client side while building a request or reading a result.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::new(RpcErrorCode::InternalError.code(), message)
    }

    /// Error raised when the node's reply is not a JSON-RPC response.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::new(RpcErrorCode::ParseError.code(), message)
    }

    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The well-known code this error carries, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<RpcErrorCode> {
        RpcErrorCode::from_code(self.code)
    }
}

/// Errors of the contract script and transaction pipeline.
#[derive(Debug, Error)]
pub enum ContractClientError {
    /// An argument cannot be encoded as a contract parameter.
    #[error("Unsupported argument type: {kind}")]
    UnsupportedArgumentType { kind: String },

    /// Deployment was requested without contract bytecode.
    #[error("Contract bytecode is empty")]
    EmptyBytecode,

    /// The canonical manifest text is larger than the node accepts.
    #[error("Manifest is {size} bytes, limit is {limit}")]
    ManifestTooLarge { size: usize, limit: usize },

    /// A transaction needs at least one signer.
    #[error("Transaction has no signers")]
    NoSigners,

    /// An account appears more than once among the signers.
    #[error("Duplicate signer {account}")]
    DuplicateSigner { account: UInt160 },

    /// The node could not estimate the fees of the transaction.
    #[error("Fee estimation failed: {reason}")]
    FeeEstimationFailed { reason: String },

    /// The key's account is not one of the transaction signers.
    #[error("Key account {account} is not a signer of the transaction")]
    UnknownSigner { account: UInt160 },

    /// Some signers have no witness yet.
    #[error("Missing witnesses for {}", join_accounts(.missing))]
    IncompleteSignatures { missing: Vec<UInt160> },

    #[error(transparent)]
    Rpc(#[from] ClientRpcError),

    #[error("VM error: {0}")]
    Vm(#[from] VmError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// The manifest could not be turned into its canonical text.
    #[error("Manifest error: {0}")]
    Manifest(serde_json::Error),

    #[error("Payload error: {0}")]
    Core(CoreError),
}

impl ContractClientError {
    pub fn unsupported_argument<S: Into<String>>(kind: S) -> Self {
        Self::UnsupportedArgumentType { kind: kind.into() }
    }

    pub fn fee_estimation_failed<S: Into<String>>(reason: S) -> Self {
        Self::FeeEstimationFailed {
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for ContractClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Json(inner) => Self::Manifest(inner),
            other => Self::Core(other),
        }
    }
}

fn join_accounts(accounts: &[UInt160]) -> String {
    accounts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type of the contract pipeline.
pub type ContractClientResult<T> = Result<T, ContractClientError>;
