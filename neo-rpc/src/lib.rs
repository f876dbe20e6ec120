//! # Neo RPC
//!
//! JSON-RPC client for Neo N3 nodes and the contract transaction pipeline
//! built on top of it.
//!
//! The pipeline has three parts:
//! - a script factory that encodes contract calls and deployments as VM scripts,
//! - a transaction assembler that asks the node for fees, nonce and validity
//!   window and collects signatures,
//! - the [`ContractClient`] facade that dry-runs calls and builds signed
//!   deployment transactions.
//!
//! ## Features
//!
//! - `client` (default): RPC client, models and the contract pipeline
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use neo_rpc::{ContractArgument, ContractClient, RpcClient};
//!
//! let rpc = RpcClient::builder(url).build()?;
//! let contracts = ContractClient::new(Arc::new(rpc));
//! let result = contracts
//!     .test_invoke(&gas_hash, "balanceOf", &[ContractArgument::Hash160(account)])
//!     .await?;
//! ```

pub mod error_code;

#[cfg(feature = "client")]
pub mod client;

pub use error_code::RpcErrorCode;

#[cfg(feature = "client")]
pub use client::{
    ClientRpcError, ContractArgument, ContractClient, ContractClientError, ContractClientResult,
    NodeApi, RpcClient, RpcClientBuilder, RpcClientHooks, RpcInvokeResult, RpcRequestOutcome,
    ScriptFactory, SignedTransaction, StandardScriptFactory, TransactionAssembler,
    TransactionManager, TransactionManagerFactory,
};
