// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! RPC client and contract transaction pipeline.

mod contract_argument;
mod contract_client;
mod error;
pub mod models;
mod node_api;
mod rpc_client;
mod script_factory;
mod signed_transaction;
mod transaction_manager;
mod transaction_manager_factory;

pub use contract_argument::ContractArgument;
pub use contract_client::ContractClient;
pub use error::{ClientRpcError, ContractClientError, ContractClientResult};
pub use node_api::NodeApi;
pub use rpc_client::{RpcClient, RpcClientBuilder, RpcClientHooks, RpcRequestOutcome};
pub use script_factory::{ScriptFactory, StandardScriptFactory};
pub use signed_transaction::SignedTransaction;
pub use transaction_manager::TransactionManager;
pub use transaction_manager_factory::{TransactionAssembler, TransactionManagerFactory};

pub use models::{RpcInvokeResult, RpcRequest, RpcResponse, RpcResponseError, RpcStack};
