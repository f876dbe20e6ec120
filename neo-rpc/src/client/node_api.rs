// Copyright (C) 2015-2025 The Neo Project.
//
// node_api.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::models::RpcInvokeResult;
use super::{ClientRpcError, RpcClient};
use async_trait::async_trait;
use neo_config::ProtocolSettings;
use neo_core::{Signer, Transaction};
use neo_primitives::UInt256;

/// The node operations the contract pipeline depends on.
///
/// [`RpcClient`] implements it over JSON-RPC; tests substitute an in-memory node.
#[async_trait]
pub trait NodeApi: Send + Sync {
    /// Dry-runs `script` with `signers` in the verification context (`invokescript`).
    async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, ClientRpcError>;

    /// Current chain height (`getblockcount`).
    async fn get_block_count(&self) -> Result<u32, ClientRpcError>;

    /// Network fee the node requires for `tx` (`calculatenetworkfee`).
    async fn calculate_network_fee(&self, tx: &Transaction) -> Result<i64, ClientRpcError>;

    /// Broadcasts a signed transaction (`sendrawtransaction`).
    async fn send_raw_transaction(&self, tx: &Transaction) -> Result<UInt256, ClientRpcError>;

    /// Settings of the network the node runs.
    fn protocol_settings(&self) -> &ProtocolSettings;

    /// Nonce for the next transaction.
    fn next_nonce(&self) -> u32 {
        rand::random()
    }
}

#[async_trait]
impl NodeApi for RpcClient {
    async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        self.invoke_script_with_signers(script, signers).await
    }

    async fn get_block_count(&self) -> Result<u32, ClientRpcError> {
        RpcClient::get_block_count(self).await
    }

    async fn calculate_network_fee(&self, tx: &Transaction) -> Result<i64, ClientRpcError> {
        RpcClient::calculate_network_fee(self, tx).await
    }

    async fn send_raw_transaction(&self, tx: &Transaction) -> Result<UInt256, ClientRpcError> {
        RpcClient::send_raw_transaction(self, tx).await
    }

    fn protocol_settings(&self) -> &ProtocolSettings {
        RpcClient::protocol_settings(self)
    }
}
