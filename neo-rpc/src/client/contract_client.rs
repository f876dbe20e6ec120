// Copyright (C) 2015-2025 The Neo Project.
//
// contract_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::models::RpcInvokeResult;
use super::{
    ContractArgument, ContractClientResult, NodeApi, ScriptFactory, SignedTransaction,
    StandardScriptFactory, TransactionAssembler, TransactionManagerFactory,
};
use neo_core::{Contract, ContractManifest, Signer};
use neo_crypto::KeyPair;
use neo_primitives::{UInt160, UInt256, WitnessScope};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Contract related operations through the RPC API
pub struct ContractClient {
    /// Node used for dry runs and broadcasts
    node: Arc<dyn NodeApi>,

    scripts: Arc<dyn ScriptFactory>,

    assembler: Arc<dyn TransactionAssembler>,
}

impl ContractClient {
    /// Creates a client with the standard script factory and an assembler
    /// backed by the same node.
    pub fn new<N: NodeApi + 'static>(node: Arc<N>) -> Self {
        let assembler = TransactionManagerFactory::new(Arc::clone(&node));
        Self {
            node,
            scripts: Arc::new(StandardScriptFactory::new()),
            assembler: Arc::new(assembler),
        }
    }

    /// Creates a client from explicit components.
    pub fn with_components(
        node: Arc<dyn NodeApi>,
        scripts: Arc<dyn ScriptFactory>,
        assembler: Arc<dyn TransactionAssembler>,
    ) -> Self {
        Self {
            node,
            scripts,
            assembler,
        }
    }

    /// Dry-runs `operation` on `script_hash` and returns the VM result.
    ///
    /// Nothing is signed or broadcast. A faulted execution is a normal
    /// result; only transport and node errors fail.
    pub async fn test_invoke(
        &self,
        script_hash: &UInt160,
        operation: &str,
        args: &[ContractArgument],
    ) -> ContractClientResult<RpcInvokeResult> {
        let script = self
            .scripts
            .make_invocation_script(script_hash, operation, args)?;
        let result = self.node.invoke_script(&script, &[]).await?;

        debug!(
            contract = %script_hash,
            operation,
            state = %result.state,
            gas_consumed = result.gas_consumed,
            "test invoke finished"
        );
        Ok(result)
    }

    /// [`test_invoke`](Self::test_invoke) with untyped JSON arguments.
    pub async fn test_invoke_json(
        &self,
        script_hash: &UInt160,
        operation: &str,
        args: &[Value],
    ) -> ContractClientResult<RpcInvokeResult> {
        let args = ContractArgument::from_json_args(args)?;
        self.test_invoke(script_hash, operation, &args).await
    }

    /// Builds a signed transaction deploying `bytecode` with `manifest`.
    ///
    /// The key's account is the only signer, with `CalledByEntry` scope, and
    /// pays both fees. The transaction is not broadcast.
    pub async fn create_deploy_contract_tx(
        &self,
        bytecode: &[u8],
        manifest: &ContractManifest,
        key: &KeyPair,
    ) -> ContractClientResult<SignedTransaction> {
        let script = self.scripts.make_deployment_script(bytecode, manifest)?;

        let contract = Contract::create_signature_contract(&key.public_key())?;
        let sender = contract.script_hash();
        let signers = [Signer::new(sender, WitnessScope::CALLED_BY_ENTRY)];

        let manager = self
            .assembler
            .make_transaction(&script, &signers, &[contract.script])
            .await?;
        let signed = manager.add_signature(key)?.sign()?;

        info!(
            contract = %manifest.name,
            %sender,
            system_fee = signed.transaction().system_fee(),
            network_fee = signed.transaction().network_fee(),
            "created deploy transaction"
        );
        Ok(signed)
    }

    /// Builds the deploy transaction and broadcasts it, returning its hash.
    pub async fn deploy(
        &self,
        bytecode: &[u8],
        manifest: &ContractManifest,
        key: &KeyPair,
    ) -> ContractClientResult<UInt256> {
        let signed = self
            .create_deploy_contract_tx(bytecode, manifest, key)
            .await?;
        let hash = self.node.send_raw_transaction(signed.transaction()).await?;
        info!(%hash, "deploy transaction sent");
        Ok(hash)
    }
}

impl fmt::Debug for ContractClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractClient")
            .field("network", &self.node.protocol_settings().network)
            .finish_non_exhaustive()
    }
}
