// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_manager_factory.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{ContractClientError, ContractClientResult, NodeApi, TransactionManager};
use async_trait::async_trait;
use neo_core::{Signer, Transaction, Witness};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns a script and its signers into an unsigned draft.
#[async_trait]
pub trait TransactionAssembler: Send + Sync {
    /// Fills fees, nonce and validity window for `script` signed by `signers`.
    ///
    /// `verification_scripts` line up with `signers` and are only used for
    /// the network fee estimate. A missing or empty entry lets the node
    /// resolve the account as a deployed contract.
    async fn make_transaction(
        &self,
        script: &[u8],
        signers: &[Signer],
        verification_scripts: &[Vec<u8>],
    ) -> ContractClientResult<TransactionManager>;
}

/// Assembles drafts by asking a node for every fee and validity value.
pub struct TransactionManagerFactory<N: NodeApi + ?Sized> {
    node: Arc<N>,
}

impl<N: NodeApi + ?Sized> TransactionManagerFactory<N> {
    pub fn new(node: Arc<N>) -> Self {
        Self { node }
    }

    /// The node this factory queries.
    pub fn node(&self) -> &Arc<N> {
        &self.node
    }
}

impl<N: NodeApi + ?Sized> Clone for TransactionManagerFactory<N> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

#[async_trait]
impl<N: NodeApi + ?Sized> TransactionAssembler for TransactionManagerFactory<N> {
    async fn make_transaction(
        &self,
        script: &[u8],
        signers: &[Signer],
        verification_scripts: &[Vec<u8>],
    ) -> ContractClientResult<TransactionManager> {
        if signers.is_empty() {
            return Err(ContractClientError::NoSigners);
        }
        let mut accounts = HashSet::with_capacity(signers.len());
        if let Some(signer) = signers.iter().find(|s| !accounts.insert(s.account)) {
            return Err(ContractClientError::DuplicateSigner {
                account: signer.account,
            });
        }
        if verification_scripts.len() > signers.len() {
            return Err(ContractClientError::fee_estimation_failed(format!(
                "{} verification scripts for {} signers",
                verification_scripts.len(),
                signers.len()
            )));
        }

        let invoke_result = self.node.invoke_script(script, signers).await?;
        if !invoke_result.is_halt() {
            let reason = invoke_result
                .exception
                .clone()
                .unwrap_or_else(|| format!("script ended in {}", invoke_result.state));
            warn!(state = %invoke_result.state, %reason, "dry run of transaction script failed");
            return Err(ContractClientError::FeeEstimationFailed { reason });
        }

        let settings = self.node.protocol_settings();
        let network = settings.network;
        let increment = settings.max_valid_until_block_increment;

        let block_count = self.node.get_block_count().await?;
        let valid_until_block = block_count.saturating_sub(1).saturating_add(increment);

        let mut tx = Transaction::new(script.to_vec(), signers.to_vec());
        tx.set_nonce(self.node.next_nonce());
        tx.set_system_fee(invoke_result.gas_consumed);
        tx.set_valid_until_block(valid_until_block);

        let fee_witnesses = (0..signers.len())
            .map(|i| {
                let verification = verification_scripts.get(i).cloned().unwrap_or_default();
                Witness::new(Vec::new(), verification)
            })
            .collect();
        tx.set_witnesses(fee_witnesses);
        let network_fee = self
            .node
            .calculate_network_fee(&tx)
            .await
            .map_err(|err| ContractClientError::fee_estimation_failed(err.to_string()))?;
        tx.set_witnesses(Vec::new());
        tx.set_network_fee(network_fee);

        debug!(
            system_fee = tx.system_fee(),
            network_fee,
            valid_until_block,
            signers = signers.len(),
            "assembled transaction draft"
        );
        Ok(TransactionManager::new(tx, network))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RpcClient;
    use mockito::{Matcher, Mock, Server};
    use neo_config::ProtocolSettings;
    use neo_core::Contract;
    use neo_crypto::KeyPair;
    use neo_primitives::WitnessScope;
    use serde_json::{json, Value};
    use std::net::TcpListener;
    use url::Url;

    fn localhost_binding_permitted() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn rpc_response(result: Value) -> String {
        json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string()
    }

    fn invoke_result_payload(state: &str, gas_consumed: i64) -> Value {
        let exception = match state {
            "FAULT" => json!("ABORT is executed"),
            _ => Value::Null,
        };
        json!({
            "script": "AA==",
            "state": state,
            "gasconsumed": gas_consumed.to_string(),
            "exception": exception,
            "stack": []
        })
    }

    async fn mock_method(server: &mut Server, method: &str, result: Value, hits: usize) -> Mock {
        server
            .mock("POST", "/")
            .match_body(Matcher::Regex(format!(r#""method"\s*:\s*"{method}""#)))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rpc_response(result))
            .expect(hits)
            .create_async()
            .await
    }

    fn key_and_signer(seed: u8) -> (KeyPair, Signer, Vec<u8>) {
        let key = KeyPair::from_private_key(&[seed; 32]).expect("key");
        let contract = Contract::create_signature_contract(&key.public_key()).expect("contract");
        let signer = Signer::new(contract.script_hash(), WitnessScope::CALLED_BY_ENTRY);
        (key, signer, contract.script)
    }

    #[tokio::test]
    async fn make_transaction_fills_fees_and_window() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _invoke =
            mock_method(&mut server, "invokescript", invoke_result_payload("HALT", 100), 1).await;
        let _count = mock_method(&mut server, "getblockcount", json!(100), 1).await;
        let _fee = mock_method(
            &mut server,
            "calculatenetworkfee",
            json!({"networkfee": "1230610"}),
            1,
        )
        .await;

        let url = Url::parse(&server.url()).unwrap();
        let client = RpcClient::builder(url)
            .protocol_settings(ProtocolSettings::testnet())
            .build()
            .unwrap();
        let (_, signer, verification) = key_and_signer(1);
        let factory = TransactionManagerFactory::new(Arc::new(client));

        let manager = factory
            .make_transaction(&[0x01], &[signer.clone()], &[verification])
            .await
            .expect("manager");

        let tx = manager.tx();
        assert_eq!(tx.system_fee(), 100);
        assert_eq!(tx.network_fee(), 1_230_610);
        assert_eq!(tx.valid_until_block(), 99 + 5760);
        assert_eq!(tx.signers(), &[signer]);
        assert_eq!(tx.script(), &[0x01]);
        assert!(tx.witnesses().is_empty());
        assert_eq!(manager.network(), ProtocolSettings::testnet().network);
    }

    #[tokio::test]
    async fn faulted_dry_run_fails_fee_estimation() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _invoke =
            mock_method(&mut server, "invokescript", invoke_result_payload("FAULT", 0), 1).await;
        let count = mock_method(&mut server, "getblockcount", json!(100), 0).await;

        let url = Url::parse(&server.url()).unwrap();
        let client = RpcClient::builder(url).build().unwrap();
        let (_, signer, _) = key_and_signer(2);
        let factory = TransactionManagerFactory::new(Arc::new(client));

        let err = factory
            .make_transaction(&[0x01], &[signer], &[])
            .await
            .expect_err("fault");
        match err {
            ContractClientError::FeeEstimationFailed { reason } => {
                assert_eq!(reason, "ABORT is executed");
            }
            other => panic!("unexpected error {other}"),
        }
        count.assert_async().await;
    }

    #[tokio::test]
    async fn empty_signers_fail_before_any_request() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let url = Url::parse(&server.url()).unwrap();
        let client = RpcClient::builder(url).build().unwrap();
        let factory = TransactionManagerFactory::new(Arc::new(client));

        let err = factory
            .make_transaction(&[0x01], &[], &[])
            .await
            .expect_err("no signers");
        assert!(matches!(err, ContractClientError::NoSigners));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn duplicate_signers_fail_before_any_request() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let url = Url::parse(&server.url()).unwrap();
        let client = RpcClient::builder(url).build().unwrap();
        let factory = TransactionManagerFactory::new(Arc::new(client));
        let (_, first, _) = key_and_signer(3);
        let (_, second, _) = key_and_signer(4);
        let repeated = Signer::new(first.account, WitnessScope::GLOBAL);

        let err = factory
            .make_transaction(&[0x01], &[first.clone(), second, repeated], &[])
            .await
            .expect_err("duplicate");
        match err {
            ContractClientError::DuplicateSigner { account } => {
                assert_eq!(account, first.account);
            }
            other => panic!("unexpected error {other}"),
        }
        mock.assert_async().await;
    }
}
