// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client/client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::super::models::{RpcInvokeResult, RpcRequest, RpcResponse, RpcVersion};
use super::super::ClientRpcError;
use super::builder::RpcClientBuilder;
use super::hooks::RpcRequestOutcome;
use super::{RpcClient, RpcClientHooks};
use base64::{engine::general_purpose, Engine as _};
use neo_config::ProtocolSettings;
use neo_core::{Signer, Transaction};
use neo_primitives::UInt256;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

impl RpcClient {
    /// Creates a configurable builder for the RPC client.
    #[must_use]
    pub fn builder(url: Url) -> RpcClientBuilder {
        RpcClientBuilder::new(url)
    }

    /// Creates a new RPC client with optional basic auth.
    pub fn new(
        url: Url,
        rpc_user: Option<String>,
        rpc_pass: Option<String>,
        protocol_settings: Option<ProtocolSettings>,
    ) -> Result<Self, ClientRpcError> {
        RpcClientBuilder::new(url)
            .with_optional_auth(rpc_user, rpc_pass)
            .protocol_settings(protocol_settings.unwrap_or_default())
            .build()
    }

    /// Creates a new RPC client with an existing HTTP client and hook/timeout configuration.
    #[must_use]
    pub fn with_client_config(
        client: Client,
        url: Url,
        protocol_settings: ProtocolSettings,
        hooks: RpcClientHooks,
        timeout: Duration,
    ) -> Self {
        Self {
            base_address: url,
            http_client: client,
            protocol_settings: Arc::new(protocol_settings),
            request_timeout: timeout,
            hooks,
        }
    }

    /// The node endpoint.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.base_address
    }

    /// Settings of the network this client talks to.
    #[must_use]
    pub fn protocol_settings(&self) -> &ProtocolSettings {
        &self.protocol_settings
    }

    fn as_rpc_response(content: &str, throw_on_error: bool) -> Result<RpcResponse, ClientRpcError> {
        let mut response: RpcResponse = serde_json::from_str(content)
            .map_err(|e| ClientRpcError::parse(format!("Parse error: {e}")))?;

        response.raw_response = Some(content.to_string());

        if let Some(ref error) = response.error {
            if throw_on_error {
                return Err(ClientRpcError::new(error.code, error.message.clone()));
            }
        }

        Ok(response)
    }

    /// Sends a request and returns the full response envelope.
    ///
    /// With `throw_on_error` a node error becomes `Err`; otherwise it is left
    /// in [`RpcResponse::error`].
    pub async fn send_async(
        &self,
        request: RpcRequest,
        throw_on_error: bool,
    ) -> Result<RpcResponse, ClientRpcError> {
        let method = request.method.clone();
        let start = Instant::now();
        debug!(method = %method, url = %self.base_address, "sending RPC request");

        let result: Result<RpcResponse, ClientRpcError> = async {
            let response = self
                .http_client
                .post(self.base_address.clone())
                .json(&request)
                .send()
                .await
                .map_err(|e| ClientRpcError::internal(format!("HTTP error: {e}")))?;

            let content = response
                .text()
                .await
                .map_err(|e| ClientRpcError::internal(format!("Failed to read response: {e}")))?;

            Self::as_rpc_response(&content, throw_on_error)
        }
        .await;

        let elapsed = start.elapsed();
        match &result {
            Ok(response) => {
                let error_code = response.error.as_ref().map(|e| e.code);
                self.hooks.notify(RpcRequestOutcome {
                    method,
                    elapsed,
                    success: error_code.is_none(),
                    timeout: self.request_timeout,
                    error_code,
                });
            }
            Err(err) => {
                debug!(method = %method, error = %err, "RPC request failed");
                self.hooks.notify(RpcRequestOutcome {
                    method,
                    elapsed,
                    success: false,
                    timeout: self.request_timeout,
                    error_code: Some(err.code()),
                });
            }
        }

        result
    }

    /// Sends an RPC request and returns its `result` member.
    pub async fn rpc_send_async(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, ClientRpcError> {
        let request = RpcRequest::new(method, params);
        let response = self.send_async(request, true).await?;
        response
            .result
            .ok_or_else(|| ClientRpcError::internal("No result returned"))
    }

    async fn rpc_send_typed<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, ClientRpcError> {
        let result = self.rpc_send_async(method, params).await?;
        serde_json::from_value(result)
            .map_err(|e| ClientRpcError::internal(format!("Invalid {method} result: {e}")))
    }

    /// Gets the number of blocks in the main chain.
    pub async fn get_block_count(&self) -> Result<u32, ClientRpcError> {
        self.rpc_send_typed("getblockcount", vec![]).await
    }

    /// Gets the node version and the protocol settings it runs with.
    pub async fn get_version(&self) -> Result<RpcVersion, ClientRpcError> {
        self.rpc_send_typed("getversion", vec![]).await
    }

    /// Invokes a VM script without affecting blockchain state.
    pub async fn invoke_script(&self, script: &[u8]) -> Result<RpcInvokeResult, ClientRpcError> {
        self.invoke_script_with_signers(script, &[]).await
    }

    /// Invokes a VM script with the given signers in the verification context.
    pub async fn invoke_script_with_signers(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> Result<RpcInvokeResult, ClientRpcError> {
        let mut parameters = Vec::with_capacity(2);
        parameters.push(Value::String(general_purpose::STANDARD.encode(script)));

        if !signers.is_empty() {
            let signers = serde_json::to_value(signers).map_err(|err| {
                ClientRpcError::internal(format!(
                    "Failed to serialize signers for invokescript: {err}"
                ))
            })?;
            parameters.push(signers);
        }

        self.rpc_send_typed("invokescript", parameters).await
    }

    /// Asks the node for the network fee of `tx`.
    ///
    /// The node reads each signer's verification script from the matching
    /// witness; an empty verification script makes it look up a deployed
    /// contract instead.
    pub async fn calculate_network_fee(&self, tx: &Transaction) -> Result<i64, ClientRpcError> {
        let bytes = tx
            .to_bytes()
            .map_err(|err| ClientRpcError::internal(format!("serialization failed: {err}")))?;
        let result = self
            .rpc_send_async(
                "calculatenetworkfee",
                vec![Value::String(general_purpose::STANDARD.encode(bytes))],
            )
            .await?;
        let fee_token = result.get("networkfee").ok_or_else(|| {
            ClientRpcError::internal("Missing networkfee in calculatenetworkfee result")
        })?;
        match fee_token {
            Value::Number(value) => value
                .as_i64()
                .ok_or_else(|| ClientRpcError::internal(format!("Invalid networkfee value: {value}"))),
            Value::String(value) => value
                .parse::<i64>()
                .map_err(|_| ClientRpcError::internal(format!("Invalid networkfee value: {value}"))),
            _ => Err(ClientRpcError::internal("Invalid networkfee token type")),
        }
    }

    /// Broadcasts a signed transaction and returns its hash.
    pub async fn send_raw_transaction(&self, tx: &Transaction) -> Result<UInt256, ClientRpcError> {
        let bytes = tx
            .to_bytes()
            .map_err(|err| ClientRpcError::internal(format!("serialization failed: {err}")))?;
        let result = self
            .rpc_send_async(
                "sendrawtransaction",
                vec![Value::String(general_purpose::STANDARD.encode(bytes))],
            )
            .await?;
        let hash = result
            .get("hash")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientRpcError::internal("Missing hash in sendrawtransaction"))?;
        UInt256::parse(hash)
            .map_err(|err| ClientRpcError::internal(format!("Invalid tx hash: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RpcErrorCode;
    use mockito::{Matcher, Server};
    use neo_primitives::{UInt160, WitnessScope};
    use neo_vm::VMState;
    use serde_json::json;
    use std::net::TcpListener;
    use std::sync::Mutex;

    fn localhost_binding_permitted() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn rpc_response(result: Value) -> String {
        json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string()
    }

    fn method_matcher(method: &str) -> Matcher {
        Matcher::Regex(format!(r#""method"\s*:\s*"{method}""#))
    }

    fn client_for(server: &Server) -> RpcClient {
        let url = Url::parse(&server.url()).unwrap();
        RpcClient::builder(url).build().unwrap()
    }

    #[tokio::test]
    async fn get_block_count_returns_number() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(method_matcher("getblockcount"))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rpc_response(json!(1234)))
            .expect(1)
            .create_async()
            .await;

        let count = client_for(&server).get_block_count().await.unwrap();
        assert_eq!(count, 1234);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn node_errors_keep_code_and_message() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "error": {"code": -32601, "message": "Method not found"}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let err = client_for(&server).get_block_count().await.unwrap_err();
        assert_eq!(err.code(), -32601);
        assert_eq!(err.message(), "Method not found");
    }

    #[tokio::test]
    async fn unparsable_reply_is_parse_error() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(502)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let err = client_for(&server).get_block_count().await.unwrap_err();
        assert_eq!(err.error_code(), Some(RpcErrorCode::ParseError));
    }

    #[tokio::test]
    async fn invoke_script_sends_base64_script_and_signers() {
        if !localhost_binding_permitted() {
            return;
        }
        let account = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "method": "invokescript",
                "params": [
                    "AQI=",
                    [{"account": account.to_string(), "scopes": "CalledByEntry"}]
                ]
            })))
            .with_status(200)
            .with_body(rpc_response(json!({
                "script": "AQI=",
                "state": "FAULT",
                "gasconsumed": "2007570",
                "exception": "boom",
                "stack": []
            })))
            .expect(1)
            .create_async()
            .await;

        let signers = vec![Signer::new(account, WitnessScope::CALLED_BY_ENTRY)];
        let result = client_for(&server)
            .invoke_script_with_signers(&[0x01, 0x02], &signers)
            .await
            .unwrap();
        assert_eq!(result.state, VMState::FAULT);
        assert_eq!(result.gas_consumed, 2_007_570);
        assert_eq!(result.exception.as_deref(), Some("boom"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn calculate_network_fee_accepts_string_fee() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .match_body(method_matcher("calculatenetworkfee"))
            .with_status(200)
            .with_body(rpc_response(json!({"networkfee": "1230610"})))
            .create_async()
            .await;

        let tx = Transaction::new(vec![0x40], vec![]);
        let fee = client_for(&server).calculate_network_fee(&tx).await.unwrap();
        assert_eq!(fee, 1_230_610);
    }

    #[tokio::test]
    async fn send_raw_transaction_parses_hash() {
        if !localhost_binding_permitted() {
            return;
        }
        let hash = "0x6d7e2a7c1b3c5f1c8a9bd1bf3e7ad0f0b7b8c6c9e2f4a2f1e9d0c1b2a3f4e5d6";
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .match_body(method_matcher("sendrawtransaction"))
            .with_status(200)
            .with_body(rpc_response(json!({"hash": hash})))
            .create_async()
            .await;

        let tx = Transaction::new(vec![0x40], vec![]);
        let sent = client_for(&server).send_raw_transaction(&tx).await.unwrap();
        assert_eq!(sent.to_string(), hash);
    }

    #[tokio::test]
    async fn basic_auth_header_is_sent() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Basic dXNlcjpwYXNz")
            .with_status(200)
            .with_body(rpc_response(json!(7)))
            .expect(1)
            .create_async()
            .await;

        let url = Url::parse(&server.url()).unwrap();
        let client = RpcClient::new(url, Some("user".into()), Some("pass".into()), None).unwrap();
        assert_eq!(client.get_block_count().await.unwrap(), 7);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn hooks_observe_each_request() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(rpc_response(json!(1)))
            .create_async()
            .await;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let hooks = RpcClientHooks::new().on_request(move |outcome| {
            sink.lock().unwrap().push(outcome.clone());
        });
        let url = Url::parse(&server.url()).unwrap();
        let client = RpcClient::builder(url).hooks(hooks).build().unwrap();
        client.get_block_count().await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, "getblockcount");
        assert!(seen[0].success);
        assert_eq!(seen[0].error_code, None);
    }
}
