// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_request.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Request ID
    pub id: Value,

    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Method name
    pub method: String,

    /// Positional parameters
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Creates a request with id `1`, the way every client call is numbered.
    pub fn new<S: Into<String>>(method: S, params: Vec<Value>) -> Self {
        Self {
            id: Value::from(1),
            json_rpc: "2.0".to_string(),
            method: method.into(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_jsonrpc_field() {
        let request = RpcRequest::new("getblockcount", vec![]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({"id": 1, "jsonrpc": "2.0", "method": "getblockcount", "params": []})
        );
    }
}
