// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_invoke_result.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use base64::{engine::general_purpose, Engine as _};
use neo_vm::VMState;
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Result of `invokescript` / `invokefunction`.
///
/// Notifications and diagnostics are not kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcInvokeResult {
    /// Script that was executed
    #[serde(with = "base64_script")]
    pub script: Vec<u8>,

    /// Final VM state
    pub state: VMState,

    /// GAS consumed, in datoshi
    #[serde(rename = "gasconsumed", with = "datoshi")]
    pub gas_consumed: i64,

    /// Items left on the evaluation stack
    #[serde(default)]
    pub stack: Vec<RpcStack>,

    /// Fault message when `state` is `FAULT`
    #[serde(default)]
    pub exception: Option<String>,

    /// Iterator session id, when the node keeps sessions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

impl RpcInvokeResult {
    /// Whether the script halted normally.
    #[must_use]
    pub fn is_halt(&self) -> bool {
        self.state.is_halt()
    }
}

/// One stack item as rendered by the node: `{"type": ..., "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcStack {
    #[serde(rename = "type")]
    pub item_type: String,

    #[serde(default)]
    pub value: Value,
}

impl RpcStack {
    /// Integer value of an `Integer` item.
    #[must_use]
    pub fn as_integer(&self) -> Option<BigInt> {
        if self.item_type != "Integer" {
            return None;
        }
        match &self.value {
            Value::String(text) => text.parse().ok(),
            Value::Number(number) => number.as_i64().map(BigInt::from),
            _ => None,
        }
    }

    /// Value of a `Boolean` item.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match (self.item_type.as_str(), &self.value) {
            ("Boolean", Value::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Decoded bytes of a `ByteString` or `Buffer` item.
    #[must_use]
    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        match (self.item_type.as_str(), &self.value) {
            ("ByteString" | "Buffer", Value::String(encoded)) => {
                general_purpose::STANDARD.decode(encoded).ok()
            }
            _ => None,
        }
    }

    /// UTF-8 text of a `ByteString` or `Buffer` item.
    #[must_use]
    pub fn as_string(&self) -> Option<String> {
        self.as_bytes().and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Elements of an `Array` or `Struct` item.
    #[must_use]
    pub fn as_array(&self) -> Option<Vec<RpcStack>> {
        match self.item_type.as_str() {
            "Array" | "Struct" => serde_json::from_value(self.value.clone()).ok(),
            _ => None,
        }
    }
}

mod base64_script {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        general_purpose::STANDARD
            .decode(encoded)
            .map_err(D::Error::custom)
    }
}

/// Nodes render GAS amounts as decimal strings; older ones as numbers.
mod datoshi {
    use super::*;
    use serde::de::Error as _;

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(text) => text.parse().map_err(D::Error::custom),
            Value::Number(number) => number
                .as_i64()
                .ok_or_else(|| D::Error::custom(format!("invalid GAS amount {number}"))),
            other => Err(D::Error::custom(format!("invalid GAS amount {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_halt_result() {
        let json = json!({
            "script": "EMAfDAhkZWNpbWFscwwU",
            "state": "HALT",
            "gasconsumed": "984060",
            "exception": null,
            "notifications": [],
            "stack": [{"type": "Integer", "value": "8"}]
        });
        let result: RpcInvokeResult = serde_json::from_value(json).unwrap();
        assert!(result.is_halt());
        assert_eq!(result.gas_consumed, 984_060);
        assert_eq!(result.stack[0].as_integer(), Some(BigInt::from(8)));
        assert!(result.exception.is_none());
        assert_eq!(&result.script[..2], &[0x10, 0xc0]);
    }

    #[test]
    fn parses_fault_result() {
        let json = json!({
            "script": "",
            "state": "FAULT",
            "gasconsumed": 0,
            "exception": "ASSERT is executed with false result.",
            "stack": []
        });
        let result: RpcInvokeResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.state, VMState::FAULT);
        assert_eq!(
            result.exception.as_deref(),
            Some("ASSERT is executed with false result.")
        );
    }

    #[test]
    fn stack_item_accessors() {
        let bytes = RpcStack {
            item_type: "ByteString".to_string(),
            value: json!("TkVP"),
        };
        assert_eq!(bytes.as_string().as_deref(), Some("NEO"));
        assert_eq!(bytes.as_integer(), None);

        let array = RpcStack {
            item_type: "Array".to_string(),
            value: json!([{"type": "Boolean", "value": true}]),
        };
        let items = array.as_array().unwrap();
        assert_eq!(items[0].as_bool(), Some(true));
    }
}
