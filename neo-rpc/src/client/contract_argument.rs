// Copyright (C) 2015-2025 The Neo Project.
//
// contract_argument.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{ContractClientError, ContractClientResult};
use base64::{engine::general_purpose, Engine as _};
use neo_primitives::{ContractParameterType, UInt160, UInt256};
use neo_vm::ScriptBuilder;
use num_bigint::BigInt;
use serde_json::Value;

/// An argument of a contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractArgument {
    /// Integer of up to 256 bits.
    Integer(BigInt),
    Bytes(Vec<u8>),
    Boolean(bool),
    /// Pushed as its 20 storage-order bytes.
    Hash160(UInt160),
    Array(Vec<ContractArgument>),
}

impl ContractArgument {
    /// Emits the push sequence for this argument.
    ///
    /// Arrays push their items last to first and then pack them, so the
    /// first item ends up at index 0.
    ///
    /// # Errors
    ///
    /// `UnsupportedArgumentType` for integers wider than 256 bits.
    pub fn emit(&self, builder: &mut ScriptBuilder) -> ContractClientResult<()> {
        match self {
            Self::Integer(value) => {
                builder.emit_push_bigint(value).map_err(|_| {
                    ContractClientError::unsupported_argument(format!(
                        "Integer wider than 256 bits ({} bits)",
                        value.bits()
                    ))
                })?;
            }
            Self::Bytes(data) => {
                builder.emit_push(data);
            }
            Self::Boolean(value) => {
                builder.emit_push_bool(*value);
            }
            Self::Hash160(hash) => {
                builder.emit_push(hash.as_bytes());
            }
            Self::Array(items) => {
                for item in items.iter().rev() {
                    item.emit(builder)?;
                }
                builder.emit_pack_items(items.len());
            }
        }
        Ok(())
    }

    /// Converts a list of untyped JSON arguments.
    pub fn from_json_args(values: &[Value]) -> ContractClientResult<Vec<Self>> {
        values.iter().map(Self::try_from).collect()
    }

    /// Converts a `{"type": ..., "value": ...}` contract parameter object.
    fn from_parameter(object: &serde_json::Map<String, Value>) -> ContractClientResult<Self> {
        let type_name = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ContractClientError::unsupported_argument("object without type"))?;
        let param_type: ContractParameterType = type_name
            .parse()
            .map_err(|_| ContractClientError::unsupported_argument(type_name))?;
        let value = object.get("value").unwrap_or(&Value::Null);
        let invalid =
            || ContractClientError::unsupported_argument(format!("{param_type} value {value}"));

        match param_type {
            ContractParameterType::Integer => match value {
                Value::String(text) => text.parse().map(Self::Integer).map_err(|_| invalid()),
                Value::Number(_) => Self::try_from(value),
                _ => Err(invalid()),
            },
            ContractParameterType::Boolean => match value {
                Value::Bool(flag) => Ok(Self::Boolean(*flag)),
                Value::String(text) if text.eq_ignore_ascii_case("true") => Ok(Self::Boolean(true)),
                Value::String(text) if text.eq_ignore_ascii_case("false") => {
                    Ok(Self::Boolean(false))
                }
                _ => Err(invalid()),
            },
            ContractParameterType::ByteArray | ContractParameterType::Signature => {
                let encoded = value.as_str().ok_or_else(invalid)?;
                general_purpose::STANDARD
                    .decode(encoded)
                    .map(Self::Bytes)
                    .map_err(|_| invalid())
            }
            ContractParameterType::String => value
                .as_str()
                .map(|text| Self::Bytes(text.as_bytes().to_vec()))
                .ok_or_else(invalid),
            ContractParameterType::Hash160 => value
                .as_str()
                .and_then(|text| UInt160::parse(text).ok())
                .map(Self::Hash160)
                .ok_or_else(invalid),
            ContractParameterType::Hash256 => value
                .as_str()
                .and_then(|text| UInt256::parse(text).ok())
                .map(|hash| Self::Bytes(hash.to_array().to_vec()))
                .ok_or_else(invalid),
            ContractParameterType::PublicKey => value
                .as_str()
                .and_then(|text| hex::decode(text).ok())
                .filter(|bytes| bytes.len() == 33)
                .map(Self::Bytes)
                .ok_or_else(invalid),
            ContractParameterType::Array => value
                .as_array()
                .ok_or_else(invalid)?
                .iter()
                .map(Self::try_from)
                .collect::<ContractClientResult<Vec<_>>>()
                .map(Self::Array),
            other => Err(ContractClientError::unsupported_argument(other.as_str())),
        }
    }
}

impl TryFrom<&Value> for ContractArgument {
    type Error = ContractClientError;

    /// Plain JSON maps to arguments as follows: booleans and integers map
    /// directly, strings become their UTF-8 bytes and arrays nest.
    /// Objects are read as typed contract parameters. `null` and
    /// non-integral numbers are rejected.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(flag) => Ok(Self::Boolean(*flag)),
            Value::Number(number) => {
                if let Some(v) = number.as_i64() {
                    Ok(Self::Integer(BigInt::from(v)))
                } else if let Some(v) = number.as_u64() {
                    Ok(Self::Integer(BigInt::from(v)))
                } else {
                    Err(ContractClientError::unsupported_argument(format!(
                        "non-integer number {number}"
                    )))
                }
            }
            Value::String(text) => Ok(Self::Bytes(text.as_bytes().to_vec())),
            Value::Array(items) => items
                .iter()
                .map(Self::try_from)
                .collect::<ContractClientResult<Vec<_>>>()
                .map(Self::Array),
            Value::Object(object) => Self::from_parameter(object),
            Value::Null => Err(ContractClientError::unsupported_argument("null")),
        }
    }
}

impl From<i64> for ContractArgument {
    fn from(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for ContractArgument {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ContractArgument {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<u8>> for ContractArgument {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for ContractArgument {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<&str> for ContractArgument {
    fn from(value: &str) -> Self {
        Self::Bytes(value.as_bytes().to_vec())
    }
}

impl From<UInt160> for ContractArgument {
    fn from(value: UInt160) -> Self {
        Self::Hash160(value)
    }
}

impl From<Vec<ContractArgument>> for ContractArgument {
    fn from(value: Vec<ContractArgument>) -> Self {
        Self::Array(value)
    }
}
