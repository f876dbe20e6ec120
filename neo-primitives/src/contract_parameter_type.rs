//! `ContractParameterType`: the ABI type names used in contract manifests.

use crate::error::PrimitiveError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type of a contract method parameter or return value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractParameterType {
    /// Any type.
    #[default]
    Any = 0x00,
    /// Boolean.
    Boolean = 0x10,
    /// Arbitrary precision integer.
    Integer = 0x11,
    /// Byte array.
    ByteArray = 0x12,
    /// UTF-8 string.
    String = 0x13,
    /// 160-bit hash.
    Hash160 = 0x14,
    /// 256-bit hash.
    Hash256 = 0x15,
    /// Compressed public key.
    PublicKey = 0x16,
    /// 64-byte signature.
    Signature = 0x17,
    /// Array.
    Array = 0x20,
    /// Map.
    Map = 0x22,
    /// Interop interface handle.
    InteropInterface = 0x30,
    /// Return type of methods without a value.
    Void = 0xff,
}

impl ContractParameterType {
    const ALL: [Self; 13] = [
        Self::Any,
        Self::Boolean,
        Self::Integer,
        Self::ByteArray,
        Self::String,
        Self::Hash160,
        Self::Hash256,
        Self::PublicKey,
        Self::Signature,
        Self::Array,
        Self::Map,
        Self::InteropInterface,
        Self::Void,
    ];

    /// Returns the manifest name of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::ByteArray => "ByteArray",
            Self::String => "String",
            Self::Hash160 => "Hash160",
            Self::Hash256 => "Hash256",
            Self::PublicKey => "PublicKey",
            Self::Signature => "Signature",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::InteropInterface => "InteropInterface",
            Self::Void => "Void",
        }
    }

    /// Converts from the wire byte.
    #[must_use]
    pub fn try_from_u8(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| *t as u8 == value)
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractParameterType {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                PrimitiveError::invalid_format(format!("unknown contract parameter type: {s}"))
            })
    }
}

impl Serialize for ContractParameterType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContractParameterType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
