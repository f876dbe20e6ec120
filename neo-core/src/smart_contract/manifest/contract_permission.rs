//! Defines the permissions that a contract requires to call other contracts
//! and access their methods.

use super::WildcardContainer;
use crate::error::{CoreError, CoreResult};
use neo_primitives::UInt160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const GROUP_HEX_LENGTH: usize = 66;
const HASH_HEX_LENGTH: usize = 42;

/// Represents a permission that a contract requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPermission {
    /// The contract or group that this permission applies to.
    pub contract: ContractPermissionDescriptor,

    /// The methods that are allowed to be called.
    pub methods: WildcardContainer<String>,
}

impl ContractPermission {
    /// Creates a wildcard permission that allows calling any method on any contract.
    pub fn default_wildcard() -> Self {
        Self {
            contract: ContractPermissionDescriptor::Wildcard,
            methods: WildcardContainer::create_wildcard(),
        }
    }

    pub(crate) fn validate(&self) -> CoreResult<()> {
        if let ContractPermissionDescriptor::Group(key) = &self.contract {
            if key.len() != GROUP_HEX_LENGTH / 2 {
                return Err(CoreError::invalid_manifest("Invalid group key in permission"));
            }
        }
        if !self.methods.is_distinct() {
            return Err(CoreError::invalid_manifest(
                "duplicate method in permission",
            ));
        }
        if let Some(methods) = self.methods.values() {
            if methods.iter().any(String::is_empty) {
                return Err(CoreError::invalid_manifest(
                    "empty method name in permission",
                ));
            }
        }
        Ok(())
    }
}

/// Describes what contract or group a permission applies to.
///
/// Written as `"*"`, a `0x`-prefixed script hash, or a hex encoded group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractPermissionDescriptor {
    /// Applies to all contracts.
    Wildcard,

    /// Specific contract hash.
    Hash(UInt160),

    /// Compressed group public key.
    Group(Vec<u8>),
}

impl ContractPermissionDescriptor {
    fn to_json_string(&self) -> String {
        match self {
            Self::Wildcard => "*".to_string(),
            Self::Hash(hash) => hash.to_string(),
            Self::Group(key) => hex::encode(key),
        }
    }

    fn from_json_string(value: &str) -> CoreResult<Self> {
        match value.len() {
            1 if value == "*" => Ok(Self::Wildcard),
            HASH_HEX_LENGTH => UInt160::parse(value)
                .map(Self::Hash)
                .map_err(|e| CoreError::invalid_format(e.to_string())),
            GROUP_HEX_LENGTH => hex::decode(value)
                .map(Self::Group)
                .map_err(|e| CoreError::invalid_format(e.to_string())),
            _ => Err(CoreError::invalid_format(format!(
                "invalid permission descriptor: {value}"
            ))),
        }
    }
}

impl Serialize for ContractPermissionDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_json_string())
    }
}

impl<'de> Deserialize<'de> for ContractPermissionDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::from_json_string(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_forms() {
        let wildcard: ContractPermissionDescriptor = serde_json::from_str("\"*\"").unwrap();
        assert_eq!(wildcard, ContractPermissionDescriptor::Wildcard);

        let hash: ContractPermissionDescriptor =
            serde_json::from_str("\"0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5\"").unwrap();
        assert!(matches!(hash, ContractPermissionDescriptor::Hash(_)));
        assert_eq!(
            serde_json::to_string(&hash).unwrap(),
            "\"0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5\""
        );

        let group_hex = format!("\"{}\"", "03".repeat(33));
        let group: ContractPermissionDescriptor = serde_json::from_str(&group_hex).unwrap();
        assert_eq!(group, ContractPermissionDescriptor::Group(vec![0x03; 33]));

        assert!(serde_json::from_str::<ContractPermissionDescriptor>("\"abc\"").is_err());
    }

    #[test]
    fn wildcard_permission_json() {
        let json = serde_json::to_string(&ContractPermission::default_wildcard()).unwrap();
        assert_eq!(json, r#"{"contract":"*","methods":"*"}"#);
    }
}
