//! Represents the manifest of a smart contract which declares the features
//! and permissions it will use when deployed.

use super::{
    ContractAbi, ContractGroup, ContractPermission, ContractPermissionDescriptor,
    WildcardContainer,
};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum length of a serialized contract manifest in bytes.
pub const MAX_MANIFEST_LENGTH: usize = u16::MAX as usize;

/// Represents the manifest of a smart contract.
///
/// Field order is the canonical JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractManifest {
    /// The name of the contract.
    pub name: String,

    /// The groups that the contract belongs to.
    pub groups: Vec<ContractGroup>,

    /// Reserved; must be an empty object.
    pub features: Map<String, Value>,

    /// The standards supported by the contract.
    #[serde(rename = "supportedstandards")]
    pub supported_standards: Vec<String>,

    /// The ABI (Application Binary Interface) of the contract.
    pub abi: ContractAbi,

    /// The permissions required by the contract.
    pub permissions: Vec<ContractPermission>,

    /// The contracts and groups that this contract trusts.
    pub trusts: WildcardContainer<ContractPermissionDescriptor>,

    /// Additional metadata.
    #[serde(default)]
    pub extra: Value,
}

impl ContractManifest {
    /// Maximum length of the canonical JSON text in bytes.
    pub const MAX_LENGTH: usize = MAX_MANIFEST_LENGTH;

    /// Creates an empty manifest with a wildcard permission.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
            features: Map::new(),
            supported_standards: Vec::new(),
            abi: ContractAbi::default(),
            permissions: vec![ContractPermission::default_wildcard()],
            trusts: WildcardContainer::default(),
            extra: Value::Null,
        }
    }

    /// Parses and validates a manifest from its JSON text.
    pub fn parse(json: &str) -> CoreResult<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serializes the manifest to its canonical compact JSON text.
    pub fn to_json_string(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates the manifest.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::invalid_manifest("Contract name cannot be empty"));
        }
        if !self.features.is_empty() {
            return Err(CoreError::invalid_manifest("features must be empty"));
        }

        for (i, group) in self.groups.iter().enumerate() {
            group.validate()?;
            if self.groups[..i].iter().any(|g| g.pub_key == group.pub_key) {
                return Err(CoreError::invalid_manifest("duplicate group"));
            }
        }

        for (i, standard) in self.supported_standards.iter().enumerate() {
            if standard.is_empty() || self.supported_standards[..i].contains(standard) {
                return Err(CoreError::invalid_manifest(format!(
                    "invalid supported standard '{standard}'"
                )));
            }
        }

        self.abi.validate()?;

        for (i, permission) in self.permissions.iter().enumerate() {
            permission.validate()?;
            if self.permissions[..i]
                .iter()
                .any(|p| p.contract == permission.contract)
            {
                return Err(CoreError::invalid_manifest("duplicate permission contract"));
            }
        }

        if !self.trusts.is_distinct() {
            return Err(CoreError::invalid_manifest("duplicate trust"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_primitives::ContractParameterType;

    const MINIMAL: &str = r#"{"name":"test","groups":[],"features":{},"supportedstandards":[],"abi":{"methods":[],"events":[]},"permissions":[{"contract":"*","methods":"*"}],"trusts":[],"extra":null}"#;

    #[test]
    fn new_matches_canonical_text() {
        let manifest = ContractManifest::new("test");
        assert_eq!(manifest.to_json_string().unwrap(), MINIMAL);
    }

    #[test]
    fn parse_then_serialize_is_stable() {
        let manifest = ContractManifest::parse(MINIMAL).unwrap();
        assert_eq!(manifest.name, "test");
        assert_eq!(manifest.to_json_string().unwrap(), MINIMAL);
    }

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "name": "Token",
            "groups": [],
            "features": {},
            "supportedstandards": ["NEP-17"],
            "abi": {
                "methods": [
                    {"name": "symbol", "parameters": [], "returntype": "String", "offset": 0, "safe": true},
                    {"name": "transfer", "parameters": [
                        {"name": "from", "type": "Hash160"},
                        {"name": "to", "type": "Hash160"},
                        {"name": "amount", "type": "Integer"},
                        {"name": "data", "type": "Any"}
                    ], "returntype": "Boolean", "offset": 12, "safe": false}
                ],
                "events": [
                    {"name": "Transfer", "parameters": [
                        {"name": "from", "type": "Hash160"},
                        {"name": "to", "type": "Hash160"},
                        {"name": "amount", "type": "Integer"}
                    ]}
                ]
            },
            "permissions": [{"contract": "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5", "methods": ["transfer"]}],
            "trusts": "*",
            "extra": {"Author": "Neo"}
        }"#;
        let manifest = ContractManifest::parse(json).unwrap();
        let transfer = manifest.abi.get_method("transfer", 4).unwrap();
        assert_eq!(transfer.return_type, ContractParameterType::Boolean);
        assert!(manifest.abi.get_method("transfer", 3).is_none());
        assert!(manifest.trusts.is_wildcard());
        assert_eq!(manifest.extra["Author"], "Neo");
    }

    #[test]
    fn rejects_invalid_manifests() {
        assert!(ContractManifest::parse("not json").is_err());
        assert!(ContractManifest::parse(&MINIMAL.replace("\"test\"", "\"\"")).is_err());
        assert!(matches!(
            ContractManifest::parse(&MINIMAL.replace("\"features\":{}", "\"features\":{\"a\":1}")),
            Err(CoreError::InvalidManifest { .. })
        ));
        let duplicate = MINIMAL.replace(
            r#"[{"contract":"*","methods":"*"}]"#,
            r#"[{"contract":"*","methods":"*"},{"contract":"*","methods":[]}]"#,
        );
        assert!(ContractManifest::parse(&duplicate).is_err());
    }

    #[test]
    fn missing_extra_defaults_to_null() {
        let json = MINIMAL.replace(",\"extra\":null", "");
        let manifest = ContractManifest::parse(&json).unwrap();
        assert_eq!(manifest.extra, Value::Null);
    }
}
