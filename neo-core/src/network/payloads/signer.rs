// Copyright (C) 2015-2025 The Neo Project.
//
// signer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::serde_helpers::hex_bytes_vec;
use neo_io::serializable::helper::get_var_size;
use neo_io::{BinaryWriter, IoError, IoResult, Serializable};
use neo_primitives::{UInt160, WitnessScope, UINT160_SIZE};
use serde::{Deserialize, Serialize};

/// Maximum number of allowed contracts or groups on a signer.
pub const MAX_SUBITEMS: usize = 16;

const PUBLIC_KEY_SIZE: usize = 33;

/// An account that must witness a transaction, and where that witness applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    /// The account of the signer.
    pub account: UInt160,

    /// The scopes of the witness.
    pub scopes: WitnessScope,

    /// Contracts allowed when `scopes` contains `CUSTOM_CONTRACTS`.
    #[serde(
        rename = "allowedcontracts",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub allowed_contracts: Vec<UInt160>,

    /// Compressed group keys allowed when `scopes` contains `CUSTOM_GROUPS`.
    #[serde(
        rename = "allowedgroups",
        default,
        with = "hex_bytes_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub allowed_groups: Vec<Vec<u8>>,
}

impl Signer {
    /// Creates a signer without custom contracts or groups.
    pub fn new(account: UInt160, scopes: WitnessScope) -> Self {
        Self {
            account,
            scopes,
            allowed_contracts: Vec::new(),
            allowed_groups: Vec::new(),
        }
    }

    fn check(&self) -> IoResult<()> {
        if !self.scopes.is_valid() {
            return Err(IoError::invalid_data(
                "signer scopes",
                format!("{:#04x}", self.scopes.to_byte()),
            ));
        }
        if self.scopes.has_flag(WitnessScope::WITNESS_RULES) {
            return Err(IoError::invalid_data(
                "signer scopes",
                "witness rules are not supported",
            ));
        }
        if self.allowed_contracts.len() > MAX_SUBITEMS || self.allowed_groups.len() > MAX_SUBITEMS
        {
            return Err(IoError::invalid_data(
                "signer",
                format!("more than {MAX_SUBITEMS} allowed contracts or groups"),
            ));
        }
        if let Some(group) = self
            .allowed_groups
            .iter()
            .find(|g| g.len() != PUBLIC_KEY_SIZE)
        {
            return Err(IoError::invalid_data(
                "signer group",
                format!("expected {PUBLIC_KEY_SIZE} bytes, got {}", group.len()),
            ));
        }
        Ok(())
    }
}

impl Serializable for Signer {
    fn size(&self) -> usize {
        let mut size = UINT160_SIZE + 1;
        if self.scopes.has_flag(WitnessScope::CUSTOM_CONTRACTS) {
            size += get_var_size(self.allowed_contracts.len() as u64)
                + self.allowed_contracts.len() * UINT160_SIZE;
        }
        if self.scopes.has_flag(WitnessScope::CUSTOM_GROUPS) {
            size += get_var_size(self.allowed_groups.len() as u64)
                + self.allowed_groups.len() * PUBLIC_KEY_SIZE;
        }
        size
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.check()?;
        writer.write_bytes(self.account.as_bytes());
        writer.write_u8(self.scopes.to_byte());
        if self.scopes.has_flag(WitnessScope::CUSTOM_CONTRACTS) {
            writer.write_var_int(self.allowed_contracts.len() as u64)?;
            for contract in &self.allowed_contracts {
                writer.write_bytes(contract.as_bytes());
            }
        }
        if self.scopes.has_flag(WitnessScope::CUSTOM_GROUPS) {
            writer.write_var_int(self.allowed_groups.len() as u64)?;
            for group in &self.allowed_groups {
                writer.write_bytes(group);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::SerializableExt;

    fn account() -> UInt160 {
        UInt160::from([0x01; 20])
    }

    #[test]
    fn called_by_entry_is_account_and_scope() {
        let signer = Signer::new(account(), WitnessScope::CALLED_BY_ENTRY);
        let bytes = signer.to_array().unwrap();
        assert_eq!(bytes.len(), 21);
        assert_eq!(signer.size(), 21);
        assert_eq!(&bytes[..20], &[0x01; 20]);
        assert_eq!(bytes[20], 0x01);
    }

    #[test]
    fn custom_contracts_are_appended() {
        let mut signer = Signer::new(account(), WitnessScope::CUSTOM_CONTRACTS);
        signer.allowed_contracts.push(UInt160::from([0x02; 20]));
        let bytes = signer.to_array().unwrap();
        assert_eq!(bytes.len(), signer.size());
        assert_eq!(bytes[20], 0x10);
        assert_eq!(bytes[21], 1);
        assert_eq!(&bytes[22..], &[0x02; 20]);
    }

    #[test]
    fn witness_rules_are_rejected() {
        let signer = Signer::new(account(), WitnessScope::WITNESS_RULES);
        assert!(signer.to_array().is_err());
    }

    #[test]
    fn json_shape() {
        let signer = Signer::new(account(), WitnessScope::CALLED_BY_ENTRY);
        let json = serde_json::to_value(&signer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "account": "0x0101010101010101010101010101010101010101",
                "scopes": "CalledByEntry"
            })
        );
        let back: Signer = serde_json::from_value(json).unwrap();
        assert_eq!(back, signer);
    }
}
