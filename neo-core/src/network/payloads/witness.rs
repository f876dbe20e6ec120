// Copyright (C) 2015-2025 The Neo Project.
//
// witness.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::serde_helpers::base64_bytes;
use neo_io::serializable::helper::get_var_size_bytes;
use neo_io::{BinaryWriter, IoError, IoResult, Serializable};
use neo_primitives::UInt160;
use serde::{Deserialize, Serialize};

// This is designed to allow a MultiSig 21/11 (committee)
// Invocation = 11 * (64 + 2) = 726
pub const MAX_INVOCATION_SCRIPT: usize = 1024;

// Verification = m + (PUSH_PubKey * 21) + length + null + syscall = 1 + ((2 + 33) * 21) + 2 + 1 + 5 = 744
pub const MAX_VERIFICATION_SCRIPT: usize = 1024;

/// Represents a witness of a transaction signer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    /// The invocation script of the witness. Used to pass arguments for verification_script.
    #[serde(rename = "invocation", with = "base64_bytes")]
    pub invocation_script: Vec<u8>,

    /// The verification script of the witness.
    #[serde(rename = "verification", with = "base64_bytes")]
    pub verification_script: Vec<u8>,
}

impl Witness {
    /// Creates a new witness with the given scripts.
    pub fn new(invocation_script: Vec<u8>, verification_script: Vec<u8>) -> Self {
        Self {
            invocation_script,
            verification_script,
        }
    }

    /// Creates an empty witness.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gets the hash of the verification script.
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.verification_script)
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        get_var_size_bytes(&self.invocation_script) + get_var_size_bytes(&self.verification_script)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        if self.invocation_script.len() > MAX_INVOCATION_SCRIPT {
            return Err(IoError::invalid_data(
                "invocation script",
                format!("{} bytes exceeds {MAX_INVOCATION_SCRIPT}", self.invocation_script.len()),
            ));
        }
        writer.write_var_bytes(&self.invocation_script)?;

        if self.verification_script.len() > MAX_VERIFICATION_SCRIPT {
            return Err(IoError::invalid_data(
                "verification script",
                format!(
                    "{} bytes exceeds {MAX_VERIFICATION_SCRIPT}",
                    self.verification_script.len()
                ),
            ));
        }
        writer.write_var_bytes(&self.verification_script)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::SerializableExt;

    #[test]
    fn serialize_is_two_var_byte_arrays() {
        let witness = Witness::new(vec![0xAA; 3], vec![0xBB; 2]);
        assert_eq!(
            witness.to_array().unwrap(),
            vec![3, 0xAA, 0xAA, 0xAA, 2, 0xBB, 0xBB]
        );
        assert_eq!(witness.size(), 7);
    }

    #[test]
    fn oversized_invocation_is_rejected() {
        let witness = Witness::new(vec![0; MAX_INVOCATION_SCRIPT + 1], Vec::new());
        assert!(witness.to_array().is_err());
    }

    #[test]
    fn json_uses_base64() {
        let witness = Witness::new(vec![1, 2, 3], Vec::new());
        let json = serde_json::to_value(&witness).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"invocation": "AQID", "verification": ""})
        );
    }

    #[test]
    fn script_hash_of_empty_verification() {
        assert_eq!(
            Witness::empty().script_hash().to_string(),
            "0xcb9f3b7c6fb1cf2c13a40637c189bdd066a272b4"
        );
    }
}
