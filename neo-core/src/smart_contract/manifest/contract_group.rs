//! Represents a set of mutually trusted contracts identified by a public key
//! and accompanied by a signature for the contract hash.

use crate::error::{CoreError, CoreResult};
use crate::serde_helpers::{base64_bytes, hex_bytes};
use neo_crypto::{KeyPair, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
use neo_primitives::UInt160;
use serde::{Deserialize, Serialize};

/// Represents a set of mutually trusted contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractGroup {
    /// The compressed public key of the group.
    #[serde(rename = "pubkey", with = "hex_bytes")]
    pub pub_key: Vec<u8>,

    /// The signature of the contract hash which can be verified by the public key.
    #[serde(with = "base64_bytes")]
    pub signature: Vec<u8>,
}

impl ContractGroup {
    /// Validates the key and signature lengths.
    pub fn validate(&self) -> CoreResult<()> {
        if self.pub_key.len() != PUBLIC_KEY_SIZE {
            return Err(CoreError::invalid_manifest("Invalid public key in group"));
        }
        if self.signature.len() != SIGNATURE_SIZE {
            return Err(CoreError::invalid_manifest(
                "Invalid signature length in group",
            ));
        }
        Ok(())
    }

    /// Verifies the group signature for a given contract hash.
    pub fn is_valid(&self, contract_hash: &UInt160) -> bool {
        KeyPair::verify(contract_hash.as_bytes(), &self.signature, &self.pub_key).unwrap_or(false)
    }
}
