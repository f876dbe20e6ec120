// Copyright (C) 2015-2025 The Neo Project.
//
// signed_transaction.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::ContractClientResult;
use base64::{engine::general_purpose, Engine as _};
use neo_core::Transaction;
use neo_primitives::UInt256;
use serde_json::Value;

/// A transaction carrying one witness per signer, ready to broadcast.
///
/// Only produced by [`TransactionManager::sign`](super::TransactionManager::sign).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    tx: Transaction,
}

impl SignedTransaction {
    pub(crate) fn new(tx: Transaction) -> Self {
        Self { tx }
    }

    pub const fn transaction(&self) -> &Transaction {
        &self.tx
    }

    pub fn hash(&self) -> ContractClientResult<UInt256> {
        Ok(self.tx.hash()?)
    }

    /// Network encoding including witnesses.
    pub fn to_bytes(&self) -> ContractClientResult<Vec<u8>> {
        Ok(self.tx.to_bytes()?)
    }

    /// Base64 of [`to_bytes`](Self::to_bytes), as `sendrawtransaction` expects.
    pub fn to_base64(&self) -> ContractClientResult<String> {
        Ok(general_purpose::STANDARD.encode(self.to_bytes()?))
    }

    /// Node-style JSON, with the sender as an address of `address_version`.
    pub fn to_json(&self, address_version: u8) -> ContractClientResult<Value> {
        Ok(self.tx.to_json(address_version)?)
    }

    pub fn into_transaction(self) -> Transaction {
        self.tx
    }
}

impl AsRef<Transaction> for SignedTransaction {
    fn as_ref(&self) -> &Transaction {
        &self.tx
    }
}
