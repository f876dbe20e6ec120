// Copyright (C) 2015-2025 The Neo Project.
//
// transaction.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{Signer, Witness};
use crate::error::CoreResult;
use base64::{engine::general_purpose, Engine as _};
use neo_crypto::Crypto;
use neo_io::serializable::helper::{
    get_var_size, get_var_size_bytes, get_var_size_serializable_slice, serialize_array,
};
use neo_io::{BinaryWriter, IoResult, Serializable, SerializableExt};
use neo_primitives::{UInt160, UInt256};
use serde_json::{json, Value};

/// Maximum size of a transaction in bytes.
pub const MAX_TRANSACTION_SIZE: usize = 102_400;

/// Size of the fixed header: version, nonce, fees and expiry.
pub const HEADER_SIZE: usize = 1 + 4 + 8 + 8 + 4;

/// Represents a transaction.
///
/// Attributes are not supported; the attribute list is always written empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    /// Version of the transaction format.
    version: u8,

    /// Random number to avoid hash collision.
    nonce: u32,

    /// System fee in datoshi (1 datoshi = 1e-8 GAS).
    system_fee: i64,

    /// Network fee in datoshi (1 datoshi = 1e-8 GAS).
    network_fee: i64,

    /// Block height when transaction expires.
    valid_until_block: u32,

    /// Signers of the transaction.
    signers: Vec<Signer>,

    /// Script to be executed.
    script: Vec<u8>,

    /// Witnesses for verification.
    witnesses: Vec<Witness>,
}

impl Transaction {
    /// Creates an unsigned version-0 transaction with zero fees.
    pub fn new(script: Vec<u8>, signers: Vec<Signer>) -> Self {
        Self {
            script,
            signers,
            ..Self::default()
        }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn nonce(&self) -> u32 {
        self.nonce
    }

    pub fn set_nonce(&mut self, nonce: u32) {
        self.nonce = nonce;
    }

    pub fn system_fee(&self) -> i64 {
        self.system_fee
    }

    pub fn set_system_fee(&mut self, system_fee: i64) {
        self.system_fee = system_fee;
    }

    pub fn network_fee(&self) -> i64 {
        self.network_fee
    }

    pub fn set_network_fee(&mut self, network_fee: i64) {
        self.network_fee = network_fee;
    }

    pub fn valid_until_block(&self) -> u32 {
        self.valid_until_block
    }

    pub fn set_valid_until_block(&mut self, valid_until_block: u32) {
        self.valid_until_block = valid_until_block;
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn witnesses(&self) -> &[Witness] {
        &self.witnesses
    }

    pub fn set_witnesses(&mut self, witnesses: Vec<Witness>) {
        self.witnesses = witnesses;
    }

    /// The sender pays the fees; it is the first signer.
    pub fn sender(&self) -> Option<UInt160> {
        self.signers.first().map(|signer| signer.account)
    }

    /// Writes every field except the witnesses.
    pub fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version);
        writer.write_u32(self.nonce);
        writer.write_i64(self.system_fee);
        writer.write_i64(self.network_fee);
        writer.write_u32(self.valid_until_block);
        serialize_array(&self.signers, writer)?;
        // attributes
        writer.write_var_int(0)?;
        writer.write_var_bytes(&self.script)?;
        Ok(())
    }

    /// Returns the unsigned serialization, which is what gets hashed and signed.
    pub fn unsigned_bytes(&self) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// The transaction id: `SHA256` of the unsigned serialization.
    pub fn hash(&self) -> CoreResult<UInt256> {
        Ok(UInt256::from(Crypto::sha256(&self.unsigned_bytes()?)))
    }

    /// Data signed by each witness: the network magic (little-endian) followed by the hash.
    pub fn get_sign_data(&self, network: u32) -> CoreResult<Vec<u8>> {
        let hash = self.hash()?;
        let mut data = Vec::with_capacity(4 + hash.as_bytes().len());
        data.extend_from_slice(&network.to_le_bytes());
        data.extend_from_slice(hash.as_bytes());
        Ok(data)
    }

    /// Full serialization including witnesses.
    pub fn to_bytes(&self) -> CoreResult<Vec<u8>> {
        Ok(self.to_array()?)
    }

    /// Converts the transaction to the JSON shape returned by Neo nodes.
    ///
    /// `sender` is rendered as an address of `address_version`.
    pub fn to_json(&self, address_version: u8) -> CoreResult<Value> {
        Ok(json!({
            "hash": self.hash()?.to_string(),
            "size": self.size(),
            "version": self.version,
            "nonce": self.nonce,
            "sender": self.sender().map(|s| s.to_address(address_version)),
            "sysfee": self.system_fee.to_string(),
            "netfee": self.network_fee.to_string(),
            "validuntilblock": self.valid_until_block,
            "signers": serde_json::to_value(&self.signers)?,
            "attributes": [],
            "script": general_purpose::STANDARD.encode(&self.script),
            "witnesses": serde_json::to_value(&self.witnesses)?,
        }))
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        HEADER_SIZE
            + get_var_size_serializable_slice(&self.signers)
            + get_var_size(0)
            + get_var_size_bytes(&self.script)
            + get_var_size_serializable_slice(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_unsigned(writer)?;
        serialize_array(&self.witnesses, writer)
    }
}
