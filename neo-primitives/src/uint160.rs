//! Implementation of `UInt160`, the 160-bit script hash.

use crate::constants::{ADDRESS_PAYLOAD_SIZE, ADDRESS_SIZE};
use crate::error::{PrimitiveError, PrimitiveResult};
use ripemd::Ripemd160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = ADDRESS_SIZE;

/// A 160-bit hash identifying a contract or an account.
///
/// Bytes are kept in storage (little-endian) order, which is the order the
/// VM pushes and the order a `RIPEMD160(SHA256(script))` digest comes out in.
/// The textual form is the byte-reversed hex string prefixed with `0x`.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    /// Alias matching `UInt160.Length`.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT160_SIZE])
    }

    /// Checks if every byte is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt160` from storage-order bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if the input is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT160_SIZE] =
            value
                .try_into()
                .map_err(|_| PrimitiveError::InvalidLength {
                    expected: UINT160_SIZE,
                    actual: value.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Gets the storage-order bytes.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    /// Borrows the storage-order bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; UINT160_SIZE] {
        &self.0
    }

    /// Computes the script hash of `script`: `RIPEMD160(SHA256(script))`.
    #[must_use]
    pub fn from_script(script: &[u8]) -> Self {
        let sha = Sha256::digest(script);
        let digest = Ripemd160::digest(sha);
        let mut bytes = [0u8; UINT160_SIZE];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Parses a `UInt160` from its big-endian hex form, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not 40 hex characters.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let trimmed = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if trimmed.len() != UINT160_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "UInt160 requires {} hex characters, got {}",
                UINT160_SIZE * 2,
                trimmed.len()
            )));
        }

        let mut bytes = hex::decode(trimmed)
            .map_err(|e| PrimitiveError::invalid_format(format!("Invalid UInt160 hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the `UInt160` to its `0x`-prefixed big-endian hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }

    /// Encodes this script hash as a Base58Check address.
    #[must_use]
    pub fn to_address(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(ADDRESS_PAYLOAD_SIZE);
        data.push(version);
        data.extend_from_slice(&self.0);
        let checksum = address_checksum(&data);
        data.extend_from_slice(&checksum);
        bs58::encode(data).into_string()
    }

    /// Decodes a Base58Check address produced with `version`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the address is not valid Base58,
    /// has the wrong length, version byte or checksum.
    pub fn from_address(address: &str, version: u8) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|_| PrimitiveError::invalid_format("Invalid Base58 address"))?;

        if decoded.len() != ADDRESS_PAYLOAD_SIZE {
            return Err(PrimitiveError::invalid_format("Invalid address length"));
        }
        if decoded[0] != version {
            return Err(PrimitiveError::invalid_format(format!(
                "Invalid address version {:#04x}",
                decoded[0]
            )));
        }

        let (data, checksum) = decoded.split_at(1 + UINT160_SIZE);
        if checksum != address_checksum(data) {
            return Err(PrimitiveError::invalid_format("Invalid address checksum"));
        }

        Self::from_bytes(&data[1..])
    }
}

fn address_checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    [second[0], second[1], second[2], second[3]]
}

impl FromStr for UInt160 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for UInt160 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
