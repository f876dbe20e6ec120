//! Implementation of `UInt256`, the 256-bit hash used for transaction ids.

use crate::constants::HASH_SIZE;
use crate::error::{PrimitiveError, PrimitiveResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of `UInt256` values in bytes.
pub const UINT256_SIZE: usize = HASH_SIZE;

/// A 256-bit hash, stored little-endian and displayed byte-reversed.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UInt256([u8; UINT256_SIZE]);

impl UInt256 {
    /// Alias matching `UInt256.Length`.
    pub const LENGTH: usize = UINT256_SIZE;

    /// Returns a zero `UInt256`.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT256_SIZE])
    }

    /// Checks if every byte is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a `UInt256` from storage-order bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if the input is not exactly 32 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT256_SIZE] =
            value
                .try_into()
                .map_err(|_| PrimitiveError::InvalidLength {
                    expected: UINT256_SIZE,
                    actual: value.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Gets the storage-order bytes.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT256_SIZE] {
        self.0
    }

    /// Borrows the storage-order bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; UINT256_SIZE] {
        &self.0
    }

    /// Parses a `UInt256` from its big-endian hex form, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not 64 hex characters.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let trimmed = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if trimmed.len() != UINT256_SIZE * 2 {
            return Err(PrimitiveError::invalid_format(format!(
                "UInt256 requires {} hex characters, got {}",
                UINT256_SIZE * 2,
                trimmed.len()
            )));
        }
        let mut bytes = hex::decode(trimmed)
            .map_err(|e| PrimitiveError::invalid_format(format!("Invalid UInt256 hex: {e}")))?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    /// Converts the `UInt256` to its `0x`-prefixed big-endian hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }
}

impl FromStr for UInt256 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({})", self.to_hex_string())
    }
}

impl From<[u8; UINT256_SIZE]> for UInt256 {
    fn from(data: [u8; UINT256_SIZE]) -> Self {
        Self(data)
    }
}

impl Serialize for UInt256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail() {
        assert!(UInt256::from_bytes(&[0u8; UInt256::LENGTH + 1]).is_err());
    }

    #[test]
    fn test_parse_and_format() {
        let value =
            UInt256::parse("0xff00000000000000000000000000000000000000000000000000000000000001")
                .unwrap();
        assert_eq!(
            "0xff00000000000000000000000000000000000000000000000000000000000001",
            value.to_hex_string()
        );
        assert_eq!(value.to_array()[0], 0x01);
    }

    #[test]
    fn test_zero() {
        assert!(UInt256::zero().is_zero());
        assert_eq!(UInt256::from_bytes(&[0u8; 32]).unwrap(), UInt256::zero());
    }
}
