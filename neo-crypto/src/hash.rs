//! Hash functions for Neo blockchain.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Cryptographic hash functions for Neo blockchain.
pub struct Crypto;

impl Crypto {
    /// Computes SHA-256 hash of the input data.
    ///
    /// # Example
    /// ```
    /// use neo_crypto::Crypto;
    /// let hash = Crypto::sha256(b"Hello, Neo!");
    /// assert_eq!(hash.len(), 32);
    /// ```
    pub fn sha256(data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }

    /// Computes `SHA256(SHA256(data))`, used for Base58Check checksums.
    pub fn hash256(data: &[u8]) -> [u8; 32] {
        Sha256::digest(Sha256::digest(data)).into()
    }

    /// Computes `RIPEMD160(SHA256(data))`, the script hash function.
    pub fn hash160(data: &[u8]) -> [u8; 20] {
        Ripemd160::digest(Sha256::digest(data)).into()
    }
}
