//! Cryptographic primitives used to sign and identify Neo transactions.
//!
//! The crate covers the secp256r1 (NIST P-256) key material a wallet needs:
//! hashing helpers, Base58Check, WIF import/export and ECDSA signatures over
//! SHA-256.

mod base58;
mod error;
mod hash;
mod key_pair;

pub use base58::{from_base58_check, to_base58_check};
pub use error::{CryptoError, CryptoResult};
pub use hash::Crypto;
pub use key_pair::{KeyPair, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE, SIGNATURE_SIZE};
