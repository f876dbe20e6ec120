//! secp256r1 key pairs with WIF import/export.

use crate::base58::{from_base58_check, to_base58_check};
use crate::error::{CryptoError, CryptoResult};
use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use std::fmt;
use zeroize::Zeroizing;

/// Size of a raw private key.
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of a compressed SEC1 public key.
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Size of an `r || s` ECDSA signature.
pub const SIGNATURE_SIZE: usize = 64;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_FLAG: u8 = 0x01;
const WIF_PAYLOAD_SIZE: usize = 1 + PRIVATE_KEY_SIZE + 1;

/// A secp256r1 private key together with its compressed public key.
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
    public_key: [u8; PUBLIC_KEY_SIZE],
}

impl KeyPair {
    /// Creates a key pair from a 32-byte big-endian private key.
    pub fn from_private_key(private_key: &[u8]) -> CryptoResult<Self> {
        if private_key.len() != PRIVATE_KEY_SIZE {
            return Err(CryptoError::InvalidPrivateKey);
        }
        let signing_key =
            SigningKey::from_slice(private_key).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Generates a fresh random key pair.
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::random(&mut rand::rngs::OsRng))
    }

    /// Imports a key from Wallet Import Format.
    ///
    /// The payload must be `0x80 || key || 0x01`.
    pub fn from_wif(wif: &str) -> CryptoResult<Self> {
        let payload = Zeroizing::new(
            from_base58_check(wif).map_err(|err| CryptoError::invalid_wif(err.to_string()))?,
        );

        if payload.len() != WIF_PAYLOAD_SIZE {
            return Err(CryptoError::invalid_wif(format!(
                "invalid length {}",
                payload.len()
            )));
        }
        if payload[0] != WIF_VERSION {
            return Err(CryptoError::invalid_wif(format!(
                "invalid version {:#04x}",
                payload[0]
            )));
        }
        if payload[WIF_PAYLOAD_SIZE - 1] != WIF_COMPRESSED_FLAG {
            return Err(CryptoError::invalid_wif(format!(
                "invalid compressed flag {:#04x}",
                payload[WIF_PAYLOAD_SIZE - 1]
            )));
        }

        Self::from_private_key(&payload[1..=PRIVATE_KEY_SIZE])
    }

    /// Exports the private key in Wallet Import Format.
    pub fn to_wif(&self) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(WIF_PAYLOAD_SIZE));
        payload.push(WIF_VERSION);
        let key = self.private_key();
        payload.extend_from_slice(key.as_slice());
        payload.push(WIF_COMPRESSED_FLAG);
        to_base58_check(&payload)
    }

    /// Returns the raw private key.
    pub fn private_key(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        Zeroizing::new(self.signing_key.to_bytes().into())
    }

    /// Returns the compressed public key.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.public_key
    }

    /// Signs `message` with ECDSA over SHA-256 (deterministic, RFC 6979).
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_SIZE] {
        let signature: Signature = self.signing_key.sign(message);
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes.copy_from_slice(&signature.to_bytes());
        bytes
    }

    /// Verifies an `r || s` signature over `message` against a compressed or
    /// uncompressed public key.
    pub fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> CryptoResult<bool> {
        let verifying_key =
            VerifyingKey::from_sec1_bytes(public_key).map_err(|_| CryptoError::InvalidPublicKey)?;
        let signature = Signature::from_slice(signature).map_err(|_| CryptoError::InvalidSignature)?;
        Ok(verifying_key.verify(message, &signature).is_ok())
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let encoded = signing_key.verifying_key().to_encoded_point(true);
        let mut public_key = [0u8; PUBLIC_KEY_SIZE];
        public_key.copy_from_slice(encoded.as_bytes());
        Self {
            signing_key,
            public_key,
        }
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ONE: [u8; 32] = {
        let mut key = [0u8; 32];
        key[31] = 1;
        key
    };

    #[test]
    fn test_public_key_of_one_is_generator() {
        let key = KeyPair::from_private_key(&ONE).unwrap();
        assert_eq!(
            hex::encode(key.public_key()),
            "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
        );
    }

    #[test]
    fn test_invalid_private_keys() {
        assert_eq!(
            KeyPair::from_private_key(&[0u8; 32]).unwrap_err(),
            CryptoError::InvalidPrivateKey
        );
        assert!(KeyPair::from_private_key(&[1u8; 31]).is_err());
    }

    #[test]
    fn test_wif() {
        let key = KeyPair::from_private_key(&ONE).unwrap();
        let wif = key.to_wif();
        assert_eq!(wif, "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn");
        assert_eq!(KeyPair::from_wif(&wif).unwrap(), key);
    }

    #[test]
    fn test_wif_rejects_uncompressed_payload() {
        let mut payload = vec![WIF_VERSION];
        payload.extend_from_slice(&ONE);
        let wif = to_base58_check(&payload);
        assert!(matches!(
            KeyPair::from_wif(&wif),
            Err(CryptoError::InvalidWif { .. })
        ));
    }

    #[test]
    fn test_sign_is_deterministic() {
        let key = KeyPair::from_private_key(&ONE).unwrap();
        assert_eq!(key.sign(b"neo").to_vec(), key.sign(b"neo").to_vec());
    }

    #[test]
    fn test_verify_rejects_other_message() {
        let key = KeyPair::generate();
        let signature = key.sign(b"message");
        assert!(!KeyPair::verify(b"other", &signature, &key.public_key()).unwrap());
        assert_eq!(
            KeyPair::verify(b"message", &signature, &[0u8; 33]).unwrap_err(),
            CryptoError::InvalidPublicKey
        );
    }

    #[test]
    fn test_debug_hides_private_key() {
        let key = KeyPair::from_private_key(&ONE).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("036b17d1"));
        assert!(!debug.contains(&hex::encode(ONE)));
    }

    proptest! {
        #[test]
        fn sign_then_verify(message in any::<Vec<u8>>()) {
            let key = KeyPair::generate();
            let signature = key.sign(&message);
            prop_assert!(KeyPair::verify(&message, &signature, &key.public_key()).unwrap());
        }
    }
}
