use crate::error::{CryptoError, CryptoResult};
use crate::hash::Crypto;

const CHECKSUM_SIZE: usize = 4;

/// Encodes `data` followed by the first four bytes of its `hash256` in Base58.
pub fn to_base58_check(data: &[u8]) -> String {
    let checksum = Crypto::hash256(data);
    let mut buf = Vec::with_capacity(data.len() + CHECKSUM_SIZE);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
    bs58::encode(buf).into_string()
}

/// Decodes a Base58Check string and verifies its checksum.
pub fn from_base58_check(encoded: &str) -> CryptoResult<Vec<u8>> {
    let mut decoded = bs58::decode(encoded)
        .into_vec()
        .map_err(|err| CryptoError::invalid_base58(err.to_string()))?;

    if decoded.len() < CHECKSUM_SIZE {
        return Err(CryptoError::invalid_base58(format!(
            "decoded length {} is shorter than the checksum",
            decoded.len()
        )));
    }

    let split = decoded.len() - CHECKSUM_SIZE;
    let checksum = Crypto::hash256(&decoded[..split]);
    if decoded[split..] != checksum[..CHECKSUM_SIZE] {
        return Err(CryptoError::invalid_base58("checksum mismatch"));
    }

    decoded.truncate(split);
    Ok(decoded)
}
