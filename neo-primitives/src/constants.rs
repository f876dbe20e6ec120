//! Protocol-wide sizes and defaults.

/// Size of a script hash in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Size of a SHA-256 digest in bytes.
pub const HASH_SIZE: usize = 32;

/// Address version byte used by Neo N3 (addresses start with `N`).
pub const ADDRESS_VERSION: u8 = 0x35;

/// Length of a Base58Check-decoded address: version + hash + checksum.
pub const ADDRESS_PAYLOAD_SIZE: usize = 1 + ADDRESS_SIZE + 4;
