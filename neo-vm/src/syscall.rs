//! Interop services invoked through `SYSCALL`.

use sha2::{Digest, Sha256};

/// Interop services the client emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syscall {
    ContractCall,
    ContractCreate,
    CryptoCheckSig,
}

impl Syscall {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "System.Contract.Call" => Some(Syscall::ContractCall),
            "System.Contract.Create" => Some(Syscall::ContractCreate),
            "System.Crypto.CheckSig" => Some(Syscall::CryptoCheckSig),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Syscall::ContractCall => "System.Contract.Call",
            Syscall::ContractCreate => "System.Contract.Create",
            Syscall::CryptoCheckSig => "System.Crypto.CheckSig",
        }
    }

    /// The interop hash: the first four bytes of `SHA256(name)` read little-endian.
    pub fn hash(self) -> u32 {
        interop_hash(self.name())
    }
}

pub(crate) fn interop_hash(api: &str) -> u32 {
    let digest = Sha256::digest(api.as_bytes());
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}
