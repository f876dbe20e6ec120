//! Smart contract types: the single-signature account contract and manifests.

mod contract;
pub mod manifest;

pub use contract::Contract;
