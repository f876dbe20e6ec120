//! Core payload types for Neo N3.
//!
//! Transactions, their signers and witnesses, the single-signature account
//! contract, and contract manifests.

pub mod error;
pub mod network;
mod serde_helpers;
pub mod smart_contract;

pub use error::{CoreError, CoreResult};
pub use network::payloads::{Signer, Transaction, Witness};
pub use smart_contract::manifest::ContractManifest;
pub use smart_contract::Contract;

pub use neo_primitives::{UInt160, UInt256, WitnessScope};
