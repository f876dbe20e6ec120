//! # Neo Primitives
//!
//! Fundamental types shared by every crate in the contract client workspace:
//! - `UInt160`: 160-bit script hash (contract and account identifiers)
//! - `UInt256`: 256-bit hash (transaction identifiers)
//! - `WitnessScope`: the flags describing where a signer's witness is valid
//! - `ContractParameterType`: ABI parameter types used by contract manifests
//!
//! ## Example
//!
//! ```rust
//! use neo_primitives::{UInt160, WitnessScope};
//!
//! let hash = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
//! assert!(!hash.is_zero());
//! assert_eq!(WitnessScope::CALLED_BY_ENTRY.to_string(), "CalledByEntry");
//! ```

pub mod constants;
pub mod contract_parameter_type;
pub mod error;
pub mod uint160;
pub mod uint256;
pub mod witness_scope;

pub use constants::*;
pub use contract_parameter_type::ContractParameterType;
pub use error::{PrimitiveError, PrimitiveResult};
pub use uint160::{UInt160, UINT160_SIZE};
pub use uint256::{UInt256, UINT256_SIZE};
pub use witness_scope::WitnessScope;
