//! Transaction payload and its components.

mod signer;
mod transaction;
mod witness;

pub use signer::{Signer, MAX_SUBITEMS};
pub use transaction::{Transaction, HEADER_SIZE, MAX_TRANSACTION_SIZE};
pub use witness::{Witness, MAX_INVOCATION_SCRIPT, MAX_VERIFICATION_SCRIPT};
