//! Neo.IO
//!
//! Binary serialization used by Neo payloads: a little-endian
//! `BinaryWriter` with Neo variable-length integer prefixes, and the
//! `Serializable` trait implemented by transactions, signers and witnesses.

mod binary_writer;
mod error;
pub mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use serializable::{helper, Serializable, SerializableExt};
