//! Serialization traits for Neo objects.

pub mod helper;

use crate::{BinaryWriter, IoResult};

/// Represents Neo objects that can be written to the wire.
pub trait Serializable {
    /// The size of the object in bytes after serialization.
    fn size(&self) -> usize;

    /// Serializes the object using the specified `BinaryWriter`.
    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()>;
}

/// Extension methods for serializable objects.
pub trait SerializableExt: Serializable {
    /// Serializes the object into a fresh byte vector.
    fn to_array(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize(&mut writer)?;
        Ok(writer.into_bytes())
    }
}

impl<T: Serializable> SerializableExt for T {}
