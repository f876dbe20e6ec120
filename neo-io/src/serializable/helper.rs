//! Size and array helpers for Neo variable-length encoding.

use super::Serializable;
use crate::{BinaryWriter, IoResult};

/// Returns the number of bytes required to encode `value` as a var-int.
#[inline]
pub fn get_var_size(value: u64) -> usize {
    if value < 0xFD {
        1
    } else if value <= 0xFFFF {
        1 + 2
    } else if value <= 0xFFFF_FFFF {
        1 + 4
    } else {
        1 + 8
    }
}

/// Returns the size contribution for a byte slice written with `write_var_bytes`.
#[inline]
pub fn get_var_size_bytes(bytes: &[u8]) -> usize {
    get_var_size(bytes.len() as u64) + bytes.len()
}

/// Returns the encoded size of an array of serializable items.
#[inline]
pub fn get_var_size_serializable_slice<T: Serializable>(values: &[T]) -> usize {
    get_var_size(values.len() as u64) + values.iter().map(Serializable::size).sum::<usize>()
}

/// Serializes an array of `Serializable` items with a Neo length prefix.
pub fn serialize_array<T: Serializable>(values: &[T], writer: &mut BinaryWriter) -> IoResult<()> {
    writer.write_var_int(values.len() as u64)?;
    for value in values {
        value.serialize(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(u8, u8);

    impl Serializable for Pair {
        fn size(&self) -> usize {
            2
        }

        fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
            writer.write_u8(self.0);
            writer.write_u8(self.1);
            Ok(())
        }
    }

    #[test]
    fn var_sizes() {
        assert_eq!(get_var_size(0xFC), 1);
        assert_eq!(get_var_size(0xFD), 3);
        assert_eq!(get_var_size(0x1_0000), 5);
        assert_eq!(get_var_size(u64::MAX), 9);
        assert_eq!(get_var_size_bytes(&[0u8; 300]), 303);
    }

    #[test]
    fn array_size_matches_output() {
        let values = vec![Pair(1, 2), Pair(3, 4)];
        let mut writer = BinaryWriter::new();
        serialize_array(&values, &mut writer).unwrap();
        assert_eq!(writer.len(), get_var_size_serializable_slice(&values));
        assert_eq!(writer.into_bytes(), vec![2, 1, 2, 3, 4]);
    }
}
