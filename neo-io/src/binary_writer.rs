use crate::{IoError, IoResult};

/// Writes Neo wire data into an owned buffer.
///
/// # Examples
///
/// ```rust
/// use neo_io::BinaryWriter;
///
/// let mut writer = BinaryWriter::new();
/// writer.write_u32(42);
/// writer.write_var_bytes(b"Neo").unwrap();
///
/// assert_eq!(writer.to_bytes(), [42, 0, 0, 0, 3, b'N', b'e', b'o']);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    inner: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }

    pub fn write_bool(&mut self, value: bool) {
        self.inner.push(u8::from(value));
    }

    pub fn write_u8(&mut self, value: u8) {
        self.inner.push(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        self.inner.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, buffer: &[u8]) {
        self.inner.extend_from_slice(buffer);
    }

    /// Writes a Neo variable-length integer (`0xFD`/`0xFE`/`0xFF` prefixes).
    pub fn write_var_int(&mut self, value: u64) -> IoResult<()> {
        if value < 0xFD {
            self.write_u8(value as u8);
        } else if value <= 0xFFFF {
            self.write_u8(0xFD);
            self.write_u16(value as u16);
        } else if value <= 0xFFFF_FFFF {
            self.write_u8(0xFE);
            self.write_u32(value as u32);
        } else {
            self.write_u8(0xFF);
            self.write_u64(value);
        }
        Ok(())
    }

    /// Writes a length-prefixed byte sequence.
    pub fn write_var_bytes(&mut self, value: &[u8]) -> IoResult<()> {
        let len = u64::try_from(value.len())
            .map_err(|_| IoError::invalid_data("var bytes", "length exceeds u64"))?;
        self.write_var_int(len)?;
        self.write_bytes(value);
        Ok(())
    }

    /// Writes a length-prefixed UTF-8 string.
    pub fn write_var_string(&mut self, value: &str) -> IoResult<()> {
        self.write_var_bytes(value.as_bytes())
    }
}
