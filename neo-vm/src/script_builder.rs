//! Script builder module for the Neo Virtual Machine.
//!
//! This module provides a way to programmatically construct scripts for the Neo VM.

use crate::error::{VmError, VmResult};
use crate::op_code::OpCode;
use crate::syscall::{interop_hash, Syscall};
use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

/// Longest interop name accepted by `emit_syscall`.
const MAX_SYSCALL_NAME: usize = 252;

/// Helps construct VM scripts programmatically.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    /// The script being built
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    #[inline]
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    /// Emits a single byte to the script.
    #[inline]
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.script.push(op);
        self
    }

    /// Emits an opcode to the script.
    #[inline]
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits raw bytes to the script.
    #[inline]
    pub fn emit_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits an opcode followed by the provided operand bytes.
    #[inline]
    pub fn emit_instruction(&mut self, opcode: OpCode, operand: &[u8]) -> &mut Self {
        self.emit_opcode(opcode);
        self.emit_bytes(operand)
    }

    /// Emits a push operation with the given data.
    ///
    /// Payloads shorter than 256 bytes always use `PUSHDATA1`.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();

        if len <= 0xFF {
            self.emit_opcode(OpCode::PUSHDATA1);
            self.emit(len as u8);
        } else if len <= 0xFFFF {
            self.emit_opcode(OpCode::PUSHDATA2);
            self.emit_bytes(&(len as u16).to_le_bytes());
        } else {
            self.emit_opcode(OpCode::PUSHDATA4);
            self.emit_bytes(&(len as u32).to_le_bytes());
        }

        self.emit_bytes(data)
    }

    /// Emits a push operation for a string.
    #[inline]
    pub fn emit_push_string(&mut self, value: &str) -> &mut Self {
        self.emit_push(value.as_bytes())
    }

    /// Emits a push operation for a boolean.
    #[inline]
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit_opcode(OpCode::PUSHT)
        } else {
            self.emit_opcode(OpCode::PUSHF)
        }
    }

    /// Emits `PUSHNULL`.
    #[inline]
    pub fn emit_push_null(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PUSHNULL)
    }

    /// Emits a push operation for an integer.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        if let Some(op) = small_int_opcode(value) {
            return self.emit_opcode(op);
        }
        let bytes = value.to_le_bytes();
        let used = minimal_signed_len(&bytes, value < 0);
        let (opcode, width) = pushint_width(used).unwrap_or((OpCode::PUSHINT64, 8));
        self.emit_instruction(opcode, &bytes[..width])
    }

    /// Emits a push operation for an arbitrary precision integer.
    ///
    /// Values in `-1..=16` use the single-byte opcodes; everything else is
    /// sign-padded to the narrowest `PUSHINT*` width.
    pub fn emit_push_bigint(&mut self, value: &BigInt) -> VmResult<&mut Self> {
        if let Some(op) = value.to_i64().and_then(small_int_opcode) {
            return Ok(self.emit_opcode(op));
        }

        let bytes = value.to_signed_bytes_le();
        let (opcode, width) = pushint_width(bytes.len()).ok_or_else(|| {
            VmError::invalid_operation_msg("BigInteger value exceeds PUSHINT256 capacity")
        })?;

        let negative = matches!(value.sign(), Sign::Minus);
        let padded = pad_signed(&bytes, width, negative);
        Ok(self.emit_instruction(opcode, &padded))
    }

    /// Emits the array constructor for `count` items already on the stack:
    /// `NEWARRAY0` when empty, otherwise `PUSH count` + `PACK`.
    pub fn emit_pack_items(&mut self, count: usize) -> &mut Self {
        if count == 0 {
            return self.emit_opcode(OpCode::NEWARRAY0);
        }
        self.emit_push_int(count as i64);
        self.emit_pack()
    }

    /// Emits a pack operation.
    #[inline]
    pub fn emit_pack(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PACK)
    }

    /// Emits a syscall operation.
    pub fn emit_syscall(&mut self, api: &str) -> VmResult<&mut Self> {
        let hash = Self::hash_syscall(api)?;
        Ok(self.emit_syscall_hash(hash))
    }

    /// Emits a syscall for a known interop service.
    #[inline]
    pub fn emit_interop(&mut self, syscall: Syscall) -> &mut Self {
        self.emit_syscall_hash(syscall.hash())
    }

    /// Emits a syscall using a precomputed hash.
    pub fn emit_syscall_hash(&mut self, hash: u32) -> &mut Self {
        self.emit_instruction(OpCode::SYSCALL, &hash.to_le_bytes())
    }

    /// Computes the syscall hash (single SHA-256 over raw ASCII, little-endian u32).
    pub fn hash_syscall(api: &str) -> VmResult<u32> {
        if api.len() > MAX_SYSCALL_NAME {
            return Err(VmError::invalid_operation_msg(format!(
                "Syscall API too long: {} bytes (max {MAX_SYSCALL_NAME})",
                api.len()
            )));
        }
        Ok(interop_hash(api))
    }

    /// Converts the builder to a byte array.
    #[inline]
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    /// Consumes the builder and returns the script bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }

    /// Returns the current script length.
    #[inline]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Returns true when no opcodes have been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

fn small_int_opcode(value: i64) -> Option<OpCode> {
    match value {
        -1 => Some(OpCode::PUSHM1),
        0..=16 => OpCode::push_small(value as u8),
        _ => None,
    }
}

fn pushint_width(len: usize) -> Option<(OpCode, usize)> {
    match len {
        0..=1 => Some((OpCode::PUSHINT8, 1)),
        2 => Some((OpCode::PUSHINT16, 2)),
        3..=4 => Some((OpCode::PUSHINT32, 4)),
        5..=8 => Some((OpCode::PUSHINT64, 8)),
        9..=16 => Some((OpCode::PUSHINT128, 16)),
        17..=32 => Some((OpCode::PUSHINT256, 32)),
        _ => None,
    }
}

/// Number of little-endian bytes needed to keep the two's complement value intact.
fn minimal_signed_len(bytes: &[u8], negative: bool) -> usize {
    let fill = if negative { 0xFF } else { 0x00 };
    let mut len = bytes.len();
    while len > 1 && bytes[len - 1] == fill && (bytes[len - 2] & 0x80 != 0) == negative {
        len -= 1;
    }
    len
}

fn pad_signed(bytes: &[u8], target_len: usize, negative: bool) -> Vec<u8> {
    let mut padded = Vec::with_capacity(target_len);
    padded.extend_from_slice(bytes);
    let fill = if negative { 0xFF } else { 0x00 };
    padded.resize(target_len.max(bytes.len()), fill);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bigint_script(value: BigInt) -> Vec<u8> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bigint(&value).unwrap();
        builder.to_array()
    }

    #[test]
    fn test_emit_opcode() {
        let mut builder = ScriptBuilder::new();
        builder.emit_opcode(OpCode::PUSH1);
        builder.emit_opcode(OpCode::PUSH2);
        builder.emit_opcode(OpCode::RET);

        assert_eq!(
            builder.to_array(),
            vec![OpCode::PUSH1 as u8, OpCode::PUSH2 as u8, OpCode::RET as u8]
        );
    }

    #[test]
    fn test_emit_push_int_small_values() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(-1);
        builder.emit_push_int(0);
        builder.emit_push_int(10);
        builder.emit_push_int(16);

        assert_eq!(builder.to_array(), vec![0x0F, 0x10, 0x1A, 0x20]);
    }

    #[test]
    fn test_emit_push_int_uses_pushint() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_int(17);
        builder.emit_push_int(-100);
        builder.emit_push_int(128);
        builder.emit_push_int(65_536);
        assert_eq!(
            builder.to_array(),
            vec![
                0x00, 0x11, // PUSHINT8 17
                0x00, 0x9C, // PUSHINT8 -100
                0x01, 0x80, 0x00, // PUSHINT16 128
                0x02, 0x00, 0x00, 0x01, 0x00, // PUSHINT32 65536
            ]
        );
    }

    #[test]
    fn test_emit_push_bigint() {
        assert_eq!(bigint_script(BigInt::from(5)), vec![0x15]);
        assert_eq!(bigint_script(BigInt::from(-1)), vec![0x0F]);
        assert_eq!(bigint_script(BigInt::from(-2)), vec![0x00, 0xFE]);

        let large = BigInt::from(u64::MAX);
        let mut expected = vec![OpCode::PUSHINT128 as u8];
        expected.extend_from_slice(&[0xFF; 8]);
        expected.extend_from_slice(&[0x00; 8]);
        assert_eq!(bigint_script(large), expected);
    }

    #[test]
    fn test_emit_push_bigint_too_large() {
        let value = BigInt::from(1) << 256;
        let mut builder = ScriptBuilder::new();
        assert!(builder.emit_push_bigint(&value).is_err());
    }

    #[test]
    fn test_emit_push_bool() {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_bool(true).emit_push_bool(false);
        assert_eq!(builder.to_array(), vec![OpCode::PUSHT as u8, OpCode::PUSHF as u8]);
    }

    #[test]
    fn test_emit_push_byte_array() {
        let mut builder = ScriptBuilder::new();

        let small_array = [1, 2, 3];
        builder.emit_push(&small_array);

        let medium_array = [0; 200];
        builder.emit_push(&medium_array);

        let large_array = [0; 65000];
        builder.emit_push(&large_array);

        let script = builder.to_array();

        assert_eq!(script[0], OpCode::PUSHDATA1 as u8);
        assert_eq!(script[1], small_array.len() as u8);
        assert_eq!(&script[2..5], &[1, 2, 3]);

        assert_eq!(script[5], OpCode::PUSHDATA1 as u8);
        assert_eq!(script[6], 200);

        let large_array_offset = 5 + 2 + 200;
        assert_eq!(script[large_array_offset], OpCode::PUSHDATA2 as u8);
        assert_eq!(script[large_array_offset + 1], (65000 & 0xFF) as u8);
        assert_eq!(script[large_array_offset + 2], ((65000 >> 8) & 0xFF) as u8);
    }

    #[test]
    fn test_emit_pack_items() {
        let mut builder = ScriptBuilder::new();
        builder.emit_pack_items(0);
        builder.emit_pack_items(2);
        assert_eq!(
            builder.to_array(),
            vec![OpCode::NEWARRAY0 as u8, OpCode::PUSH2 as u8, OpCode::PACK as u8]
        );
    }

    #[test]
    fn test_emit_syscall() {
        let mut builder = ScriptBuilder::new();
        builder.emit_syscall("System.Contract.Call").unwrap();
        assert_eq!(hex::encode(builder.to_array()), "41627d5b52");

        let mut builder = ScriptBuilder::new();
        builder.emit_interop(Syscall::CryptoCheckSig);
        assert_eq!(hex::encode(builder.to_array()), "4156e7b327");
    }

    #[test]
    fn test_hash_syscall_rejects_long_names() {
        let name = "x".repeat(MAX_SYSCALL_NAME + 1);
        assert!(ScriptBuilder::hash_syscall(&name).is_err());
    }

    proptest! {
        #[test]
        fn push_int_matches_bigint(value in any::<i64>()) {
            let mut by_int = ScriptBuilder::new();
            by_int.emit_push_int(value);
            prop_assert_eq!(by_int.to_array(), bigint_script(BigInt::from(value)));
        }
    }
}
