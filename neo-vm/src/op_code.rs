//! Opcodes emitted by the script builder.

use crate::error::VmError;

/// A Neo VM opcode.
///
/// Only the instructions needed to assemble invocation, deployment and
/// verification scripts are listed.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum OpCode {
    /// Pushes a 1-byte signed integer.
    PUSHINT8 = 0x00,
    /// Pushes a 2-byte signed integer.
    PUSHINT16 = 0x01,
    /// Pushes a 4-byte signed integer.
    PUSHINT32 = 0x02,
    /// Pushes an 8-byte signed integer.
    PUSHINT64 = 0x03,
    /// Pushes a 16-byte signed integer.
    PUSHINT128 = 0x04,
    /// Pushes a 32-byte signed integer.
    PUSHINT256 = 0x05,
    /// Pushes the boolean `true`.
    PUSHT = 0x08,
    /// Pushes the boolean `false`.
    PUSHF = 0x09,
    /// Pushes `null`.
    PUSHNULL = 0x0B,
    /// Pushes data whose length fits in one byte.
    PUSHDATA1 = 0x0C,
    /// Pushes data whose length fits in two bytes.
    PUSHDATA2 = 0x0D,
    /// Pushes data whose length fits in four bytes.
    PUSHDATA4 = 0x0E,
    /// Pushes `-1`.
    PUSHM1 = 0x0F,
    /// Pushes `0`.
    PUSH0 = 0x10,
    /// Pushes `1`.
    PUSH1 = 0x11,
    /// Pushes `2`.
    PUSH2 = 0x12,
    /// Pushes `3`.
    PUSH3 = 0x13,
    /// Pushes `4`.
    PUSH4 = 0x14,
    /// Pushes `5`.
    PUSH5 = 0x15,
    /// Pushes `6`.
    PUSH6 = 0x16,
    /// Pushes `7`.
    PUSH7 = 0x17,
    /// Pushes `8`.
    PUSH8 = 0x18,
    /// Pushes `9`.
    PUSH9 = 0x19,
    /// Pushes `10`.
    PUSH10 = 0x1A,
    /// Pushes `11`.
    PUSH11 = 0x1B,
    /// Pushes `12`.
    PUSH12 = 0x1C,
    /// Pushes `13`.
    PUSH13 = 0x1D,
    /// Pushes `14`.
    PUSH14 = 0x1E,
    /// Pushes `15`.
    PUSH15 = 0x1F,
    /// Pushes `16`.
    PUSH16 = 0x20,
    /// Returns from the current context.
    RET = 0x40,
    /// Invokes an interop service by its 4-byte hash.
    SYSCALL = 0x41,
    /// Packs `n` items into an array.
    PACK = 0xC0,
    /// Pushes an empty array.
    NEWARRAY0 = 0xC2,
}

impl OpCode {
    /// Returns the `PUSH0`..`PUSH16` opcode for a small value.
    pub fn push_small(value: u8) -> Option<Self> {
        if value <= 16 {
            Self::try_from(Self::PUSH0 as u8 + value).ok()
        } else {
            None
        }
    }
}

impl TryFrom<u8> for OpCode {
    type Error = VmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let op = match value {
            0x00 => Self::PUSHINT8,
            0x01 => Self::PUSHINT16,
            0x02 => Self::PUSHINT32,
            0x03 => Self::PUSHINT64,
            0x04 => Self::PUSHINT128,
            0x05 => Self::PUSHINT256,
            0x08 => Self::PUSHT,
            0x09 => Self::PUSHF,
            0x0B => Self::PUSHNULL,
            0x0C => Self::PUSHDATA1,
            0x0D => Self::PUSHDATA2,
            0x0E => Self::PUSHDATA4,
            0x0F => Self::PUSHM1,
            0x10 => Self::PUSH0,
            0x11 => Self::PUSH1,
            0x12 => Self::PUSH2,
            0x13 => Self::PUSH3,
            0x14 => Self::PUSH4,
            0x15 => Self::PUSH5,
            0x16 => Self::PUSH6,
            0x17 => Self::PUSH7,
            0x18 => Self::PUSH8,
            0x19 => Self::PUSH9,
            0x1A => Self::PUSH10,
            0x1B => Self::PUSH11,
            0x1C => Self::PUSH12,
            0x1D => Self::PUSH13,
            0x1E => Self::PUSH14,
            0x1F => Self::PUSH15,
            0x20 => Self::PUSH16,
            0x40 => Self::RET,
            0x41 => Self::SYSCALL,
            0xC0 => Self::PACK,
            0xC2 => Self::NEWARRAY0,
            other => return Err(VmError::InvalidOpcode(other)),
        };
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(OpCode::PUSHINT8 as u8, 0x00);
        assert_eq!(OpCode::PUSHDATA1 as u8, 0x0C);
        assert_eq!(OpCode::PUSHM1 as u8, 0x0F);
        assert_eq!(OpCode::PUSH16 as u8, 0x20);
        assert_eq!(OpCode::SYSCALL as u8, 0x41);
        assert_eq!(OpCode::NEWARRAY0 as u8, 0xC2);
    }

    #[test]
    fn test_try_from_round_trip() {
        for byte in 0u8..=255 {
            if let Ok(op) = OpCode::try_from(byte) {
                assert_eq!(op as u8, byte);
            }
        }
        assert_eq!(OpCode::try_from(0x06), Err(VmError::InvalidOpcode(0x06)));
    }

    #[test]
    fn test_push_small() {
        assert_eq!(OpCode::push_small(15), Some(OpCode::PUSH15));
        assert_eq!(OpCode::push_small(17), None);
    }
}
