//! VM state implementation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::VmError;

/// Indicates the status of the VM.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VMState {
    /// Indicates that the execution is in progress or has not yet begun.
    #[default]
    NONE = 0,

    /// Indicates that the execution has been completed successfully.
    HALT = 1 << 0,

    /// Indicates that the execution has ended, and an exception that cannot be caught is thrown.
    FAULT = 1 << 1,

    /// Indicates that a breakpoint is currently being hit.
    BREAK = 1 << 2,
}

impl VMState {
    #[inline]
    pub fn contains(self, flag: VMState) -> bool {
        (self as u8 & flag as u8) != 0
    }

    #[inline]
    pub fn is_halt(self) -> bool {
        self.contains(VMState::HALT)
    }

    #[inline]
    pub fn is_fault(self) -> bool {
        self.contains(VMState::FAULT)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            VMState::NONE => "NONE",
            VMState::HALT => "HALT",
            VMState::FAULT => "FAULT",
            VMState::BREAK => "BREAK",
        }
    }
}

impl fmt::Display for VMState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VMState {
    type Err = VmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(VMState::NONE),
            "HALT" => Ok(VMState::HALT),
            "FAULT" => Ok(VMState::FAULT),
            "BREAK" => Ok(VMState::BREAK),
            other => Err(VmError::invalid_operation_msg(format!(
                "Unknown VM state: {other}"
            ))),
        }
    }
}

impl Serialize for VMState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VMState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
