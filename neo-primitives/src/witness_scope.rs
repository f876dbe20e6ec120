//! Implementation of `WitnessScope`, the flags restricting where a witness applies.

use crate::error::{PrimitiveError, PrimitiveResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// Scope of a signer's witness (a flags value).
///
/// `GLOBAL` cannot be combined with any other flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WitnessScope(u8);

impl WitnessScope {
    /// No contract is witnessed. Only the transaction itself is signed.
    pub const NONE: Self = Self(0x00);

    /// The witness is valid only while the entry script calls the contract
    /// directly; it expires when entering deeper internal invocations.
    pub const CALLED_BY_ENTRY: Self = Self(0x01);

    /// The witness is valid for the listed contracts.
    pub const CUSTOM_CONTRACTS: Self = Self(0x10);

    /// The witness is valid for contracts in the listed groups.
    pub const CUSTOM_GROUPS: Self = Self(0x20);

    /// The witness is valid where the attached rules allow it.
    pub const WITNESS_RULES: Self = Self(0x40);

    /// The witness is valid in every context.
    pub const GLOBAL: Self = Self(0x80);

    const NAMED: [(Self, &'static str); 5] = [
        (Self::CALLED_BY_ENTRY, "CalledByEntry"),
        (Self::CUSTOM_CONTRACTS, "CustomContracts"),
        (Self::CUSTOM_GROUPS, "CustomGroups"),
        (Self::WITNESS_RULES, "WitnessRules"),
        (Self::GLOBAL, "Global"),
    ];

    const VALID_BITS: u8 = 0x01 | 0x10 | 0x20 | 0x40 | 0x80;

    /// Creates a scope from its wire byte, rejecting unknown bits and
    /// `Global` combined with anything else.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` for an invalid combination.
    pub fn from_byte(value: u8) -> PrimitiveResult<Self> {
        let scope = Self(value);
        if scope.is_valid() {
            Ok(scope)
        } else {
            Err(PrimitiveError::invalid_format(format!(
                "Invalid witness scope {value:#04x}"
            )))
        }
    }

    /// Gets the wire byte.
    #[inline]
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Checks whether every bit of `flag` is set.
    #[inline]
    #[must_use]
    pub const fn has_flag(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0 && flag.0 != 0
    }

    /// Validates the flag combination.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        if self.0 & !Self::VALID_BITS != 0 {
            return false;
        }
        !(self.0 & Self::GLOBAL.0 != 0 && self.0 != Self::GLOBAL.0)
    }
}

impl BitOr for WitnessScope {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for WitnessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("None");
        }
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.has_flag(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join(", "))
    }
}

impl FromStr for WitnessScope {
    type Err = PrimitiveError;

    /// Parses `"CalledByEntry"`, `"Global"` or comma separated flag lists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scope = Self::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if part.eq_ignore_ascii_case("None") {
                continue;
            }
            let flag = Self::NAMED
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(part))
                .map(|(flag, _)| *flag)
                .ok_or_else(|| {
                    PrimitiveError::invalid_format(format!("Unknown witness scope: {part}"))
                })?;
            scope = scope | flag;
        }
        Self::from_byte(scope.0)
    }
}

impl Serialize for WitnessScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WitnessScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
