//! CLI command implementations
//!
//! Each submodule implements one subcommand on top of the contract client.

pub mod deploy;
pub mod invoke;

use anyhow::{Context, Result};
use neo_config::ProtocolSettings;
use neo_primitives::UInt160;

/// Common result type for CLI commands
pub type CommandResult = Result<String>;

/// Accepts a `0x`-prefixed script hash or an address of the configured network.
pub fn parse_script_hash(value: &str, settings: &ProtocolSettings) -> Result<UInt160> {
    if value.starts_with("0x") || value.starts_with("0X") {
        return UInt160::parse(value).with_context(|| format!("invalid script hash '{value}'"));
    }
    UInt160::from_address(value, settings.address_version)
        .or_else(|_| UInt160::parse(value))
        .with_context(|| format!("'{value}' is neither a script hash nor an address"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_hash_and_address_forms() {
        let settings = ProtocolSettings::mainnet();
        let hash = parse_script_hash("0xd2a4cff31913016155e38e474a2c06d08be276cf", &settings)
            .unwrap();
        let address = hash.to_address(settings.address_version);

        assert_eq!(parse_script_hash(&address, &settings).unwrap(), hash);
        assert_eq!(
            parse_script_hash("d2a4cff31913016155e38e474a2c06d08be276cf", &settings).unwrap(),
            hash
        );
        assert!(parse_script_hash("0x1234", &settings).is_err());
        assert!(parse_script_hash("not-an-address", &settings).is_err());
    }
}
