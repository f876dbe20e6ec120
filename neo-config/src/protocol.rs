//! Protocol settings for Neo N3 blockchain
//!
//! The parameters a client needs to build transactions that a node will
//! accept on a given network.

use crate::network::NetworkType;
use serde::{Deserialize, Serialize};

/// Neo N3 protocol settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolSettings {
    /// Network identifier (magic number)
    pub network: u32,

    /// Address version byte for address encoding
    #[serde(default = "default_address_version")]
    pub address_version: u8,

    /// Milliseconds per block
    #[serde(default = "default_ms_per_block")]
    pub ms_per_block: u64,

    /// Maximum time for transaction validity (in blocks)
    #[serde(default = "default_max_valid_until_block_increment")]
    pub max_valid_until_block_increment: u32,
}

// Default value functions
fn default_address_version() -> u8 {
    0x35 // 'N' prefix for Neo addresses
}

fn default_ms_per_block() -> u64 {
    15000 // 15 seconds
}

fn default_max_valid_until_block_increment() -> u32 {
    5760 // ~24 hours at 15 sec/block
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl ProtocolSettings {
    /// MainNet protocol settings
    pub fn mainnet() -> Self {
        Self::for_network(NetworkType::MainNet)
    }

    /// TestNet protocol settings
    pub fn testnet() -> Self {
        Self::for_network(NetworkType::TestNet)
    }

    /// Private network protocol settings
    pub fn private(network_magic: u32) -> Self {
        Self {
            network: network_magic,
            ms_per_block: 1000, // Faster for testing
            ..Self::for_network(NetworkType::Private)
        }
    }

    /// Settings for a well-known network.
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network: network.magic(),
            address_version: network.address_version(),
            ms_per_block: default_ms_per_block(),
            max_valid_until_block_increment: default_max_valid_until_block_increment(),
        }
    }

    /// Calculate time span for a given number of blocks
    pub fn time_per_block(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.ms_per_block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_settings() {
        let settings = ProtocolSettings::mainnet();
        assert_eq!(settings.network, 860833102);
        assert_eq!(settings.address_version, 0x35);
        assert_eq!(settings.max_valid_until_block_increment, 5760);
    }

    #[test]
    fn test_private_settings() {
        let settings = ProtocolSettings::private(42);
        assert_eq!(settings.network, 42);
        assert_eq!(settings.time_per_block().as_millis(), 1000);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let settings: ProtocolSettings = toml::from_str("network = 7").unwrap();
        assert_eq!(settings.network, 7);
        assert_eq!(settings.max_valid_until_block_increment, 5760);
    }
}
