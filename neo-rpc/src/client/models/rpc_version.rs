// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_version.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neo_config::ProtocolSettings;
use serde::{Deserialize, Serialize};

/// Result of `getversion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcVersion {
    #[serde(rename = "tcpport", default)]
    pub tcp_port: u16,

    #[serde(default)]
    pub nonce: u32,

    #[serde(rename = "useragent")]
    pub user_agent: String,

    pub protocol: RpcProtocol,
}

/// The `protocol` member of `getversion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcProtocol {
    pub network: u32,

    #[serde(rename = "addressversion")]
    pub address_version: u8,

    #[serde(rename = "msperblock")]
    pub ms_per_block: u64,

    #[serde(rename = "maxvaliduntilblockincrement")]
    pub max_valid_until_block_increment: u32,
}

impl RpcProtocol {
    /// Protocol settings reported by the node.
    #[must_use]
    pub fn to_settings(&self) -> ProtocolSettings {
        ProtocolSettings {
            network: self.network,
            address_version: self.address_version,
            ms_per_block: self.ms_per_block,
            max_valid_until_block_increment: self.max_valid_until_block_increment,
        }
    }
}
