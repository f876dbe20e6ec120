// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client/mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

mod builder;
mod client;
mod hooks;

pub use builder::RpcClientBuilder;
pub use hooks::{RpcClientHooks, RpcRequestOutcome};

use neo_config::ProtocolSettings;
use reqwest::Client;
use url::Url;
use std::sync::Arc;
use std::time::Duration;

pub(crate) const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-RPC client for a Neo N3 node.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
    pub(crate) protocol_settings: Arc<ProtocolSettings>,
    request_timeout: Duration,
    hooks: RpcClientHooks,
}
