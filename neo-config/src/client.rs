//! Client configuration file.

use crate::error::{ConfigError, ConfigResult};
use crate::network::NetworkType;
use crate::protocol::ProtocolSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Top-level client configuration.
///
/// ```toml
/// network = "testnet"
///
/// [rpc]
/// url = "http://seed1t5.neo.org:20332"
/// timeout_secs = 30
///
/// [logging]
/// level = "debug"
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Network the client talks to.
    pub network: NetworkType,

    /// JSON-RPC endpoint settings.
    pub rpc: RpcClientSettings,

    /// Protocol overrides; defaults follow `network`.
    pub protocol: Option<ProtocolSettings>,

    /// Logging settings.
    pub logging: LoggingSettings,
}

/// JSON-RPC endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcClientSettings {
    /// Endpoint URL; defaults to the local node of the configured network.
    pub url: Option<Url>,

    /// Basic auth user.
    pub user: Option<String>,

    /// Basic auth password.
    pub password: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcClientSettings {
    fn default() -> Self {
        Self {
            url: None,
            user: None,
            password: None,
            timeout_secs: 30,
        }
    }
}

impl RpcClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,

    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl ClientConfig {
    /// Loads and validates a TOML configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), network = %config.network, "loaded client configuration");
        Ok(config)
    }

    /// Parses and validates TOML configuration text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks field values that serde cannot.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rpc.timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                "rpc.timeout_secs",
                "must be greater than zero",
            ));
        }
        if let Some(url) = &self.rpc.url {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ConfigError::invalid_value(
                    "rpc.url",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
        }
        if let Some(protocol) = &self.protocol {
            if protocol.max_valid_until_block_increment == 0 {
                return Err(ConfigError::invalid_value(
                    "protocol.max_valid_until_block_increment",
                    "must be greater than zero",
                ));
            }
        }
        Ok(())
    }

    /// The endpoint to connect to.
    pub fn rpc_url(&self) -> ConfigResult<Url> {
        match &self.rpc.url {
            Some(url) => Ok(url.clone()),
            None => Url::parse(self.network.default_rpc_url())
                .map_err(|e| ConfigError::invalid_value("rpc.url", e.to_string())),
        }
    }

    /// The effective protocol settings.
    pub fn protocol_settings(&self) -> ProtocolSettings {
        self.protocol
            .clone()
            .unwrap_or_else(|| ProtocolSettings::for_network(self.network))
    }
}
