//! Configuration for Neo N3 RPC clients.
//!
//! `ProtocolSettings` carries the network parameters transactions depend on
//! (network magic, address version, validity window). `ClientConfig` is the
//! TOML file read by the command line client.

mod client;
mod error;
mod network;
mod protocol;

pub use client::{ClientConfig, LogFormat, LoggingSettings, RpcClientSettings};
pub use error::{ConfigError, ConfigResult};
pub use network::NetworkType;
pub use protocol::ProtocolSettings;
