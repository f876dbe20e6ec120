// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client/builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{RpcClient, RpcClientHooks, DEFAULT_HTTP_TIMEOUT};
use crate::client::ClientRpcError;
use base64::{engine::general_purpose, Engine as _};
use neo_config::{ProtocolSettings, RpcClientSettings};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builder for [`RpcClient`].
#[derive(Debug, Clone)]
pub struct RpcClientBuilder {
    url: Url,
    credentials: Option<(String, String)>,
    protocol_settings: ProtocolSettings,
    timeout: Duration,
    hooks: RpcClientHooks,
}

impl RpcClientBuilder {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            credentials: None,
            protocol_settings: ProtocolSettings::default(),
            timeout: DEFAULT_HTTP_TIMEOUT,
            hooks: RpcClientHooks::default(),
        }
    }

    /// Starts from configured endpoint settings.
    #[must_use]
    pub fn from_settings(url: Url, settings: &RpcClientSettings) -> Self {
        Self::new(url)
            .with_optional_auth(settings.user.clone(), settings.password.clone())
            .timeout(settings.timeout())
    }

    /// Sends HTTP basic auth with every request.
    #[must_use]
    pub fn basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    /// Basic auth is only set when both parts are present.
    #[must_use]
    pub fn with_optional_auth(self, user: Option<String>, password: Option<String>) -> Self {
        match (user, password) {
            (Some(user), Some(password)) => self.basic_auth(user, password),
            _ => self,
        }
    }

    #[must_use]
    pub fn protocol_settings(mut self, settings: ProtocolSettings) -> Self {
        self.protocol_settings = settings;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn hooks(mut self, hooks: RpcClientHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails when the credentials cannot be sent as a header or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<RpcClient, ClientRpcError> {
        let mut headers = HeaderMap::new();
        if let Some((user, password)) = &self.credentials {
            let token = general_purpose::STANDARD.encode(format!("{user}:{password}"));
            let mut value = HeaderValue::from_str(&format!("Basic {token}"))
                .map_err(|e| ClientRpcError::internal(format!("Invalid credentials: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http_client = Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClientRpcError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(RpcClient::with_client_config(
            http_client,
            self.url,
            self.protocol_settings,
            self.hooks,
            self.timeout,
        ))
    }
}
