//! Client configuration.

use std::sync::Arc;
use std::time::Duration;

use mapwire_core::{CoreError, Protocol};

use crate::client::Client;
use crate::error::ClientError;
use crate::executor::{HttpExecutor, RequestExecutor};

/// Default hostname for map and connection management calls.
pub const DEFAULT_HOSTNAME: &str = "api.mapwire.io";

/// Default hostname for data calls. Cursors always target the data host,
/// never the management host.
pub const DEFAULT_DATA_HOSTNAME: &str = "data.api.mapwire.io";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Config
// ============================================================================

/// Validated client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as the bearer token.
    pub token: String,
    /// Hostname for management (CRUD) calls.
    pub hostname: String,
    /// Hostname for data calls.
    pub data_hostname: String,
    /// URL scheme for management calls.
    pub protocol: Protocol,
    /// Port for management calls.
    pub port: u16,
    /// Accept invalid TLS certificates. Local development only.
    pub allow_unauthorized: bool,
    /// Request timeout.
    pub timeout: Duration,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`Client`].
///
/// Defaults: HTTPS against the production hostnames, scheme-default port,
/// 30 second timeout, strict TLS.
pub struct ClientBuilder {
    token: String,
    hostname: String,
    data_hostname: String,
    protocol: Protocol,
    port: Option<u16>,
    allow_unauthorized: bool,
    timeout: Duration,
    executor: Option<Arc<dyn RequestExecutor>>,
}

impl ClientBuilder {
    /// Creates a builder holding the given API key.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            data_hostname: DEFAULT_DATA_HOSTNAME.to_string(),
            protocol: Protocol::default(),
            port: None,
            allow_unauthorized: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            executor: None,
        }
    }

    /// Overrides the management hostname.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Overrides the data-call hostname.
    pub fn data_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.data_hostname = hostname.into();
        self
    }

    /// Sets the URL scheme for management calls.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Overrides the management port. Defaults to the scheme's port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Accepts invalid TLS certificates. Local development only.
    pub fn allow_unauthorized(mut self, allow: bool) -> Self {
        self.allow_unauthorized = allow;
        self
    }

    /// Overrides the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Substitutes the request executor. Tests and embedders use this to
    /// route requests through their own transport.
    pub fn executor(mut self, executor: Arc<dyn RequestExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Validates the configuration and builds the client.
    pub fn build(self) -> Result<Client, ClientError> {
        if self.token.is_empty() {
            return Err(CoreError::InvalidConfig("an API key is required".to_string()).into());
        }
        if self.hostname.is_empty() || self.data_hostname.is_empty() {
            return Err(CoreError::InvalidConfig("a hostname is required".to_string()).into());
        }

        let config = ClientConfig {
            token: self.token,
            hostname: self.hostname,
            data_hostname: self.data_hostname,
            protocol: self.protocol,
            port: self.port.unwrap_or_else(|| self.protocol.default_port()),
            allow_unauthorized: self.allow_unauthorized,
            timeout: self.timeout,
        };

        let executor = match self.executor {
            Some(executor) => executor,
            None => Arc::new(HttpExecutor::new(config.timeout, config.allow_unauthorized)?),
        };

        Ok(Client::from_parts(config, executor))
    }
}
