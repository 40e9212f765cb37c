//! Configuration types for AVTransport controllers
//!
//! `ControllerConfig` bundles the transport settings passed down to the SOAP
//! client with the escaping policy applied to caller-supplied values.

use std::time::Duration;

use soap_client::SoapClientConfig;
use thiserror::Error;

use crate::escape::EscapePolicy;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Configuration for an `AvTransportController`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Timeouts and user agent for the SOAP transport
    /// Default: 5s connect, 10s read
    pub transport: SoapClientConfig,

    /// Escaping applied to URLs and composed metadata
    /// Default: `EscapePolicy::ElementText`
    pub escape_policy: EscapePolicy,
}

impl ControllerConfig {
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.transport.connect_timeout = timeout;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.transport.read_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport.user_agent = user_agent.into();
        self
    }

    pub fn with_escape_policy(mut self, policy: EscapePolicy) -> Self {
        self.escape_policy = policy;
        self
    }

    /// Build a configuration from the defaults overridden by environment
    ///
    /// - `DLNA_CONNECT_TIMEOUT_SECS`: connect timeout in seconds
    /// - `DLNA_READ_TIMEOUT_SECS`: read timeout in seconds
    /// - `DLNA_USER_AGENT`: `User-Agent` header value
    /// - `DLNA_ESCAPE_QUOTES`: `true`/`1` to also escape `"`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(secs) = parse_env(&lookup, "DLNA_CONNECT_TIMEOUT_SECS", |v| v.parse::<u64>().ok())? {
            config.transport.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_env(&lookup, "DLNA_READ_TIMEOUT_SECS", |v| v.parse::<u64>().ok())? {
            config.transport.read_timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = lookup("DLNA_USER_AGENT").filter(|v| !v.trim().is_empty()) {
            config.transport.user_agent = user_agent;
        }
        if let Some(quotes) = parse_env(&lookup, "DLNA_ESCAPE_QUOTES", parse_bool)? {
            config.escape_policy = if quotes {
                EscapePolicy::ElementTextAndQuotes
            } else {
                EscapePolicy::ElementText
            };
        }

        Ok(config)
    }
}

fn parse_env<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => parse(value.trim())
            .map(Some)
            .ok_or(ConfigError::InvalidEnv { name, value }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
