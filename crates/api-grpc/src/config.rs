//! Server runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the server. Request
//! handling never reads environment variables.

use std::net::SocketAddr;

/// Default listen address when `SAMPLE_ADDR` is unset or blank.
pub const DEFAULT_ADDR: &str = "0.0.0.0:50051";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid listen address '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// gRPC server configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    addr: SocketAddr,
    api_key: Option<String>,
}

impl ServerConfig {
    pub fn new(addr: SocketAddr, api_key: Option<String>) -> Self {
        Self { addr, api_key }
    }

    /// Reads `SAMPLE_ADDR` and `SAMPLE_API_KEY` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("SAMPLE_ADDR").ok(),
            std::env::var("SAMPLE_API_KEY").ok(),
        )
    }

    /// Builds a configuration from optional raw values.
    ///
    /// Blank values count as unset: a blank address falls back to [`DEFAULT_ADDR`] and a blank
    /// API key disables authentication.
    pub fn from_values(addr: Option<String>, api_key: Option<String>) -> Result<Self, ConfigError> {
        let addr = addr
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr.clone(),
                source,
            })?;
        let api_key = api_key.filter(|v| !v.trim().is_empty());

        Ok(Self { addr, api_key })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = ServerConfig::from_values(None, None).expect("defaults should parse");
        assert_eq!(cfg.addr(), DEFAULT_ADDR.parse().expect("valid default"));
        assert_eq!(cfg.api_key(), None);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let cfg = ServerConfig::from_values(Some("  ".into()), Some(" ".into()))
            .expect("blank values should fall back");
        assert_eq!(cfg.addr().port(), 50051);
        assert_eq!(cfg.api_key(), None);
    }

    #[test]
    fn test_explicit_values_are_used() {
        let cfg = ServerConfig::from_values(Some("127.0.0.1:6000".into()), Some("key".into()))
            .expect("should parse");
        assert_eq!(cfg.addr().to_string(), "127.0.0.1:6000");
        assert_eq!(cfg.api_key(), Some("key"));
    }

    #[test]
    fn test_invalid_addr_is_reported() {
        let err = ServerConfig::from_values(Some("not-an-addr".into()), None)
            .expect_err("should reject");
        assert!(err.to_string().contains("invalid listen address 'not-an-addr'"));
    }
}
