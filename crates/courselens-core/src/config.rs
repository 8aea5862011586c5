//! Backend client configuration.

use std::time::Duration;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for talking to the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the analysis server.
    #[builder(default = "default_server_url()")]
    pub server_url: String,

    /// Per-request timeout in milliseconds.
    ///
    /// Loading a large data plugin can take about a minute, so the default
    /// is generous.
    #[builder(default = "120_000")]
    pub request_timeout_ms: u64,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn check_server_url(url: &str) -> Result<(), String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("Server URL must use http or https: {url}"))
    }
}

fn check_timeout(ms: u64) -> Result<(), String> {
    if ms == 0 {
        return Err("Request timeout must be greater than zero".to_string());
    }
    Ok(())
}

impl ClientConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref url) = self.server_url {
            check_server_url(url)?;
        }
        if let Some(ms) = self.request_timeout_ms {
            check_timeout(ms)?;
        }
        Ok(())
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Create a config for the given server with default timeouts.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    /// Check a config that did not come from the builder, e.g. one read
    /// from a file or edited after building.
    pub fn validate(&self) -> Result<(), String> {
        check_server_url(&self.server_url)?;
        check_timeout(self.request_timeout_ms)
    }

    /// The request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_ms: 120_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::builder()
            .server_url("http://analysis.local:9000")
            .request_timeout_ms(500u64)
            .build()
            .unwrap();

        assert_eq!(config.server_url, "http://analysis.local:9000");
        assert_eq!(config.request_timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ClientConfig::builder().build().unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_config_rejects_bad_url() {
        let result = ClientConfig::builder().server_url("ftp://example.com").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_checks_plain_configs() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::new("https://analysis.local").validate().is_ok());

        let err = ClientConfig::new("ftp://example.com").validate().unwrap_err();
        assert!(err.contains("http or https"));

        let config = ClientConfig {
            request_timeout_ms: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
