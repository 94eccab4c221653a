//! Client configuration and credentials.
//!
//! The only secret is the Shippo API token. Configuration loads from a
//! TOML file or the environment; programmatic construction via
//! [`ShippoConfig::new`] covers hosts that manage credentials themselves.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::Path;

/// Production Shippo API endpoint.
pub const SHIPPO_API_BASE_URL: &str = "https://api.goshippo.com";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "SHIPPO_API_TOKEN";

/// Environment variable overriding the API base URL (tests, proxies).
pub const BASE_URL_ENV_VAR: &str = "SHIPPO_API_BASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing API token (set {TOKEN_ENV_VAR})")]
    MissingToken,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Connection settings for the Shippo API.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShippoConfig {
    /// API token. Test tokens start with `shippo_test_`, live tokens
    /// with `shippo_live_`.
    pub api_token: SecretString,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    SHIPPO_API_BASE_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

impl ShippoConfig {
    /// Config with the given token and default endpoint/timeout.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: SecretString::from(api_token.into()),
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }

    /// Override the API base URL (mock servers, regional proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ShippoConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the environment: `SHIPPO_API_TOKEN` (required) and
    /// `SHIPPO_API_BASE_URL` (optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| ConfigError::MissingToken)?;
        let mut config = Self::new(token);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_token.expose_secret().trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_production_defaults() {
        let config = ShippoConfig::new("shippo_test_abc123");
        assert_eq!(config.base_url, SHIPPO_API_BASE_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_token_is_rejected() {
        let config = ShippoConfig::new("   ");
        assert!(matches!(config.validate(), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = ShippoConfig::new("shippo_test_abc123");
        config.request_timeout_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "request_timeout_ms", .. })
        ));
    }

    #[test]
    fn parses_toml_with_defaults() {
        let config: ShippoConfig =
            toml::from_str(r#"api_token = "shippo_test_abc123""#).unwrap();
        assert_eq!(config.base_url, SHIPPO_API_BASE_URL);
    }

    #[test]
    fn rejects_unknown_toml_keys() {
        let parsed = toml::from_str::<ShippoConfig>(
            r#"
            api_token = "shippo_test_abc123"
            api_secret = "oops"
            "#,
        );
        assert!(parsed.is_err());
    }
}
