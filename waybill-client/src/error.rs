//! Client error types.

use crate::config::ConfigError;

/// Errors surfaced by the Shippo client.
///
/// Failed requests are never retried; every failure maps to exactly one
/// of these variants and propagates to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The upstream API answered with a non-2xx status. `detail` carries
    /// the server-provided description when the error body had one.
    #[error("Shippo API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        detail: Option<String>,
    },
    /// The request never produced an HTTP response (DNS, TLS, timeout),
    /// or the response body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// The response body was not the JSON shape we expected.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Server-provided error description, when present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
