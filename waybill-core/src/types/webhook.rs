//! Webhook subscription payload types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /webhooks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookCreate {
    /// HTTPS endpoint that receives event payloads.
    pub url: String,
    /// Event kind, e.g. `track_updated`, `transaction_created`.
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
}

/// Partial update body for `PUT /webhooks/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
}
