//! Refund payload type.

use serde::{Deserialize, Serialize};

/// Request body for `POST /refunds`: cancel an unused label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundCreate {
    /// Transaction id of the label to refund.
    pub transaction: String,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
}
