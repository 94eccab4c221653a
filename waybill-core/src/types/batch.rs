//! Batch payload type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /batches`.
///
/// `batch_shipments` is caller-supplied JSON (shipment objects or batch
/// shipment records) and is forwarded verbatim - the upstream API does
/// its own per-shipment validation and reports failures per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreate {
    pub default_carrier_account: String,
    pub default_servicelevel_token: String,
    pub batch_shipments: Vec<Value>,
    /// One of `PDF`, `PDF_4x6`, `PNG`, `ZPLII`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_filetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}
