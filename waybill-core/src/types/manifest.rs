//! Manifest (scan form) payload type.

use serde::{Deserialize, Serialize};

use super::{Address, ObjectRef};

/// Request body for `POST /manifests`.
///
/// A manifest aggregates the day's labels for a single carrier hand-off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestCreate {
    pub carrier_account: String,
    /// ISO 8601 date-time of the hand-off.
    pub shipment_date: String,
    pub address_from: ObjectRef<Address>,
    /// Restrict the manifest to these transaction ids; when omitted the
    /// carrier includes every eligible label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<String>>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
}
