//! Transaction (label purchase) payload types.

use serde::{Deserialize, Serialize};

use super::ShipmentCreate;

/// Purchase a label from a previously generated rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionFromRate {
    /// Rate object id to purchase.
    pub rate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
}

/// One-call purchase: create the shipment and buy the label in a single
/// request, bypassing rate shopping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionOneCall {
    pub shipment: ShipmentCreate,
    pub carrier_account: String,
    pub servicelevel_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
}

/// Query filters for the transaction listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by object status, e.g. `SUCCESS`, `ERROR`.
    pub object_status: Option<String>,
    /// Filter by tracking status, e.g. `DELIVERED`.
    pub tracking_status: Option<String>,
}
