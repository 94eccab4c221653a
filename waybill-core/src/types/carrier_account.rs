//! Carrier account payload types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /carrier_accounts`.
///
/// `parameters` is a carrier-specific credential object (caller-supplied
/// JSON) and is forwarded without inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierAccountCreate {
    /// Carrier token, e.g. `usps`, `dhl_express`.
    pub carrier: String,
    pub account_id: String,
    pub parameters: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,
}

/// Partial update body for `PUT /carrier_accounts/{id}`.
///
/// The carrier itself cannot be changed after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarrierAccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

/// Query filters for the carrier account listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct CarrierAccountFilter {
    pub carrier: Option<String>,
}
