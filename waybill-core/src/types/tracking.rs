//! Tracking registration payload type.

use serde::{Deserialize, Serialize};

/// Register a tracking number for webhook push updates.
///
/// Reading the current status of a package is a plain GET on
/// `/tracks/{carrier}/{tracking_number}` and needs no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingCreate {
    /// Carrier token, e.g. `usps`, `fedex`.
    pub carrier: String,
    pub tracking_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}
