//! Pickup payload types.

use serde::{Deserialize, Serialize};

use super::{Address, ObjectRef};

/// Request body for `POST /pickups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupCreate {
    pub carrier_account: String,
    pub location: PickupLocation,
    /// Transaction ids of the labels the carrier should collect.
    pub transactions: Vec<String>,
    /// ISO 8601 start of the requested pickup window.
    pub requested_start_time: String,
    /// ISO 8601 end of the requested pickup window.
    pub requested_end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// Where at the address the driver should look.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupLocation {
    /// E.g. `Front Door`, `Mail Room`, `Reception`.
    pub building_location_type: String,
    /// E.g. `apartment`, `suite`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    pub address: ObjectRef<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}
