//! Parcel payload type.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Physical package dimensions and weight.
///
/// Dimensions keep the exact JSON number the caller supplied (no
/// int-to-float coercion), since the upstream API echoes them back.
/// When `template` names a carrier parcel preset the dimensions may be
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Number>,
    /// One of `in`, `cm`, `ft`, `mm`, `m`, `yd`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Number>,
    /// One of `g`, `oz`, `lb`, `kg`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_unit: Option<String>,
    /// Carrier parcel template token, e.g. `USPS_MediumFlatRateBox`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}
