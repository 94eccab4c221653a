//! Shipment payload types: the shipment itself plus its extra services.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{Address, CustomsDeclarationCreate, ObjectRef, Parcel};

/// Request body for `POST /shipments`.
///
/// Creating a shipment triggers rate generation for every parcel between
/// the two addresses. Addresses, parcels, and the customs declaration can
/// each be an existing object id or an inline payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentCreate {
    pub address_from: ObjectRef<Address>,
    pub address_to: ObjectRef<Address>,
    pub parcels: Vec<ObjectRef<Parcel>>,
    /// Return address, when different from the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_return: Option<ObjectRef<Address>>,
    /// Required for international shipments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_declaration: Option<ObjectRef<CustomsDeclarationCreate>>,
    /// Restrict rate generation to these carrier account ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_accounts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ShipmentExtras>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// When true, rates are generated asynchronously.
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
}

/// Optional add-on services for a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentExtras {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_confirmation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Insurance>,
    #[serde(rename = "reference_1", skip_serializing_if = "Option::is_none")]
    pub reference1: Option<String>,
    #[serde(rename = "reference_2", skip_serializing_if = "Option::is_none")]
    pub reference2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday_delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_address_validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_return: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod: Option<CashOnDelivery>,
}

impl ShipmentExtras {
    /// True when no add-on is set; callers use this to omit the `extra`
    /// key entirely instead of sending an empty object.
    pub fn is_empty(&self) -> bool {
        *self == ShipmentExtras::default()
    }
}

/// Declared-value insurance for a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Cash-on-delivery instructions for a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashOnDelivery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    pub currency: String,
    /// One of `SECURED_FUNDS`, `CASH`, `ANY`.
    pub payment_method: String,
}
