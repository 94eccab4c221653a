//! Request payload types for every Shippo resource.
//!
//! One module per resource, mirroring the upstream endpoint families.
//! All types serialize straight to the wire schema: field names are the
//! snake_case names Shippo expects, and optional fields are skipped when
//! unset. Responses are deliberately not modeled - the adapter passes
//! server objects through to the host untouched.

use serde::{Deserialize, Serialize};

pub mod address;
pub mod batch;
pub mod carrier_account;
pub mod customs;
pub mod manifest;
pub mod parcel;
pub mod pickup;
pub mod refund;
pub mod shipment;
pub mod tracking;
pub mod transaction;
pub mod webhook;

pub use address::Address;
pub use batch::BatchCreate;
pub use carrier_account::{CarrierAccountCreate, CarrierAccountFilter, CarrierAccountUpdate};
pub use customs::{CustomsDeclarationCreate, CustomsItemCreate};
pub use manifest::ManifestCreate;
pub use parcel::Parcel;
pub use pickup::{PickupCreate, PickupLocation};
pub use refund::RefundCreate;
pub use shipment::{CashOnDelivery, Insurance, ShipmentCreate, ShipmentExtras};
pub use tracking::TrackingCreate;
pub use transaction::{TransactionFilter, TransactionFromRate, TransactionOneCall};
pub use webhook::{WebhookCreate, WebhookUpdate};

/// Reference to an API object: either a server-assigned object id or an
/// inline payload to be created alongside the parent.
///
/// Serializes exactly as the caller supplied it - an id stays a bare
/// string, an inline payload stays an object. The upstream API accepts
/// both forms wherever this type appears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectRef<T> {
    Id(String),
    Inline(T),
}

impl<T> ObjectRef<T> {
    pub fn id(id: impl Into<String>) -> Self {
        ObjectRef::Id(id.into())
    }
}
