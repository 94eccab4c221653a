//! Typed operations, one module per Shippo resource.
//!
//! Each module attaches methods to [`crate::ShippoClient`] that know the
//! endpoint family and body shape for its resource. Responses stay
//! opaque `serde_json::Value`s - servers own these objects, the client
//! only requests their creation, retrieval, listing, and mutation.

pub mod addresses;
pub mod batches;
pub mod carrier_accounts;
pub mod customs;
pub mod manifests;
pub mod parcels;
pub mod pickups;
pub mod rates;
pub mod refunds;
pub mod shipments;
pub mod tracking;
pub mod transactions;
pub mod webhooks;
