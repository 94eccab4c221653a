//! Waybill Client - Shippo REST client.
//!
//! One authenticated HTTP call at a time: [`ShippoClient::request`]
//! executes a single [`RequestSpec`], `request_paged` walks a listing
//! endpoint to completion, and the `resources` modules layer typed
//! per-resource operations on top. Responses are returned as opaque JSON
//! for the caller to shape.

pub mod config;
pub mod error;
pub mod pagination;
pub mod resources;
pub mod transport;

pub use config::{ShippoConfig, SHIPPO_API_BASE_URL};
pub use error::ClientError;
pub use transport::{RequestBody, RequestSpec, ShippoClient, AUTH_SCHEME};
