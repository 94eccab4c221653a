//! Tracking operations.

use serde_json::Value;
use waybill_core::types::TrackingCreate;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    /// Register a tracking number for webhook push updates.
    pub async fn register_tracking(&self, tracking: &TrackingCreate) -> Result<Value, ClientError> {
        self.request(RequestSpec::post("/tracks", RequestBody::object(tracking)?))
            .await
    }

    /// Current tracking status for a carrier / tracking-number pair.
    pub async fn get_tracking(
        &self,
        carrier: &str,
        tracking_number: &str,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/tracks/{carrier}/{tracking_number}")))
            .await
    }
}
