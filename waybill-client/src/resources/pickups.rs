//! Pickup operations.

use serde_json::Value;
use waybill_core::types::PickupCreate;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_pickup(&self, pickup: &PickupCreate) -> Result<Value, ClientError> {
        self.request(RequestSpec::post("/pickups", RequestBody::object(pickup)?))
            .await
    }

    pub async fn get_pickup(&self, pickup_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/pickups/{pickup_id}")))
            .await
    }
}
