//! Shipment operations.

use serde_json::Value;
use waybill_core::types::ShipmentCreate;
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    /// Create a shipment; the upstream API starts rate generation for it
    /// immediately.
    pub async fn create_shipment(&self, shipment: &ShipmentCreate) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            "/shipments",
            RequestBody::object(shipment)?,
        ))
        .await
    }

    pub async fn get_shipment(&self, shipment_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/shipments/{shipment_id}")))
            .await
    }

    pub async fn list_shipments(&self, pagination: Pagination) -> Result<Vec<Value>, ClientError> {
        self.request_paged(RequestSpec::get("/shipments"), pagination)
            .await
    }
}
