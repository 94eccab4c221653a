//! Batch operations, including the add/remove/purchase sub-actions.

use serde_json::Value;
use waybill_core::types::BatchCreate;
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_batch(&self, batch: &BatchCreate) -> Result<Value, ClientError> {
        self.request(RequestSpec::post("/batches", RequestBody::object(batch)?))
            .await
    }

    pub async fn get_batch(&self, batch_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/batches/{batch_id}")))
            .await
    }

    pub async fn list_batches(&self, pagination: Pagination) -> Result<Vec<Value>, ClientError> {
        self.request_paged(RequestSpec::get("/batches"), pagination)
            .await
    }

    /// Append shipments to a draft batch. Each element is either a
    /// shipment object or a batch-shipment record; the server validates
    /// per row.
    pub async fn add_batch_shipments(
        &self,
        batch_id: &str,
        shipments: Vec<Value>,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            format!("/batches/{batch_id}/add_shipments"),
            RequestBody::Array(shipments),
        ))
        .await
    }

    /// Remove batch shipments by id from a draft batch.
    pub async fn remove_batch_shipments(
        &self,
        batch_id: &str,
        shipment_ids: Vec<String>,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            format!("/batches/{batch_id}/remove_shipments"),
            RequestBody::Ids(shipment_ids),
        ))
        .await
    }

    /// Purchase every label in the batch.
    pub async fn purchase_batch(&self, batch_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::post_empty(format!("/batches/{batch_id}/purchase")))
            .await
    }
}
