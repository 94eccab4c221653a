//! Transaction (label purchase) operations.

use serde_json::Value;
use waybill_core::types::{TransactionFilter, TransactionFromRate, TransactionOneCall};
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    /// Purchase a label from an existing rate.
    pub async fn create_transaction(
        &self,
        transaction: &TransactionFromRate,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            "/transactions",
            RequestBody::object(transaction)?,
        ))
        .await
    }

    /// One-call purchase: create the shipment and buy the label in a
    /// single request.
    pub async fn create_transaction_one_call(
        &self,
        transaction: &TransactionOneCall,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            "/transactions",
            RequestBody::object(transaction)?,
        ))
        .await
    }

    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/transactions/{transaction_id}")))
            .await
    }

    pub async fn list_transactions(
        &self,
        filter: &TransactionFilter,
        pagination: Pagination,
    ) -> Result<Vec<Value>, ClientError> {
        let mut spec = RequestSpec::get("/transactions");
        if let Some(object_status) = &filter.object_status {
            spec = spec.with_query("object_status", object_status);
        }
        if let Some(tracking_status) = &filter.tracking_status {
            spec = spec.with_query("tracking_status", tracking_status);
        }
        self.request_paged(spec, pagination).await
    }
}
