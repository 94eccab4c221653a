//! Address operations.

use serde_json::Value;
use waybill_core::types::Address;
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_address(&self, address: &Address) -> Result<Value, ClientError> {
        self.request(RequestSpec::post("/addresses", RequestBody::object(address)?))
            .await
    }

    pub async fn get_address(&self, address_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/addresses/{address_id}")))
            .await
    }

    pub async fn list_addresses(&self, pagination: Pagination) -> Result<Vec<Value>, ClientError> {
        self.request_paged(RequestSpec::get("/addresses"), pagination)
            .await
    }

    /// Run upstream validation on an existing address.
    pub async fn validate_address(&self, address_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/addresses/{address_id}/validate")))
            .await
    }
}
