//! Parcel operations.

use serde_json::Value;
use waybill_core::types::Parcel;
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_parcel(&self, parcel: &Parcel) -> Result<Value, ClientError> {
        self.request(RequestSpec::post("/parcels", RequestBody::object(parcel)?))
            .await
    }

    pub async fn get_parcel(&self, parcel_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/parcels/{parcel_id}")))
            .await
    }

    pub async fn list_parcels(&self, pagination: Pagination) -> Result<Vec<Value>, ClientError> {
        self.request_paged(RequestSpec::get("/parcels"), pagination)
            .await
    }
}
