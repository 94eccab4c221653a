//! Refund operations.

use serde_json::Value;
use waybill_core::types::RefundCreate;
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_refund(&self, refund: &RefundCreate) -> Result<Value, ClientError> {
        self.request(RequestSpec::post("/refunds", RequestBody::object(refund)?))
            .await
    }

    pub async fn get_refund(&self, refund_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/refunds/{refund_id}")))
            .await
    }

    /// List refunds. A bounded listing short-circuits to a single
    /// first-page request sized to the limit; `return_all` walks every
    /// page.
    pub async fn list_refunds(&self, pagination: Pagination) -> Result<Vec<Value>, ClientError> {
        if pagination.return_all {
            self.request_paged(RequestSpec::get("/refunds"), pagination)
                .await
        } else {
            self.request_first_page(RequestSpec::get("/refunds"), pagination.limit)
                .await
        }
    }
}
