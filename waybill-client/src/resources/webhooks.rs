//! Webhook subscription operations.

use serde_json::Value;
use waybill_core::types::{WebhookCreate, WebhookUpdate};
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_webhook(&self, webhook: &WebhookCreate) -> Result<Value, ClientError> {
        self.request(RequestSpec::post("/webhooks", RequestBody::object(webhook)?))
            .await
    }

    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/webhooks/{webhook_id}")))
            .await
    }

    /// List webhook subscriptions. A bounded listing short-circuits to a
    /// single first-page request.
    pub async fn list_webhooks(&self, pagination: Pagination) -> Result<Vec<Value>, ClientError> {
        if pagination.return_all {
            self.request_paged(RequestSpec::get("/webhooks"), pagination)
                .await
        } else {
            self.request_first_page(RequestSpec::get("/webhooks"), pagination.limit)
                .await
        }
    }

    pub async fn update_webhook(
        &self,
        webhook_id: &str,
        update: &WebhookUpdate,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::put(
            format!("/webhooks/{webhook_id}"),
            RequestBody::object(update)?,
        ))
        .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::delete(format!("/webhooks/{webhook_id}")))
            .await
    }
}
