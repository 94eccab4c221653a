//! Customs declaration and customs item operations.

use serde_json::Value;
use waybill_core::types::{CustomsDeclarationCreate, CustomsItemCreate};

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_customs_declaration(
        &self,
        declaration: &CustomsDeclarationCreate,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            "/customs/declarations",
            RequestBody::object(declaration)?,
        ))
        .await
    }

    pub async fn get_customs_declaration(
        &self,
        declaration_id: &str,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!(
            "/customs/declarations/{declaration_id}"
        )))
        .await
    }

    pub async fn create_customs_item(
        &self,
        item: &CustomsItemCreate,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            "/customs/items",
            RequestBody::object(item)?,
        ))
        .await
    }

    pub async fn get_customs_item(&self, item_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/customs/items/{item_id}")))
            .await
    }
}
