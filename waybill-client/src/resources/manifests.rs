//! Manifest (scan form) operations.

use serde_json::Value;
use waybill_core::types::ManifestCreate;
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_manifest(&self, manifest: &ManifestCreate) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            "/manifests",
            RequestBody::object(manifest)?,
        ))
        .await
    }

    pub async fn get_manifest(&self, manifest_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/manifests/{manifest_id}")))
            .await
    }

    pub async fn list_manifests(&self, pagination: Pagination) -> Result<Vec<Value>, ClientError> {
        self.request_paged(RequestSpec::get("/manifests"), pagination)
            .await
    }
}
