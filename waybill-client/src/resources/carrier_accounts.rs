//! Carrier account operations.

use serde_json::Value;
use waybill_core::types::{CarrierAccountCreate, CarrierAccountFilter, CarrierAccountUpdate};
use waybill_core::Pagination;

use crate::error::ClientError;
use crate::transport::{RequestBody, RequestSpec, ShippoClient};

impl ShippoClient {
    pub async fn create_carrier_account(
        &self,
        account: &CarrierAccountCreate,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::post(
            "/carrier_accounts",
            RequestBody::object(account)?,
        ))
        .await
    }

    pub async fn get_carrier_account(&self, account_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::get(format!("/carrier_accounts/{account_id}")))
            .await
    }

    /// List carrier accounts, optionally filtered by carrier token. A
    /// bounded listing short-circuits to a single first-page request.
    pub async fn list_carrier_accounts(
        &self,
        filter: &CarrierAccountFilter,
        pagination: Pagination,
    ) -> Result<Vec<Value>, ClientError> {
        let mut spec = RequestSpec::get("/carrier_accounts");
        if let Some(carrier) = &filter.carrier {
            spec = spec.with_query("carrier", carrier);
        }
        if pagination.return_all {
            self.request_paged(spec, pagination).await
        } else {
            self.request_first_page(spec, pagination.limit).await
        }
    }

    pub async fn update_carrier_account(
        &self,
        account_id: &str,
        update: &CarrierAccountUpdate,
    ) -> Result<Value, ClientError> {
        self.request(RequestSpec::put(
            format!("/carrier_accounts/{account_id}"),
            RequestBody::object(update)?,
        ))
        .await
    }

    pub async fn delete_carrier_account(&self, account_id: &str) -> Result<Value, ClientError> {
        self.request(RequestSpec::delete(format!("/carrier_accounts/{account_id}")))
            .await
    }
}
