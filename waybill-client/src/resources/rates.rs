//! Rate operations.

use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{RequestSpec, ShippoClient};

impl ShippoClient {
    /// Rates generated for a shipment, optionally converted to the given
    /// ISO currency code.
    pub async fn shipment_rates(
        &self,
        shipment_id: &str,
        currency: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut spec = RequestSpec::get(format!("/shipments/{shipment_id}/rates"));
        if let Some(currency) = currency {
            spec = spec.with_query("currency", currency);
        }
        self.request(spec).await
    }
}
