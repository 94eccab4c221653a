//! Rate operation handlers.

use crate::dispatch::RateOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: RateOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        RateOp::GetForShipment => {
            let shipment_id = params.required_string("shipmentId", index)?;
            let options = params.object_param("options", index);
            let currency = fields::string_field(&options, "currencyCode");
            Ok(OperationOutput::Single(
                client
                    .shipment_rates(&shipment_id, currency.as_deref())
                    .await?,
            ))
        }
    }
}
