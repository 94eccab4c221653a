//! Tracking operation handlers.

use crate::dispatch::TrackingOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::TrackingCreate;

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: TrackingOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    let carrier = params.required_string("carrier", index)?;
    let tracking_number = params.required_string("trackingNumber", index)?;

    match op {
        TrackingOp::Create => {
            let additional = params.object_param("additionalFields", index);
            let tracking = TrackingCreate {
                carrier,
                tracking_number,
                metadata: fields::string_field(&additional, "metadata"),
            };
            Ok(OperationOutput::Single(
                client.register_tracking(&tracking).await?,
            ))
        }
        TrackingOp::Get => Ok(OperationOutput::Single(
            client.get_tracking(&carrier, &tracking_number).await?,
        )),
    }
}
