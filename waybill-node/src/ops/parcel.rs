//! Parcel operation handlers.

use serde_json::Value;

use super::pagination;
use crate::dispatch::ParcelOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::build_parcel;

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: ParcelOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        ParcelOp::Create => {
            let mut fields = params.object_param("additionalFields", index);
            for key in ["length", "width", "height", "weight"] {
                let value = params.required_number(key, index)?;
                fields.insert(key.to_string(), Value::Number(value));
            }
            for key in ["distanceUnit", "massUnit"] {
                let value = params.required_string(key, index)?;
                fields.insert(key.to_string(), Value::String(value));
            }

            let parcel = build_parcel(&fields);
            Ok(OperationOutput::Single(
                client.create_parcel(&parcel).await?,
            ))
        }
        ParcelOp::Get => {
            let parcel_id = params.required_string("parcelId", index)?;
            Ok(OperationOutput::Single(client.get_parcel(&parcel_id).await?))
        }
        ParcelOp::GetAll => Ok(OperationOutput::Many(
            client.list_parcels(pagination(params, index)).await?,
        )),
    }
}
