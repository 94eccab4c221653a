//! Batch operation handlers.

use serde_json::Value;

use super::{pagination, parse_json_param};
use crate::dispatch::BatchOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::BatchCreate;

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: BatchOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        BatchOp::Create => {
            let raw_shipments = params.required_string("batchShipments", index)?;
            let batch_shipments: Vec<Value> = parse_json_param(&raw_shipments, "batch shipments")?;
            let additional = params.object_param("additionalFields", index);

            let batch = BatchCreate {
                default_carrier_account: params.required_string("defaultCarrierAccount", index)?,
                default_servicelevel_token: params
                    .required_string("defaultServicelevelToken", index)?,
                batch_shipments,
                label_filetype: fields::string_field(&additional, "labelFiletype"),
                metadata: fields::string_field(&additional, "metadata"),
            };

            Ok(OperationOutput::Single(client.create_batch(&batch).await?))
        }
        BatchOp::Get => {
            let batch_id = params.required_string("batchId", index)?;
            Ok(OperationOutput::Single(client.get_batch(&batch_id).await?))
        }
        BatchOp::GetAll => Ok(OperationOutput::Many(
            client.list_batches(pagination(params, index)).await?,
        )),
        BatchOp::AddShipments => {
            let batch_id = params.required_string("batchId", index)?;
            let raw_shipments = params.required_string("shipments", index)?;
            let shipments: Vec<Value> = parse_json_param(&raw_shipments, "shipments")?;
            Ok(OperationOutput::Single(
                client.add_batch_shipments(&batch_id, shipments).await?,
            ))
        }
        BatchOp::RemoveShipments => {
            let batch_id = params.required_string("batchId", index)?;
            let shipment_ids =
                fields::split_id_list(&params.required_string("shipmentIds", index)?);
            Ok(OperationOutput::Single(
                client.remove_batch_shipments(&batch_id, shipment_ids).await?,
            ))
        }
        BatchOp::Purchase => {
            let batch_id = params.required_string("batchId", index)?;
            Ok(OperationOutput::Single(
                client.purchase_batch(&batch_id).await?,
            ))
        }
    }
}
