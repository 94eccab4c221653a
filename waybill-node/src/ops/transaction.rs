//! Transaction operation handlers.

use super::{pagination, prefixed_address, prefixed_parcel};
use crate::dispatch::TransactionOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::{
    ObjectRef, ShipmentCreate, TransactionFilter, TransactionFromRate, TransactionOneCall,
};

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: TransactionOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        TransactionOp::Create => {
            let label_file_type = params.required_string("labelFileType", index)?;
            let additional = params.object_param("additionalFields", index);
            let metadata = fields::string_field(&additional, "metadata");
            let is_async = fields::bool_field(&additional, "async");

            let response =
                if params.string_param("creationMethod", index).as_deref() == Some("fromRate") {
                    let transaction = TransactionFromRate {
                        rate: params.required_string("rateId", index)?,
                        label_file_type: Some(label_file_type),
                        metadata,
                        is_async,
                    };
                    client.create_transaction(&transaction).await?
                } else {
                    // One-call purchase: inline shipment plus an explicit
                    // carrier/service pick, no separate rate step.
                    let shipment = ShipmentCreate {
                        address_from: ObjectRef::Inline(prefixed_address(params, index, "ocFrom")?),
                        address_to: ObjectRef::Inline(prefixed_address(params, index, "ocTo")?),
                        parcels: vec![ObjectRef::Inline(prefixed_parcel(params, index, "oc")?)],
                        address_return: None,
                        customs_declaration: None,
                        carrier_accounts: None,
                        extra: None,
                        metadata: None,
                        is_async: None,
                    };
                    let transaction = TransactionOneCall {
                        shipment,
                        carrier_account: params.required_string("carrierAccount", index)?,
                        servicelevel_token: params.required_string("servicelevelToken", index)?,
                        label_file_type: Some(label_file_type),
                        metadata,
                        is_async,
                    };
                    client.create_transaction_one_call(&transaction).await?
                };

            Ok(OperationOutput::Single(response))
        }
        TransactionOp::Get => {
            let transaction_id = params.required_string("transactionId", index)?;
            Ok(OperationOutput::Single(
                client.get_transaction(&transaction_id).await?,
            ))
        }
        TransactionOp::GetAll => {
            let filters = params.object_param("filters", index);
            let filter = TransactionFilter {
                object_status: fields::string_field(&filters, "objectStatus"),
                tracking_status: fields::string_field(&filters, "trackingStatus"),
            };
            Ok(OperationOutput::Many(
                client
                    .list_transactions(&filter, pagination(params, index))
                    .await?,
            ))
        }
    }
}
