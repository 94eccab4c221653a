//! Carrier account operation handlers.

use serde_json::Value;

use super::{deleted, parse_json_param, single_page_pagination};
use crate::dispatch::CarrierAccountOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::{CarrierAccountCreate, CarrierAccountFilter, CarrierAccountUpdate};

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: CarrierAccountOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        CarrierAccountOp::Create => {
            let raw_parameters = params.required_string("parameters", index)?;
            let parameters: Value = parse_json_param(&raw_parameters, "carrier parameters")?;
            let options = params.object_param("options", index);

            let account = CarrierAccountCreate {
                carrier: params.required_string("carrier", index)?,
                account_id: params.required_string("accountId", index)?,
                parameters,
                active: fields::bool_field(&options, "active"),
                test: fields::bool_field(&options, "test"),
            };

            Ok(OperationOutput::Single(
                client.create_carrier_account(&account).await?,
            ))
        }
        CarrierAccountOp::Get => {
            let account_id = params.required_string("carrierAccountId", index)?;
            Ok(OperationOutput::Single(
                client.get_carrier_account(&account_id).await?,
            ))
        }
        CarrierAccountOp::GetAll => {
            let filters = params.object_param("filters", index);
            let filter = CarrierAccountFilter {
                carrier: fields::string_field(&filters, "carrier"),
            };
            Ok(OperationOutput::Many(
                client
                    .list_carrier_accounts(&filter, single_page_pagination(params, index))
                    .await?,
            ))
        }
        CarrierAccountOp::Update => {
            let account_id = params.required_string("carrierAccountId", index)?;
            let update_fields = params.object_param("updateFields", index);

            let parameters = match fields::string_field(&update_fields, "parameters") {
                Some(raw) => Some(parse_json_param(&raw, "carrier parameters")?),
                None => None,
            };
            let update = CarrierAccountUpdate {
                account_id: fields::string_field(&update_fields, "accountId"),
                active: fields::bool_field(&update_fields, "active"),
                parameters,
            };

            Ok(OperationOutput::Single(
                client.update_carrier_account(&account_id, &update).await?,
            ))
        }
        CarrierAccountOp::Delete => {
            let account_id = params.required_string("carrierAccountId", index)?;
            client.delete_carrier_account(&account_id).await?;
            Ok(OperationOutput::Single(deleted(account_id)))
        }
    }
}
