//! Address operation handlers.

use serde_json::Value;

use super::pagination;
use crate::dispatch::AddressOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::build_address;

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: AddressOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        AddressOp::Create => {
            let mut fields = params.object_param("additionalFields", index);
            if let Some(name) = params.string_param("name", index) {
                fields.insert("name".to_string(), Value::String(name));
            }
            for key in ["street1", "city", "state", "zip", "country"] {
                let value = params.required_string(key, index)?;
                fields.insert(key.to_string(), Value::String(value));
            }

            let address = build_address(&fields);
            Ok(OperationOutput::Single(
                client.create_address(&address).await?,
            ))
        }
        AddressOp::Get => {
            let address_id = params.required_string("addressId", index)?;
            Ok(OperationOutput::Single(
                client.get_address(&address_id).await?,
            ))
        }
        AddressOp::GetAll => Ok(OperationOutput::Many(
            client.list_addresses(pagination(params, index)).await?,
        )),
        AddressOp::Validate => {
            let address_id = params.required_string("addressId", index)?;
            Ok(OperationOutput::Single(
                client.validate_address(&address_id).await?,
            ))
        }
    }
}
