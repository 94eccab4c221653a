//! Manifest operation handlers.

use super::pagination;
use crate::dispatch::ManifestOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::{Address, ManifestCreate, ObjectRef};

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: ManifestOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        ManifestOp::Create => {
            let address_from =
                if params.string_param("addressFromType", index).as_deref() == Some("id") {
                    ObjectRef::Id(params.required_string("addressFromId", index)?)
                } else {
                    ObjectRef::Inline(Address {
                        street1: Some(params.required_string("fromStreet1", index)?),
                        city: Some(params.required_string("fromCity", index)?),
                        state: Some(params.required_string("fromState", index)?),
                        zip: Some(params.required_string("fromZip", index)?),
                        country: Some(params.required_string("fromCountry", index)?),
                        ..Address::default()
                    })
                };

            let additional = params.object_param("additionalFields", index);
            let manifest = ManifestCreate {
                carrier_account: params.required_string("carrierAccount", index)?,
                shipment_date: params.required_string("shipmentDate", index)?,
                address_from,
                transactions: fields::string_field(&additional, "transactions")
                    .map(|raw| fields::split_id_list(&raw)),
                is_async: fields::bool_field(&additional, "async"),
            };

            Ok(OperationOutput::Single(
                client.create_manifest(&manifest).await?,
            ))
        }
        ManifestOp::Get => {
            let manifest_id = params.required_string("manifestId", index)?;
            Ok(OperationOutput::Single(
                client.get_manifest(&manifest_id).await?,
            ))
        }
        ManifestOp::GetAll => Ok(OperationOutput::Many(
            client.list_manifests(pagination(params, index)).await?,
        )),
    }
}
