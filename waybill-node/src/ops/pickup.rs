//! Pickup operation handlers.

use crate::dispatch::PickupOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::{Address, ObjectRef, PickupCreate, PickupLocation};

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: PickupOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        PickupOp::Create => {
            let address = if params.string_param("addressType", index).as_deref() == Some("id") {
                ObjectRef::Id(params.required_string("addressId", index)?)
            } else {
                ObjectRef::Inline(Address {
                    name: params.string_param("locationName", index),
                    street1: Some(params.required_string("locationStreet1", index)?),
                    city: Some(params.required_string("locationCity", index)?),
                    state: Some(params.required_string("locationState", index)?),
                    zip: Some(params.required_string("locationZip", index)?),
                    country: Some(params.required_string("locationCountry", index)?),
                    phone: Some(params.required_string("locationPhone", index)?),
                    ..Address::default()
                })
            };

            let additional = params.object_param("additionalFields", index);
            let location = PickupLocation {
                building_location_type: params.required_string("buildingLocationType", index)?,
                building_type: fields::string_field(&additional, "buildingType"),
                address,
                instructions: fields::string_field(&additional, "instructions"),
            };

            let pickup = PickupCreate {
                carrier_account: params.required_string("carrierAccount", index)?,
                location,
                transactions: fields::split_id_list(
                    &params.required_string("transactions", index)?,
                ),
                requested_start_time: params.required_string("requestedStartTime", index)?,
                requested_end_time: params.required_string("requestedEndTime", index)?,
                is_test: fields::bool_field(&additional, "isTest"),
                metadata: fields::string_field(&additional, "metadata"),
            };

            Ok(OperationOutput::Single(
                client.create_pickup(&pickup).await?,
            ))
        }
        PickupOp::Get => {
            let pickup_id = params.required_string("pickupId", index)?;
            Ok(OperationOutput::Single(client.get_pickup(&pickup_id).await?))
        }
    }
}
