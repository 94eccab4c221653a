//! Shipment operation handlers.

use serde_json::{Map, Value};

use super::{pagination, prefixed_address, prefixed_parcel};
use crate::dispatch::ShipmentOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields::{self, FieldMap};
use waybill_core::types::{ObjectRef, ShipmentCreate};
use waybill_core::build_extras;

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: ShipmentOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        ShipmentOp::Create => {
            let shipment = build_shipment(params, index)?;
            Ok(OperationOutput::Single(
                client.create_shipment(&shipment).await?,
            ))
        }
        ShipmentOp::Get => {
            let shipment_id = params.required_string("shipmentId", index)?;
            Ok(OperationOutput::Single(
                client.get_shipment(&shipment_id).await?,
            ))
        }
        ShipmentOp::GetAll => Ok(OperationOutput::Many(
            client.list_shipments(pagination(params, index)).await?,
        )),
    }
}

fn build_shipment(
    params: &dyn ParameterResolver,
    index: usize,
) -> Result<ShipmentCreate, NodeError> {
    let address_from = if params.string_param("addressFromType", index).as_deref() == Some("id") {
        ObjectRef::Id(params.required_string("addressFromId", index)?)
    } else {
        ObjectRef::Inline(prefixed_address(params, index, "from")?)
    };

    let address_to = if params.string_param("addressToType", index).as_deref() == Some("id") {
        ObjectRef::Id(params.required_string("addressToId", index)?)
    } else {
        ObjectRef::Inline(prefixed_address(params, index, "to")?)
    };

    let parcels = if params.string_param("parcelType", index).as_deref() == Some("id") {
        vec![ObjectRef::Id(params.required_string("parcelId", index)?)]
    } else {
        vec![ObjectRef::Inline(prefixed_parcel(params, index, "parcel")?)]
    };

    let additional = params.object_param("additionalFields", index);
    let extras = build_extras(&extras_fields(&params.object_param("extras", index)));

    Ok(ShipmentCreate {
        address_from,
        address_to,
        parcels,
        address_return: fields::string_field(&additional, "addressReturn").map(ObjectRef::Id),
        customs_declaration: fields::string_field(&additional, "customsDeclaration")
            .map(ObjectRef::Id),
        carrier_accounts: fields::string_field(&additional, "carrierAccounts")
            .map(|raw| fields::split_id_list(&raw)),
        extra: (!extras.is_empty()).then_some(extras),
        metadata: fields::string_field(&additional, "metadata"),
        is_async: fields::bool_field(&additional, "async"),
    })
}

/// Reshape the flat extras collection into the nested form the builder
/// expects. The form's insurance amount defaults to 0, which means "no
/// insurance", so zero never creates an insurance object.
fn extras_fields(extras: &FieldMap) -> FieldMap {
    let mut mapped = Map::new();

    for key in ["signatureConfirmation", "reference1", "reference2"] {
        if let Some(value) = fields::string_field(extras, key) {
            mapped.insert(key.to_string(), Value::String(value));
        }
    }
    for key in ["saturdayDelivery", "bypassAddressValidation", "isReturn"] {
        if let Some(value) = fields::bool_field(extras, key) {
            mapped.insert(key.to_string(), Value::Bool(value));
        }
    }

    let insurance_amount = fields::number_field(extras, "insuranceAmount")
        .filter(|amount| amount.as_f64() != Some(0.0));
    if let Some(amount) = insurance_amount {
        let mut insurance = Map::new();
        insurance.insert("amount".to_string(), Value::Number(amount));
        if let Some(currency) = fields::string_field(extras, "insuranceCurrency") {
            insurance.insert("currency".to_string(), Value::String(currency));
        }
        mapped.insert("insurance".to_string(), Value::Object(insurance));
    }

    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticParameters;
    use serde_json::json;

    fn resolver(item: Value) -> StaticParameters {
        match item {
            Value::Object(map) => StaticParameters::new(vec![map]),
            _ => unreachable!(),
        }
    }

    #[test]
    fn inline_addresses_and_parcel_serialize_as_objects() {
        let params = resolver(json!({
            "addressFromType": "fields",
            "fromName": "Warehouse",
            "fromStreet1": "1 Dock Rd",
            "fromCity": "Oakland",
            "fromState": "CA",
            "fromZip": "94607",
            "fromCountry": "US",
            "addressToType": "id",
            "addressToId": "adr_9",
            "parcelType": "fields",
            "parcelLength": 10,
            "parcelWidth": 8,
            "parcelHeight": 6,
            "parcelDistanceUnit": "in",
            "parcelWeight": 2.5,
            "parcelMassUnit": "lb",
        }));

        let shipment = build_shipment(&params, 0).unwrap();
        let wire = serde_json::to_value(&shipment).unwrap();

        assert_eq!(wire["address_from"]["street1"], "1 Dock Rd");
        assert_eq!(wire["address_to"], "adr_9");
        assert_eq!(wire["parcels"][0]["distance_unit"], "in");
        assert!(wire.get("extra").is_none());
    }

    #[test]
    fn carrier_accounts_split_and_async_flag_survives() {
        let params = resolver(json!({
            "addressFromType": "id",
            "addressFromId": "adr_1",
            "addressToType": "id",
            "addressToId": "adr_2",
            "parcelType": "id",
            "parcelId": "prc_1",
            "additionalFields": {
                "carrierAccounts": "ca_1, ca_2",
                "async": false,
            },
        }));

        let wire = serde_json::to_value(build_shipment(&params, 0).unwrap()).unwrap();
        assert_eq!(wire["carrier_accounts"], json!(["ca_1", "ca_2"]));
        assert_eq!(wire["async"], json!(false));
    }

    #[test]
    fn zero_insurance_amount_means_no_insurance() {
        let params = resolver(json!({
            "addressFromType": "id",
            "addressFromId": "adr_1",
            "addressToType": "id",
            "addressToId": "adr_2",
            "parcelType": "id",
            "parcelId": "prc_1",
            "extras": {"insuranceAmount": 0, "insuranceCurrency": "USD"},
        }));

        let wire = serde_json::to_value(build_shipment(&params, 0).unwrap()).unwrap();
        assert!(wire.get("extra").is_none());
    }

    #[test]
    fn insurance_amount_defaults_currency() {
        let params = resolver(json!({
            "addressFromType": "id",
            "addressFromId": "adr_1",
            "addressToType": "id",
            "addressToId": "adr_2",
            "parcelType": "id",
            "parcelId": "prc_1",
            "extras": {"insuranceAmount": 75},
        }));

        let wire = serde_json::to_value(build_shipment(&params, 0).unwrap()).unwrap();
        assert_eq!(
            wire["extra"]["insurance"],
            json!({"amount": 75, "currency": "USD"})
        );
    }
}
