//! Customs operation handlers.

use crate::dispatch::CustomsOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::{CustomsDeclarationCreate, CustomsItemCreate};

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: CustomsOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        CustomsOp::CreateDeclaration => {
            let additional = params.object_param("declarationAdditionalFields", index);
            let items = fields::split_id_list(&params.required_string("customsItems", index)?);

            let declaration = CustomsDeclarationCreate {
                contents_type: params.required_string("contentsType", index)?,
                contents_explanation: fields::string_field(&additional, "contentsExplanation"),
                non_delivery_option: params.required_string("nonDeliveryOption", index)?,
                certify: params.required_bool("certify", index)?,
                certify_signer: params.required_string("certifySigner", index)?,
                items,
                exporter_reference: fields::string_field(&additional, "exporterReference"),
                importer_reference: fields::string_field(&additional, "importerReference"),
                invoice: fields::string_field(&additional, "invoice"),
                license: fields::string_field(&additional, "license"),
                certificate: fields::string_field(&additional, "certificate"),
                notes: fields::string_field(&additional, "notes"),
                eel_pfc: fields::string_field(&additional, "eelPfc"),
                aes_itn: fields::string_field(&additional, "aesItn"),
                incoterm: fields::string_field(&additional, "incoterm"),
                b13a_filing_option: fields::string_field(&additional, "b13aFilingOption"),
                b13a_number: fields::string_field(&additional, "b13aNumber"),
                metadata: fields::string_field(&additional, "metadata"),
            };

            Ok(OperationOutput::Single(
                client.create_customs_declaration(&declaration).await?,
            ))
        }
        CustomsOp::GetDeclaration => {
            let declaration_id = params.required_string("declarationId", index)?;
            Ok(OperationOutput::Single(
                client.get_customs_declaration(&declaration_id).await?,
            ))
        }
        CustomsOp::CreateItem => {
            let additional = params.object_param("itemAdditionalFields", index);

            let item = CustomsItemCreate {
                description: params.required_string("itemDescription", index)?,
                quantity: params.required_number("quantity", index)?,
                net_weight: params.required_number("netWeight", index)?,
                mass_unit: params.required_string("itemMassUnit", index)?,
                // The upstream schema wants the monetary value as a string.
                value_amount: params.required_number("valueAmount", index)?.to_string(),
                value_currency: params.required_string("valueCurrency", index)?,
                origin_country: params.required_string("originCountry", index)?,
                tariff_number: fields::string_field(&additional, "tariffNumber"),
                sku_code: fields::string_field(&additional, "skuCode"),
                eccn_ear99: fields::string_field(&additional, "eccnEar99"),
                metadata: fields::string_field(&additional, "metadata"),
            };

            Ok(OperationOutput::Single(
                client.create_customs_item(&item).await?,
            ))
        }
        CustomsOp::GetItem => {
            let item_id = params.required_string("itemId", index)?;
            Ok(OperationOutput::Single(
                client.get_customs_item(&item_id).await?,
            ))
        }
    }
}
