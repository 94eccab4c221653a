//! Loosely-typed field-map builders.
//!
//! Workflow hosts hand the adapter flat maps of form values keyed by
//! camel-case field names. The builders here translate those maps into
//! the typed wire payloads, applying the presence rules:
//!
//! - a field is carried only when it is present and non-null;
//! - string fields are additionally dropped when empty (`""` means "the
//!   form input was left blank");
//! - booleans and numbers are presence-checked, never truthiness-checked,
//!   so `false` and `0` survive.
//!
//! Accessors are type-directed: a value of the wrong JSON type is treated
//! as unset rather than coerced.

use serde_json::{Map, Number, Value};

use crate::types::{Address, CashOnDelivery, Insurance, Parcel, ShipmentExtras};

/// Flat map of camel-case field name to caller-supplied JSON value.
pub type FieldMap = Map<String, Value>;

/// Default currency for insurance and cash-on-delivery amounts.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default cash-on-delivery payment method.
pub const DEFAULT_COD_PAYMENT_METHOD: &str = "ANY";

/// Read a string field; blank and non-string values count as unset.
pub fn string_field(fields: &FieldMap, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Read a boolean field. `false` is a present value.
pub fn bool_field(fields: &FieldMap, key: &str) -> Option<bool> {
    match fields.get(key) {
        Some(Value::Bool(b)) => Some(*b),
        _ => None,
    }
}

/// Read a numeric field, preserving the exact JSON number representation.
pub fn number_field(fields: &FieldMap, key: &str) -> Option<Number> {
    match fields.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

/// Read a nested object field (host "collection" inputs).
pub fn object_field<'a>(fields: &'a FieldMap, key: &str) -> Option<&'a FieldMap> {
    match fields.get(key) {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Split a comma-separated id list, trimming whitespace around each id.
pub fn split_id_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Build an [`Address`] from form fields.
///
/// Recognized keys: `name`, `company`, `street1`, `street2`, `street3`,
/// `city`, `state`, `zip`, `country`, `phone`, `email`, `isResidential`,
/// `validate`, `metadata`. Anything else is ignored.
pub fn build_address(fields: &FieldMap) -> Address {
    Address {
        name: string_field(fields, "name"),
        company: string_field(fields, "company"),
        street1: string_field(fields, "street1"),
        street2: string_field(fields, "street2"),
        street3: string_field(fields, "street3"),
        city: string_field(fields, "city"),
        state: string_field(fields, "state"),
        zip: string_field(fields, "zip"),
        country: string_field(fields, "country"),
        phone: string_field(fields, "phone"),
        email: string_field(fields, "email"),
        is_residential: bool_field(fields, "isResidential"),
        validate: bool_field(fields, "validate"),
        metadata: string_field(fields, "metadata"),
    }
}

/// Build a [`Parcel`] from form fields.
///
/// Recognized keys: `length`, `width`, `height`, `distanceUnit`,
/// `weight`, `massUnit`, `template`, `metadata`.
pub fn build_parcel(fields: &FieldMap) -> Parcel {
    Parcel {
        length: number_field(fields, "length"),
        width: number_field(fields, "width"),
        height: number_field(fields, "height"),
        distance_unit: string_field(fields, "distanceUnit"),
        weight: number_field(fields, "weight"),
        mass_unit: string_field(fields, "massUnit"),
        template: string_field(fields, "template"),
        metadata: string_field(fields, "metadata"),
    }
}

/// Build [`ShipmentExtras`] from form fields.
///
/// `insurance` and `cod` are nested objects; their currencies default to
/// `USD` and the COD payment method defaults to `ANY` when absent.
/// An input with nothing set yields an extras value that serializes to
/// `{}` (callers usually omit it, see [`ShipmentExtras::is_empty`]).
pub fn build_extras(fields: &FieldMap) -> ShipmentExtras {
    let insurance = object_field(fields, "insurance").map(|ins| Insurance {
        amount: number_field(ins, "amount"),
        currency: string_field(ins, "currency").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        content: string_field(ins, "content"),
    });

    let cod = object_field(fields, "cod").map(|cod| CashOnDelivery {
        amount: number_field(cod, "amount"),
        currency: string_field(cod, "currency").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        payment_method: string_field(cod, "paymentMethod")
            .unwrap_or_else(|| DEFAULT_COD_PAYMENT_METHOD.to_string()),
    });

    ShipmentExtras {
        signature_confirmation: string_field(fields, "signatureConfirmation"),
        insurance,
        reference1: string_field(fields, "reference1"),
        reference2: string_field(fields, "reference2"),
        saturday_delivery: bool_field(fields, "saturdayDelivery"),
        bypass_address_validation: bool_field(fields, "bypassAddressValidation"),
        is_return: bool_field(fields, "isReturn"),
        cod,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn build_complete_address() {
        let input = fields(json!({
            "name": "John Doe",
            "company": "Acme Inc",
            "street1": "123 Main St",
            "street2": "Suite 100",
            "city": "San Francisco",
            "state": "CA",
            "zip": "94105",
            "country": "US",
            "phone": "415-555-1234",
            "email": "john@example.com",
            "isResidential": true,
        }));

        let address = build_address(&input);

        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            json!({
                "name": "John Doe",
                "company": "Acme Inc",
                "street1": "123 Main St",
                "street2": "Suite 100",
                "city": "San Francisco",
                "state": "CA",
                "zip": "94105",
                "country": "US",
                "phone": "415-555-1234",
                "email": "john@example.com",
                "is_residential": true,
            })
        );
    }

    #[test]
    fn address_excludes_blank_and_missing_fields() {
        let input = fields(json!({
            "name": "John Doe",
            "street1": "123 Main St",
            "street2": "",
            "city": "San Francisco",
            "state": "CA",
            "zip": "94105",
            "country": "US",
        }));

        let address = build_address(&input);
        let wire = serde_json::to_value(&address).unwrap();

        assert_eq!(
            wire,
            json!({
                "name": "John Doe",
                "street1": "123 Main St",
                "city": "San Francisco",
                "state": "CA",
                "zip": "94105",
                "country": "US",
            })
        );
        assert!(wire.get("company").is_none());
        assert!(wire.get("street2").is_none());
    }

    #[test]
    fn address_carries_street3_validate_and_metadata() {
        let input = fields(json!({
            "street1": "123 Main St",
            "street2": "Building A",
            "street3": "Floor 3",
            "validate": true,
            "metadata": "Customer ID: 12345",
        }));

        let address = build_address(&input);

        assert_eq!(address.street3.as_deref(), Some("Floor 3"));
        assert_eq!(address.validate, Some(true));
        assert_eq!(address.metadata.as_deref(), Some("Customer ID: 12345"));
    }

    #[test]
    fn address_ignores_unknown_fields() {
        let input = fields(json!({
            "street1": "123 Main St",
            "favoriteColor": "green",
        }));

        let wire = serde_json::to_value(build_address(&input)).unwrap();
        assert_eq!(wire, json!({"street1": "123 Main St"}));
    }

    #[test]
    fn build_complete_parcel() {
        let input = fields(json!({
            "length": 10,
            "width": 8,
            "height": 6,
            "distanceUnit": "in",
            "weight": 2.5,
            "massUnit": "lb",
        }));

        let wire = serde_json::to_value(build_parcel(&input)).unwrap();

        assert_eq!(
            wire,
            json!({
                "length": 10,
                "width": 8,
                "height": 6,
                "distance_unit": "in",
                "weight": 2.5,
                "mass_unit": "lb",
            })
        );
    }

    #[test]
    fn parcel_carries_template_and_metadata() {
        let input = fields(json!({
            "template": "USPS_MediumFlatRateBox",
            "weight": 2,
            "massUnit": "lb",
            "metadata": "order 42",
        }));

        let parcel = build_parcel(&input);
        assert_eq!(parcel.template.as_deref(), Some("USPS_MediumFlatRateBox"));
        assert_eq!(parcel.metadata.as_deref(), Some("order 42"));
        assert!(parcel.length.is_none());
    }

    #[test]
    fn parcel_metric_units() {
        let input = fields(json!({
            "length": 30,
            "width": 20,
            "height": 15,
            "distanceUnit": "cm",
            "weight": 1.2,
            "massUnit": "kg",
        }));

        let parcel = build_parcel(&input);
        assert_eq!(parcel.distance_unit.as_deref(), Some("cm"));
        assert_eq!(parcel.mass_unit.as_deref(), Some("kg"));
    }

    #[test]
    fn extras_empty_input_serializes_to_empty_object() {
        let extras = build_extras(&FieldMap::new());
        assert!(extras.is_empty());
        assert_eq!(serde_json::to_value(&extras).unwrap(), json!({}));
    }

    #[test]
    fn extras_signature_confirmation() {
        let input = fields(json!({"signatureConfirmation": "ADULT"}));
        let extras = build_extras(&input);
        assert_eq!(extras.signature_confirmation.as_deref(), Some("ADULT"));
        assert!(!extras.is_empty());
    }

    #[test]
    fn extras_insurance_defaults_currency_to_usd() {
        let input = fields(json!({
            "insurance": {"amount": 50, "content": "Books"},
        }));

        let wire = serde_json::to_value(build_extras(&input)).unwrap();

        assert_eq!(
            wire,
            json!({
                "insurance": {
                    "amount": 50,
                    "currency": "USD",
                    "content": "Books",
                }
            })
        );
    }

    #[test]
    fn extras_insurance_keeps_explicit_currency() {
        let input = fields(json!({
            "insurance": {"amount": 120, "currency": "EUR"},
        }));

        let extras = build_extras(&input);
        assert_eq!(extras.insurance.unwrap().currency, "EUR");
    }

    #[test]
    fn extras_cod_defaults() {
        let input = fields(json!({"cod": {"amount": 25}}));

        let wire = serde_json::to_value(build_extras(&input)).unwrap();

        assert_eq!(
            wire,
            json!({
                "cod": {
                    "amount": 25,
                    "currency": "USD",
                    "payment_method": "ANY",
                }
            })
        );
    }

    #[test]
    fn extras_references_rename() {
        let input = fields(json!({
            "reference1": "PO-1",
            "reference2": "PO-2",
        }));

        let wire = serde_json::to_value(build_extras(&input)).unwrap();
        assert_eq!(wire, json!({"reference_1": "PO-1", "reference_2": "PO-2"}));
    }

    #[test]
    fn extras_false_booleans_are_preserved() {
        let input = fields(json!({
            "saturdayDelivery": false,
            "bypassAddressValidation": false,
            "isReturn": false,
        }));

        let wire = serde_json::to_value(build_extras(&input)).unwrap();

        assert_eq!(
            wire,
            json!({
                "saturday_delivery": false,
                "bypass_address_validation": false,
                "is_return": false,
            })
        );
    }

    #[test]
    fn split_id_list_trims_whitespace() {
        assert_eq!(
            split_id_list("a1, b2 ,c3"),
            vec!["a1".to_string(), "b2".to_string(), "c3".to_string()]
        );
    }
}
