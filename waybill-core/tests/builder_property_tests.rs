//! Property-Based Tests for the Payload Builders
//!
//! Properties:
//! - A builder never emits a wire key outside its field table.
//! - A builder never emits a value sourced from an absent field or an
//!   empty string.
//! - Boolean `false` and numeric `0` inputs always survive.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use waybill_core::fields::{build_address, build_extras, build_parcel, FieldMap};

/// Every wire key `build_address` may legally produce.
const ADDRESS_WIRE_KEYS: &[&str] = &[
    "name",
    "company",
    "street1",
    "street2",
    "street3",
    "city",
    "state",
    "zip",
    "country",
    "phone",
    "email",
    "is_residential",
    "validate",
    "metadata",
];

const PARCEL_WIRE_KEYS: &[&str] = &[
    "length",
    "width",
    "height",
    "distance_unit",
    "weight",
    "mass_unit",
    "template",
    "metadata",
];

const EXTRAS_WIRE_KEYS: &[&str] = &[
    "signature_confirmation",
    "insurance",
    "reference_1",
    "reference_2",
    "saturday_delivery",
    "bypass_address_validation",
    "is_return",
    "cod",
];

fn arb_field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        "[a-zA-Z0-9 ]{1,12}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        (-1000.0f64..1000.0).prop_map(Value::from),
    ]
}

/// A random field map over a fixed key universe, mixing known and unknown
/// keys with values of every JSON scalar type.
fn arb_field_map(keys: &'static [&'static str]) -> impl Strategy<Value = FieldMap> {
    proptest::collection::vec(
        (proptest::sample::select(keys), arb_field_value()),
        0..keys.len(),
    )
    .prop_map(|pairs| {
        let mut map = Map::new();
        for (key, value) in pairs {
            map.insert(key.to_string(), value);
        }
        map
    })
}

const ADDRESS_INPUT_KEYS: &[&str] = &[
    "name",
    "company",
    "street1",
    "street2",
    "street3",
    "city",
    "state",
    "zip",
    "country",
    "phone",
    "email",
    "isResidential",
    "validate",
    "metadata",
    "bogusField",
    "objectId",
];

const PARCEL_INPUT_KEYS: &[&str] = &[
    "length",
    "width",
    "height",
    "distanceUnit",
    "weight",
    "massUnit",
    "template",
    "metadata",
    "bogusField",
];

const EXTRAS_INPUT_KEYS: &[&str] = &[
    "signatureConfirmation",
    "reference1",
    "reference2",
    "saturdayDelivery",
    "bypassAddressValidation",
    "isReturn",
    "bogusField",
];

fn wire_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("builder output must be an object, got {other}"),
    }
}

proptest! {
    #[test]
    fn address_output_stays_inside_its_table(input in arb_field_map(ADDRESS_INPUT_KEYS)) {
        let wire = wire_object(serde_json::to_value(build_address(&input)).unwrap());
        for key in wire.keys() {
            prop_assert!(ADDRESS_WIRE_KEYS.contains(&key.as_str()), "unexpected key {key}");
        }
    }

    #[test]
    fn address_never_emits_blank_or_null_values(input in arb_field_map(ADDRESS_INPUT_KEYS)) {
        let wire = wire_object(serde_json::to_value(build_address(&input)).unwrap());
        for (key, value) in &wire {
            prop_assert!(!value.is_null(), "null value under {key}");
            if let Value::String(s) = value {
                prop_assert!(!s.is_empty(), "empty string under {key}");
            }
        }
    }

    #[test]
    fn parcel_output_stays_inside_its_table(input in arb_field_map(PARCEL_INPUT_KEYS)) {
        let wire = wire_object(serde_json::to_value(build_parcel(&input)).unwrap());
        for key in wire.keys() {
            prop_assert!(PARCEL_WIRE_KEYS.contains(&key.as_str()), "unexpected key {key}");
        }
    }

    #[test]
    fn parcel_zero_dimensions_survive(width in proptest::bool::ANY) {
        // Zero is a defined value, not an absent one.
        let mut input = Map::new();
        input.insert("length".to_string(), json!(0));
        if width {
            input.insert("width".to_string(), json!(0.0));
        }

        let wire = wire_object(serde_json::to_value(build_parcel(&input)).unwrap());
        prop_assert_eq!(wire.get("length"), Some(&json!(0)));
        if width {
            prop_assert!(wire.contains_key("width"));
        }
    }

    #[test]
    fn extras_output_stays_inside_its_table(input in arb_field_map(EXTRAS_INPUT_KEYS)) {
        let wire = wire_object(serde_json::to_value(build_extras(&input)).unwrap());
        for key in wire.keys() {
            prop_assert!(EXTRAS_WIRE_KEYS.contains(&key.as_str()), "unexpected key {key}");
        }
    }

    #[test]
    fn extras_false_flags_survive(
        saturday in proptest::bool::ANY,
        bypass in proptest::bool::ANY,
        is_return in proptest::bool::ANY,
    ) {
        let mut input = Map::new();
        input.insert("saturdayDelivery".to_string(), json!(saturday));
        input.insert("bypassAddressValidation".to_string(), json!(bypass));
        input.insert("isReturn".to_string(), json!(is_return));

        let wire = wire_object(serde_json::to_value(build_extras(&input)).unwrap());
        prop_assert_eq!(wire.get("saturday_delivery"), Some(&json!(saturday)));
        prop_assert_eq!(wire.get("bypass_address_validation"), Some(&json!(bypass)));
        prop_assert_eq!(wire.get("is_return"), Some(&json!(is_return)));
    }
}
