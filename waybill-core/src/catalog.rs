//! Static option catalogs.
//!
//! These are the fixed pick-lists a workflow host renders for the user:
//! display name plus the token the upstream API expects. Centralizing
//! them keeps the wire tokens out of UI code.

/// A display-name / wire-value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub value: &'static str,
}

const fn entry(name: &'static str, value: &'static str) -> CatalogEntry {
    CatalogEntry { name, value }
}

pub const DISTANCE_UNITS: &[CatalogEntry] = &[
    entry("Inches", "in"),
    entry("Centimeters", "cm"),
    entry("Feet", "ft"),
    entry("Millimeters", "mm"),
    entry("Meters", "m"),
    entry("Yards", "yd"),
];

pub const MASS_UNITS: &[CatalogEntry] = &[
    entry("Grams", "g"),
    entry("Ounces", "oz"),
    entry("Pounds", "lb"),
    entry("Kilograms", "kg"),
];

pub const LABEL_FILE_TYPES: &[CatalogEntry] = &[
    entry("PDF", "PDF"),
    entry("PDF 4x6", "PDF_4x6"),
    entry("PNG", "PNG"),
    entry("ZPL II", "ZPLII"),
];

pub const CONTENTS_TYPES: &[CatalogEntry] = &[
    entry("Documents", "DOCUMENTS"),
    entry("Gift", "GIFT"),
    entry("Sample", "SAMPLE"),
    entry("Merchandise", "MERCHANDISE"),
    entry("Humanitarian Donation", "HUMANITARIAN_DONATION"),
    entry("Return Merchandise", "RETURN_MERCHANDISE"),
    entry("Other", "OTHER"),
];

pub const NON_DELIVERY_OPTIONS: &[CatalogEntry] =
    &[entry("Return", "RETURN"), entry("Abandon", "ABANDON")];

pub const SIGNATURE_TYPES: &[CatalogEntry] = &[
    entry("Standard", "STANDARD"),
    entry("Adult", "ADULT"),
    entry("Certified", "CERTIFIED"),
    entry("Indirect", "INDIRECT"),
    entry("Carrier Confirmation", "CARRIER_CONFIRMATION"),
];

pub const WEBHOOK_EVENTS: &[CatalogEntry] = &[
    entry("Track Updated", "track_updated"),
    entry("Transaction Created", "transaction_created"),
    entry("Transaction Updated", "transaction_updated"),
    entry("Batch Created", "batch_created"),
    entry("Batch Purchased", "batch_purchased"),
];

pub const BUILDING_LOCATION_TYPES: &[CatalogEntry] = &[
    entry("Front Door", "Front Door"),
    entry("Back Door", "Back Door"),
    entry("Side Door", "Side Door"),
    entry("Knock on Door", "Knock on Door"),
    entry("Ring Bell", "Ring Bell"),
    entry("Mail Room", "Mail Room"),
    entry("Office", "Office"),
    entry("Reception", "Reception"),
    entry("In/At Mailbox", "In/At Mailbox"),
    entry("Other", "Other"),
];

pub const INCOTERMS: &[CatalogEntry] = &[
    entry("DDP (Delivered Duty Paid)", "DDP"),
    entry("DDU (Delivered Duty Unpaid)", "DDU"),
    entry("FCA (Free Carrier)", "FCA"),
    entry("DAP (Delivered At Place)", "DAP"),
];

pub const COMMON_CARRIERS: &[CatalogEntry] = &[
    entry("USPS", "usps"),
    entry("UPS", "ups"),
    entry("FedEx", "fedex"),
    entry("DHL Express", "dhl_express"),
    entry("DHL eCommerce", "dhl_ecommerce"),
    entry("Canada Post", "canada_post"),
    entry("Australia Post", "australia_post"),
    entry("Royal Mail", "royal_mail"),
    entry("Deutsche Post", "deutsche_post"),
    entry("Purolator", "purolator"),
    entry("OnTrac", "ontrac"),
    entry("LaserShip", "lasership"),
    entry("Sendle", "sendle"),
    entry("Aramex", "aramex"),
];

/// Parcel presets, grouped by the carrier that defines them.
pub const PARCEL_TEMPLATES: &[(&str, &[CatalogEntry])] = &[
    (
        "USPS",
        &[
            entry("USPS Small Flat Rate Box", "USPS_SmallFlatRateBox"),
            entry("USPS Medium Flat Rate Box", "USPS_MediumFlatRateBox"),
            entry("USPS Large Flat Rate Box", "USPS_LargeFlatRateBox"),
            entry("USPS Flat Rate Envelope", "USPS_FlatRateEnvelope"),
            entry("USPS Legal Flat Rate Envelope", "USPS_LegalFlatRateEnvelope"),
            entry("USPS Padded Flat Rate Envelope", "USPS_PaddedFlatRateEnvelope"),
        ],
    ),
    (
        "UPS",
        &[
            entry("UPS Express Box Small", "UPS_Express_Box_Small"),
            entry("UPS Express Box Medium", "UPS_Express_Box_Medium"),
            entry("UPS Express Box Large", "UPS_Express_Box_Large"),
            entry("UPS Pak", "UPS_Pak"),
            entry("UPS Tube", "UPS_Tube"),
        ],
    ),
    (
        "FedEx",
        &[
            entry("FedEx Envelope", "FedEx_Envelope"),
            entry("FedEx Pak", "FedEx_Pak"),
            entry("FedEx Small Box", "FedEx_Small_Box"),
            entry("FedEx Medium Box", "FedEx_Medium_Box"),
            entry("FedEx Large Box", "FedEx_Large_Box"),
            entry("FedEx Extra Large Box", "FedEx_Extra_Large_Box"),
            entry("FedEx Tube", "FedEx_Tube"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_events_cover_the_supported_kinds() {
        let values: Vec<&str> = WEBHOOK_EVENTS.iter().map(|e| e.value).collect();
        assert_eq!(
            values,
            vec![
                "track_updated",
                "transaction_created",
                "transaction_updated",
                "batch_created",
                "batch_purchased",
            ]
        );
    }

    #[test]
    fn catalog_values_are_unique_within_each_list() {
        for list in [
            DISTANCE_UNITS,
            MASS_UNITS,
            LABEL_FILE_TYPES,
            CONTENTS_TYPES,
            SIGNATURE_TYPES,
            WEBHOOK_EVENTS,
            COMMON_CARRIERS,
        ] {
            let mut values: Vec<&str> = list.iter().map(|e| e.value).collect();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), list.len());
        }
    }
}
