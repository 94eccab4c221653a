//! Customs declaration and customs item payload types.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Request body for `POST /customs/declarations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomsDeclarationCreate {
    /// One of `DOCUMENTS`, `GIFT`, `SAMPLE`, `MERCHANDISE`,
    /// `HUMANITARIAN_DONATION`, `RETURN_MERCHANDISE`, `OTHER`.
    pub contents_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents_explanation: Option<String>,
    /// `RETURN` or `ABANDON`.
    pub non_delivery_option: String,
    pub certify: bool,
    pub certify_signer: String,
    /// Customs item object ids.
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// EEL or PFC exemption code for US exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eel_pfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aes_itn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoterm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b13a_filing_option: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b13a_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// Request body for `POST /customs/items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomsItemCreate {
    pub description: String,
    pub quantity: Number,
    pub net_weight: Number,
    pub mass_unit: String,
    /// Monetary value per item, serialized as a string per the upstream
    /// schema.
    pub value_amount: String,
    pub value_currency: String,
    pub origin_country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccn_ear99: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}
