//! Per-resource operation handlers.
//!
//! Each module turns resolved host parameters into one client call (or
//! one paginated walk) for its resource. The helpers here cover the
//! parameter shapes several resources share.

use serde_json::Value;

use crate::error::NodeError;
use crate::host::ParameterResolver;
use waybill_core::types::{Address, Parcel};
use waybill_core::Pagination;

pub(crate) mod address;
pub(crate) mod batch;
pub(crate) mod carrier_account;
pub(crate) mod customs;
pub(crate) mod manifest;
pub(crate) mod parcel;
pub(crate) mod pickup;
pub(crate) mod rate;
pub(crate) mod refund;
pub(crate) mod shipment;
pub(crate) mod tracking;
pub(crate) mod transaction;
pub(crate) mod webhook;

/// Default listing limit when the host form does not set one.
const DEFAULT_LIST_LIMIT: u32 = 25;

/// Pagination for listings that always walk pages: `limit` doubles as
/// the page size even when everything is requested.
pub(crate) fn pagination(params: &dyn ParameterResolver, index: usize) -> Pagination {
    Pagination {
        return_all: params.bool_param("returnAll", index).unwrap_or(false),
        limit: limit_param(params, index),
    }
}

/// Pagination for listings that short-circuit to a single request when
/// bounded; the limit field is only consulted in that case.
pub(crate) fn single_page_pagination(params: &dyn ParameterResolver, index: usize) -> Pagination {
    if params.bool_param("returnAll", index).unwrap_or(false) {
        Pagination::all()
    } else {
        Pagination::limited(limit_param(params, index))
    }
}

fn limit_param(params: &dyn ParameterResolver, index: usize) -> u32 {
    params
        .number_param("limit", index)
        .and_then(|n| n.as_u64())
        .unwrap_or(u64::from(DEFAULT_LIST_LIMIT)) as u32
}

/// Assemble an address from individually named form fields sharing a
/// prefix (`from` -> `fromStreet1`, `ocTo` -> `ocToStreet1`, ...). The
/// name is optional, everything else is required.
pub(crate) fn prefixed_address(
    params: &dyn ParameterResolver,
    index: usize,
    prefix: &str,
) -> Result<Address, NodeError> {
    Ok(Address {
        name: params.string_param(&format!("{prefix}Name"), index),
        street1: Some(params.required_string(&format!("{prefix}Street1"), index)?),
        city: Some(params.required_string(&format!("{prefix}City"), index)?),
        state: Some(params.required_string(&format!("{prefix}State"), index)?),
        zip: Some(params.required_string(&format!("{prefix}Zip"), index)?),
        country: Some(params.required_string(&format!("{prefix}Country"), index)?),
        ..Address::default()
    })
}

/// Assemble a parcel from prefixed form fields (`parcelLength`,
/// `ocLength`, ...). All six dimensional fields are required.
pub(crate) fn prefixed_parcel(
    params: &dyn ParameterResolver,
    index: usize,
    prefix: &str,
) -> Result<Parcel, NodeError> {
    Ok(Parcel {
        length: Some(params.required_number(&format!("{prefix}Length"), index)?),
        width: Some(params.required_number(&format!("{prefix}Width"), index)?),
        height: Some(params.required_number(&format!("{prefix}Height"), index)?),
        distance_unit: Some(params.required_string(&format!("{prefix}DistanceUnit"), index)?),
        weight: Some(params.required_number(&format!("{prefix}Weight"), index)?),
        mass_unit: Some(params.required_string(&format!("{prefix}MassUnit"), index)?),
        ..Parcel::default()
    })
}

/// Parse a free-form JSON parameter, failing locally before any network
/// call when the text is not valid JSON.
pub(crate) fn parse_json_param<T: serde::de::DeserializeOwned>(
    raw: &str,
    description: &str,
) -> Result<T, NodeError> {
    serde_json::from_str(raw)
        .map_err(|_| NodeError::InvalidInput(format!("Invalid JSON format for {description}")))
}

/// Confirmation object for delete operations, which have no response
/// body worth forwarding.
pub(crate) fn deleted(id: String) -> Value {
    serde_json::json!({"success": true, "deleted": id})
}
