//! (resource, operation) dispatch table.
//!
//! The host names resources and operations with strings; parsing them
//! into the closed enums here happens exactly once per batch, before any
//! network traffic. Unknown combinations fail fast with a descriptive
//! error.

use crate::error::NodeError;

/// Every resource the adapter exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Address,
    Parcel,
    Shipment,
    Rate,
    Transaction,
    Tracking,
    Customs,
    Batch,
    Manifest,
    Pickup,
    Refund,
    CarrierAccount,
    Webhook,
}

impl Resource {
    /// Parse the host-facing resource token.
    pub fn parse(resource: &str) -> Option<Self> {
        Some(match resource {
            "address" => Resource::Address,
            "parcel" => Resource::Parcel,
            "shipment" => Resource::Shipment,
            "rate" => Resource::Rate,
            "transaction" => Resource::Transaction,
            "tracking" => Resource::Tracking,
            "customs" => Resource::Customs,
            "batch" => Resource::Batch,
            "manifest" => Resource::Manifest,
            "pickup" => Resource::Pickup,
            "refund" => Resource::Refund,
            "carrierAccount" => Resource::CarrierAccount,
            "webhook" => Resource::Webhook,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressOp {
    Create,
    Get,
    GetAll,
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParcelOp {
    Create,
    Get,
    GetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentOp {
    Create,
    Get,
    GetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateOp {
    GetForShipment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOp {
    Create,
    Get,
    GetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingOp {
    Create,
    Get,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomsOp {
    CreateDeclaration,
    GetDeclaration,
    CreateItem,
    GetItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOp {
    Create,
    Get,
    GetAll,
    AddShipments,
    RemoveShipments,
    Purchase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestOp {
    Create,
    Get,
    GetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOp {
    Create,
    Get,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundOp {
    Create,
    Get,
    GetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierAccountOp {
    Create,
    Get,
    GetAll,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOp {
    Create,
    Get,
    GetAll,
    Update,
    Delete,
}

/// A fully resolved operation, ready to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Address(AddressOp),
    Parcel(ParcelOp),
    Shipment(ShipmentOp),
    Rate(RateOp),
    Transaction(TransactionOp),
    Tracking(TrackingOp),
    Customs(CustomsOp),
    Batch(BatchOp),
    Manifest(ManifestOp),
    Pickup(PickupOp),
    Refund(RefundOp),
    CarrierAccount(CarrierAccountOp),
    Webhook(WebhookOp),
}

impl Command {
    /// Resolve a (resource, operation) pair or fail with the first
    /// unknown name. Nothing here touches the network.
    pub fn parse(resource: &str, operation: &str) -> Result<Self, NodeError> {
        let parsed = Resource::parse(resource)
            .ok_or_else(|| NodeError::UnknownResource(resource.to_string()))?;

        let unknown_operation = || NodeError::UnknownOperation {
            resource: resource.to_string(),
            operation: operation.to_string(),
        };

        Ok(match parsed {
            Resource::Address => Command::Address(match operation {
                "create" => AddressOp::Create,
                "get" => AddressOp::Get,
                "getAll" => AddressOp::GetAll,
                "validate" => AddressOp::Validate,
                _ => return Err(unknown_operation()),
            }),
            Resource::Parcel => Command::Parcel(match operation {
                "create" => ParcelOp::Create,
                "get" => ParcelOp::Get,
                "getAll" => ParcelOp::GetAll,
                _ => return Err(unknown_operation()),
            }),
            Resource::Shipment => Command::Shipment(match operation {
                "create" => ShipmentOp::Create,
                "get" => ShipmentOp::Get,
                "getAll" => ShipmentOp::GetAll,
                _ => return Err(unknown_operation()),
            }),
            Resource::Rate => Command::Rate(match operation {
                "getForShipment" => RateOp::GetForShipment,
                _ => return Err(unknown_operation()),
            }),
            Resource::Transaction => Command::Transaction(match operation {
                "create" => TransactionOp::Create,
                "get" => TransactionOp::Get,
                "getAll" => TransactionOp::GetAll,
                _ => return Err(unknown_operation()),
            }),
            Resource::Tracking => Command::Tracking(match operation {
                "create" => TrackingOp::Create,
                "get" => TrackingOp::Get,
                _ => return Err(unknown_operation()),
            }),
            Resource::Customs => Command::Customs(match operation {
                "createDeclaration" => CustomsOp::CreateDeclaration,
                "getDeclaration" => CustomsOp::GetDeclaration,
                "createItem" => CustomsOp::CreateItem,
                "getItem" => CustomsOp::GetItem,
                _ => return Err(unknown_operation()),
            }),
            Resource::Batch => Command::Batch(match operation {
                "create" => BatchOp::Create,
                "get" => BatchOp::Get,
                "getAll" => BatchOp::GetAll,
                "addShipments" => BatchOp::AddShipments,
                "removeShipments" => BatchOp::RemoveShipments,
                "purchase" => BatchOp::Purchase,
                _ => return Err(unknown_operation()),
            }),
            Resource::Manifest => Command::Manifest(match operation {
                "create" => ManifestOp::Create,
                "get" => ManifestOp::Get,
                "getAll" => ManifestOp::GetAll,
                _ => return Err(unknown_operation()),
            }),
            Resource::Pickup => Command::Pickup(match operation {
                "create" => PickupOp::Create,
                "get" => PickupOp::Get,
                _ => return Err(unknown_operation()),
            }),
            Resource::Refund => Command::Refund(match operation {
                "create" => RefundOp::Create,
                "get" => RefundOp::Get,
                "getAll" => RefundOp::GetAll,
                _ => return Err(unknown_operation()),
            }),
            Resource::CarrierAccount => Command::CarrierAccount(match operation {
                "create" => CarrierAccountOp::Create,
                "get" => CarrierAccountOp::Get,
                "getAll" => CarrierAccountOp::GetAll,
                "update" => CarrierAccountOp::Update,
                "delete" => CarrierAccountOp::Delete,
                _ => return Err(unknown_operation()),
            }),
            Resource::Webhook => Command::Webhook(match operation {
                "create" => WebhookOp::Create,
                "get" => WebhookOp::Get,
                "getAll" => WebhookOp::GetAll,
                "update" => WebhookOp::Update,
                "delete" => WebhookOp::Delete,
                _ => return Err(unknown_operation()),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_resource_token() {
        for (token, resource) in [
            ("address", Resource::Address),
            ("parcel", Resource::Parcel),
            ("shipment", Resource::Shipment),
            ("rate", Resource::Rate),
            ("transaction", Resource::Transaction),
            ("tracking", Resource::Tracking),
            ("customs", Resource::Customs),
            ("batch", Resource::Batch),
            ("manifest", Resource::Manifest),
            ("pickup", Resource::Pickup),
            ("refund", Resource::Refund),
            ("carrierAccount", Resource::CarrierAccount),
            ("webhook", Resource::Webhook),
        ] {
            assert_eq!(Resource::parse(token), Some(resource));
        }
    }

    #[test]
    fn unknown_resource_fails_fast() {
        let err = Command::parse("warehouse", "create").unwrap_err();
        assert!(err.to_string().contains("warehouse"));
    }

    #[test]
    fn unknown_operation_names_both_parts() {
        let err = Command::parse("address", "purchase").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("address"));
        assert!(message.contains("purchase"));
    }

    #[test]
    fn batch_sub_actions_resolve() {
        assert_eq!(
            Command::parse("batch", "addShipments").unwrap(),
            Command::Batch(BatchOp::AddShipments)
        );
        assert_eq!(
            Command::parse("batch", "purchase").unwrap(),
            Command::Batch(BatchOp::Purchase)
        );
    }
}
