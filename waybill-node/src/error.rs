//! Node-level error types.

use waybill_client::ClientError;

/// Errors raised at the adapter boundary.
///
/// Dispatch and parameter failures happen before any network call;
/// `Client` wraps everything the transport layer reports.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
    #[error("Unknown operation \"{operation}\" for resource \"{resource}\"")]
    UnknownOperation { resource: String, operation: String },
    #[error("Required parameter \"{name}\" is missing for item {index}")]
    MissingParameter { name: String, index: usize },
    /// Malformed caller input, e.g. an invalid free-form JSON field.
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}
