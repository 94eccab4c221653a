//! Sequential batch executor.
//!
//! Items run strictly in order, one at a time; the only suspension points
//! are the client's HTTP awaits. Failure isolation follows the host
//! policy: with continue-on-failure a failing item leaves an error record
//! in its place, otherwise the first failure aborts the batch.

use serde_json::{json, Value};

use crate::dispatch::Command;
use crate::error::NodeError;
use crate::host::{ParameterResolver, RunOptions};
use crate::ops;
use waybill_client::ShippoClient;

/// What one operation produced: a single object, or a listing to be
/// flattened into the output stream.
#[derive(Debug, Clone)]
pub enum OperationOutput {
    Single(Value),
    Many(Vec<Value>),
}

/// Execute one already-parsed command for input item `index`.
pub async fn execute_command(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    command: &Command,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match command {
        Command::Address(op) => ops::address::run(client, params, *op, index).await,
        Command::Parcel(op) => ops::parcel::run(client, params, *op, index).await,
        Command::Shipment(op) => ops::shipment::run(client, params, *op, index).await,
        Command::Rate(op) => ops::rate::run(client, params, *op, index).await,
        Command::Transaction(op) => ops::transaction::run(client, params, *op, index).await,
        Command::Tracking(op) => ops::tracking::run(client, params, *op, index).await,
        Command::Customs(op) => ops::customs::run(client, params, *op, index).await,
        Command::Batch(op) => ops::batch::run(client, params, *op, index).await,
        Command::Manifest(op) => ops::manifest::run(client, params, *op, index).await,
        Command::Pickup(op) => ops::pickup::run(client, params, *op, index).await,
        Command::Refund(op) => ops::refund::run(client, params, *op, index).await,
        Command::CarrierAccount(op) => ops::carrier_account::run(client, params, *op, index).await,
        Command::Webhook(op) => ops::webhook::run(client, params, *op, index).await,
    }
}

/// Run a (resource, operation) pair over `item_count` input items.
///
/// The command parses once, before any network call - an unknown
/// resource or operation never reaches the wire. Listing outputs flatten
/// into one entry per element, preserving order across items.
pub async fn run_items(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    resource: &str,
    operation: &str,
    item_count: usize,
    options: RunOptions,
) -> Result<Vec<Value>, NodeError> {
    let command = Command::parse(resource, operation)?;
    let mut output = Vec::new();

    for index in 0..item_count {
        match execute_command(client, params, &command, index).await {
            Ok(OperationOutput::Single(value)) => output.push(value),
            Ok(OperationOutput::Many(values)) => output.extend(values),
            Err(err) if options.continue_on_fail => {
                tracing::warn!(item = index, error = %err, "Item failed, continuing batch");
                output.push(json!({"error": err.to_string()}));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(output)
}
