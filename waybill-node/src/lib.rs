//! Waybill Node - workflow-host adapter for the Shippo API.
//!
//! The host supplies credentials, input items, parameter resolution, and
//! the continue-on-failure policy; this crate supplies the rest: a closed
//! (resource, operation) dispatch table, a sequential per-item executor,
//! and the webhook trigger lifecycle with its inbound receiver.

pub mod dispatch;
pub mod error;
pub mod host;
mod ops;
pub mod run;
pub mod trigger;

pub use dispatch::{Command, Resource};
pub use error::NodeError;
pub use host::{MemoryStore, NodeStore, ParameterResolver, RunOptions, StaticParameters};
pub use run::{execute_command, run_items, OperationOutput};
pub use trigger::{receiver_router, TriggerSettings, WEBHOOK_ID_KEY};
