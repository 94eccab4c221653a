//! Webhook trigger lifecycle and inbound receiver.
//!
//! The host drives a three-step lifecycle around its webhook endpoint:
//! check whether a matching subscription already exists, register one on
//! activation, deregister on deactivation. The host's registration
//! protocol expects boolean outcomes, so lifecycle failures are logged
//! and reported as `false` instead of raised.
//!
//! Inbound events pass through the receiver untouched - no schema
//! validation, no reshaping.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::sync::mpsc;

use crate::host::NodeStore;
use waybill_client::{RequestSpec, ShippoClient};
use waybill_core::types::WebhookCreate;
use waybill_core::PageEnvelope;

/// Store key under which the registered webhook id lives.
pub const WEBHOOK_ID_KEY: &str = "webhookId";

/// What the host wants the subscription to look like.
#[derive(Debug, Clone)]
pub struct TriggerSettings {
    /// Public URL of the host's webhook endpoint.
    pub webhook_url: String,
    /// Event kind to subscribe to, e.g. `track_updated`.
    pub event: String,
    /// Receive test-mode events only.
    pub is_test: Option<bool>,
}

/// Check whether a subscription matching the settings already exists
/// upstream. On a match its id is stored for later deactivation.
pub async fn check_exists(
    client: &ShippoClient,
    store: &mut dyn NodeStore,
    settings: &TriggerSettings,
) -> bool {
    let response = match client.request(RequestSpec::get("/webhooks")).await {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "Webhook existence check failed");
            return false;
        }
    };
    let envelope: PageEnvelope = match serde_json::from_value(response) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(error = %err, "Unexpected webhook listing shape");
            return false;
        }
    };

    for webhook in &envelope.results {
        if webhook["url"] == settings.webhook_url.as_str()
            && webhook["event"] == settings.event.as_str()
        {
            if let Some(id) = webhook["object_id"].as_str() {
                store.set(WEBHOOK_ID_KEY, id.to_string());
            }
            return true;
        }
    }
    false
}

/// Register the subscription upstream and remember its id.
pub async fn activate(
    client: &ShippoClient,
    store: &mut dyn NodeStore,
    settings: &TriggerSettings,
) -> bool {
    let webhook = WebhookCreate {
        url: settings.webhook_url.clone(),
        event: settings.event.clone(),
        is_test: settings.is_test,
    };

    match client.create_webhook(&webhook).await {
        Ok(response) => {
            if let Some(id) = response["object_id"].as_str() {
                store.set(WEBHOOK_ID_KEY, id.to_string());
            }
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to create Shippo webhook");
            false
        }
    }
}

/// Delete the remembered subscription. Vacuously succeeds when nothing
/// was registered.
pub async fn deactivate(client: &ShippoClient, store: &mut dyn NodeStore) -> bool {
    let Some(webhook_id) = store.get(WEBHOOK_ID_KEY) else {
        return true;
    };

    match client.delete_webhook(&webhook_id).await {
        Ok(_) => {
            store.remove(WEBHOOK_ID_KEY);
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to delete Shippo webhook");
            false
        }
    }
}

/// Router exposing the inbound webhook endpoint. Every received payload
/// is forwarded unchanged to the host's output channel.
pub fn receiver_router(events: mpsc::Sender<Value>) -> Router {
    Router::new()
        .route("/webhook", post(receive_event))
        .with_state(events)
}

async fn receive_event(
    State(events): State<mpsc::Sender<Value>>,
    Json(payload): Json<Value>,
) -> StatusCode {
    if events.send(payload).await.is_err() {
        tracing::warn!("Webhook event dropped: output channel closed");
        return StatusCode::SERVICE_UNAVAILABLE;
    }
    StatusCode::OK
}
