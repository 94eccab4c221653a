//! Standalone webhook listener.
//!
//! Binds the inbound receiver and prints each event payload to stdout as
//! one JSON line, for hosts that consume trigger output over a pipe.
//! Configuration comes from the environment: `WAYBILL_WEBHOOK_ADDR` for
//! the bind address (default `0.0.0.0:8484`), `RUST_LOG` for verbosity.

use serde_json::Value;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use waybill_node::receiver_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr = std::env::var("WAYBILL_WEBHOOK_ADDR").unwrap_or_else(|_| "0.0.0.0:8484".to_string());

    let (events_tx, mut events_rx) = mpsc::channel::<Value>(256);
    tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            println!("{event}");
        }
    });

    let app = receiver_router(events_tx);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Starting webhook listener");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
