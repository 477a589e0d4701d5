//! Order Service Library
//!
//! Publishes order events to Amazon SQS. The SQS client is only created when
//! the `dev` profile is active; otherwise the service runs without a queue
//! and refuses to publish.

pub mod api;
pub mod config;
pub mod queue;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::OrderServiceConfig;
use crate::queue::QueueBeans;

/// Run the order service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = OrderServiceConfig::from_env();
    run_server_with_config(host, port, config).await
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(
    host: &str,
    port: u16,
    config: OrderServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(profiles = %config.profiles, "Active profiles");

    let queues = QueueBeans::build(&config.profiles, &config.queue)?;
    let state = AppState::new(queues, config.profiles);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Order service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
