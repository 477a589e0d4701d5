//! Health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub profiles: Vec<String>,
    pub queue: QueueHealth,
}

/// Whether an SQS client exists for the active profiles.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueHealth {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_url: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Report active profiles and queue availability.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let publisher = state.queues.publisher();

    Json(HealthResponse {
        status: "healthy".to_string(),
        profiles: state.profiles.active().to_vec(),
        queue: QueueHealth {
            enabled: publisher.is_some(),
            queue_url: publisher.map(|p| p.queue_url().to_string()),
        },
    })
}
