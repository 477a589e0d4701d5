//! Order event publishing.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use common::{AppError, AppResult, ValidatedJson};
use domain::OrderEvent;

use crate::api::state::AppState;

/// Queue acknowledgement for a published event.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    pub order_id: String,
    pub message_id: Option<String>,
}

/// Create order event routes.
pub fn event_routes() -> Router<AppState> {
    Router::new().route("/events", post(publish_event))
}

/// Publish an order event to the queue
#[utoipa::path(
    post,
    path = "/orders/events",
    tag = "Orders",
    request_body = OrderEvent,
    responses(
        (status = 202, description = "Event accepted by the queue", body = PublishResponse),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Queue rejected the event"),
        (status = 503, description = "No queue for the active profiles")
    )
)]
pub async fn publish_event(
    State(state): State<AppState>,
    ValidatedJson(event): ValidatedJson<OrderEvent>,
) -> AppResult<(StatusCode, Json<PublishResponse>)> {
    let publisher = state.queues.publisher().ok_or(AppError::QueueDisabled)?;
    let receipt = publisher.publish(&event).await?;

    info!(order_id = %event.order_id, kind = ?event.kind, "Order event published");

    Ok((
        StatusCode::ACCEPTED,
        Json(PublishResponse {
            order_id: event.order_id,
            message_id: receipt.message_id,
        }),
    ))
}
