//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::event_handler::PublishResponse;
use crate::api::handlers::health_handler::{HealthResponse, QueueHealth};
use domain::{OrderEvent, OrderEventKind};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_handler::health_check,
        crate::api::handlers::event_handler::publish_event,
    ),
    components(schemas(OrderEvent, OrderEventKind, PublishResponse, HealthResponse, QueueHealth)),
    tags(
        (name = "Orders", description = "Order events"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
