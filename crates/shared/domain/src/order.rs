//! Order events published by the order service.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::user::LOGIN_REGEX;

/// What happened to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEventKind {
    Created,
    Paid,
    Cancelled,
}

/// An order lifecycle event, sent to the queue as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    #[validate(length(min = 1, max = 64, message = "Order ID must be between 1 and 64 characters"))]
    pub order_id: String,

    #[validate(
        length(min = 1, max = 50, message = "Login must be between 1 and 50 characters"),
        regex(path = *LOGIN_REGEX, message = "Login may only contain letters, digits and _ . @ -")
    )]
    pub user_login: String,

    #[validate(range(min = 0, message = "Amount cannot be negative"))]
    pub amount_cents: i64,

    pub kind: OrderEventKind,
}
