//! HTTP layer - order events and health.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
