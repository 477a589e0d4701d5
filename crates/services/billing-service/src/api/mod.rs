//! HTTP layer - the `users` REST resource.

pub mod handlers;
pub mod hal;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
