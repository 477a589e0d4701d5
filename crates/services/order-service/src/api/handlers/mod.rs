//! Request handlers.

pub mod event_handler;
pub mod health_handler;

pub use event_handler::event_routes;
pub use health_handler::health_routes;
