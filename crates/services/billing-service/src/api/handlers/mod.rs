//! Request handlers.

pub mod health_handler;
pub mod search_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use search_handler::search_routes;
pub use user_handler::user_routes;
