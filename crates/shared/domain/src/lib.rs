//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the billing and order services.

pub mod constants;
pub mod error;
pub mod order;
pub mod user;

pub use constants::*;
pub use error::{first_validation_message, DomainError, DomainResult};
pub use order::{OrderEvent, OrderEventKind};
pub use user::{NewUser, User, UserPatch};
