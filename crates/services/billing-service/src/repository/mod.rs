//! Repository layer for data access.

pub mod entities;
mod page;
mod user_repository;

pub use page::{Page, PageRequest};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
