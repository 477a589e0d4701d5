//! Common utilities shared across all microservices.
//!
//! This crate provides:
//! - Unified error handling for HTTP
//! - Configuration structures
//! - Runtime profile selection
//! - Extractors that reject with the JSON error body

pub mod config;
pub mod error;
pub mod extract;
pub mod profile;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use extract::{ApiPath, ApiQuery, ValidatedJson};
pub use profile::{Profiles, ACTIVE_PROFILES_ENV};
