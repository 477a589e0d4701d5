//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Fields
// =============================================================================

/// Characters allowed in a login
pub const LOGIN_PATTERN: &str = r"^[_.@A-Za-z0-9-]+$";

// =============================================================================
// Paging
// =============================================================================

/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: u64 = 100;

// =============================================================================
// Runtime Profiles
// =============================================================================

/// Profile that enables development-only components
pub const PROFILE_DEV: &str = "dev";

/// Profile assumed when none is configured
pub const PROFILE_DEFAULT: &str = "default";
