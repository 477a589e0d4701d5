//! User domain entity and related types.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::LOGIN_PATTERN;

pub(crate) static LOGIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOGIN_PATTERN).expect("login pattern is a valid regex"));

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub login: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub activated: bool,
    pub lang_key: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User creation data transfer object.
///
/// Also used for full replacement, where every omitted optional field is
/// cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Unique login, matched exactly
    #[validate(
        length(min = 1, max = 50, message = "Login must be between 1 and 50 characters"),
        regex(path = *LOGIN_REGEX, message = "Login may only contain letters, digits and _ . @ -")
    )]
    pub login: String,
    /// Unique email address, matched ignoring case
    #[validate(
        email(message = "Email must be a valid address"),
        length(min = 5, max = 254, message = "Email must be between 5 and 254 characters")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    pub last_name: Option<String>,
    #[serde(default)]
    pub activated: bool,
    #[serde(default)]
    #[validate(length(min = 2, max = 10, message = "Language key must be between 2 and 10 characters"))]
    pub lang_key: Option<String>,
    #[serde(default)]
    #[validate(length(max = 256, message = "Image URL must be at most 256 characters"))]
    pub image_url: Option<String>,
}

impl NewUser {
    /// Minimal user with only the two lookup keys set.
    pub fn new(login: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            activated: false,
            lang_key: None,
            image_url: None,
        }
    }
}

/// Partial user update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[validate(
        length(min = 1, max = 50, message = "Login must be between 1 and 50 characters"),
        regex(path = *LOGIN_REGEX, message = "Login may only contain letters, digits and _ . @ -")
    )]
    pub login: Option<String>,
    #[validate(
        email(message = "Email must be a valid address"),
        length(min = 5, max = 254, message = "Email must be between 5 and 254 characters")
    )]
    pub email: Option<String>,
    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    pub last_name: Option<String>,
    pub activated: Option<bool>,
    #[validate(length(min = 2, max = 10, message = "Language key must be between 2 and 10 characters"))]
    pub lang_key: Option<String>,
    #[validate(length(max = 256, message = "Image URL must be at most 256 characters"))]
    pub image_url: Option<String>,
}

impl UserPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == UserPatch::default()
    }
}
