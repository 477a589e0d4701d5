//! Runtime profiles.
//!
//! A deployment activates one or more named profiles (e.g. `dev`). Components
//! that only make sense in some environments check the active set before
//! they are built.

use std::fmt;
use std::str::FromStr;

use domain::PROFILE_DEFAULT;

/// Environment variable holding a comma-separated list of active profiles.
pub const ACTIVE_PROFILES_ENV: &str = "ACTIVE_PROFILES";

/// The set of active runtime profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profiles {
    active: Vec<String>,
}

impl Profiles {
    /// Parse a comma-separated list. Entries are trimmed, blanks dropped and
    /// duplicates collapsed; an empty list falls back to `default`.
    pub fn parse(raw: &str) -> Self {
        let mut active: Vec<String> = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !active.iter().any(|p| p == name) {
                active.push(name.to_string());
            }
        }

        if active.is_empty() {
            active.push(PROFILE_DEFAULT.to_string());
        }

        Self { active }
    }

    /// Load from `ACTIVE_PROFILES`.
    pub fn from_env() -> Self {
        Self::parse(&std::env::var(ACTIVE_PROFILES_ENV).unwrap_or_default())
    }

    /// Whether `name` is active. Comparison is exact and case-sensitive.
    pub fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|p| p == name)
    }

    /// Whether a component restricted to `names` should be built.
    pub fn accepts(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.is_active(name))
    }

    /// Active profile names in declaration order.
    pub fn active(&self) -> &[String] {
        &self.active
    }
}

impl Default for Profiles {
    fn default() -> Self {
        Self::parse("")
    }
}

impl FromStr for Profiles {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Profiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.active.join(","))
    }
}
