//! Billing service configuration.

use std::env;

use common::DatabaseConfig;

/// Billing service configuration.
///
/// Host and port come from the command line (`--host`, `--port`, or
/// `BILLING_SERVICE_HOST` / `BILLING_SERVICE_PORT`).
#[derive(Debug, Clone, Default)]
pub struct BillingServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl BillingServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("BILLING_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("BILLING_SERVICE_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("BILLING_SERVICE_DB_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}
