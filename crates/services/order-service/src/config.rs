//! Order service configuration.

use common::{Profiles, QueueConfig};

/// Order service configuration.
///
/// Host and port come from the command line (`--host`, `--port`, or
/// `ORDER_SERVICE_HOST` / `ORDER_SERVICE_PORT`).
#[derive(Debug, Clone, Default)]
pub struct OrderServiceConfig {
    /// Active runtime profiles
    pub profiles: Profiles,
    /// SQS region and target queue
    pub queue: QueueConfig,
}

impl OrderServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            profiles: Profiles::from_env(),
            queue: QueueConfig::from_env("ORDER_SERVICE"),
        }
    }
}
