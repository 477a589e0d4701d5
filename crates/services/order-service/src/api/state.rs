//! Application state for dependency injection.

use common::Profiles;

use crate::queue::QueueBeans;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub queues: QueueBeans,
    pub profiles: Profiles,
}

impl AppState {
    pub fn new(queues: QueueBeans, profiles: Profiles) -> Self {
        Self { queues, profiles }
    }
}
