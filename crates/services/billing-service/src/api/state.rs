//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, database: Database) -> Self {
        Self {
            user_service,
            database,
        }
    }

    /// Wire the SeaORM store and user service on top of `database`.
    pub fn from_database(database: Database) -> Self {
        let user_repo = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(user_repo));
        Self::new(user_service, database)
    }
}
