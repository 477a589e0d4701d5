//! User service - Handles user-related business logic.
//!
//! Keeps login and email unique before anything reaches the store, so callers
//! get a precise conflict instead of a constraint violation.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{NewUser, User, UserPatch};

use crate::repository::{Page, PageRequest, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// List one page of users
    async fn list_users(&self, request: PageRequest) -> AppResult<Page<User>>;

    /// Look up a user by exact login
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Look up a user by email ignoring case
    async fn find_by_email_ignore_case(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    /// Replace every field of an existing user
    async fn replace_user(&self, id: i64, user: NewUser) -> AppResult<User>;

    /// Update the fields present in `patch`
    async fn patch_user(&self, id: i64, patch: UserPatch) -> AppResult<User>;

    /// Delete a user
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Reject a login or email already held by another user.
    ///
    /// `owner` is the user being modified, if any; it may keep its own keys.
    async fn ensure_unique(
        &self,
        login: Option<&str>,
        email: Option<&str>,
        owner: Option<i64>,
    ) -> AppResult<()> {
        if let Some(login) = login {
            if let Some(existing) = self.repo.find_one_by_login(login).await? {
                if Some(existing.id) != owner {
                    return Err(AppError::conflict("Login"));
                }
            }
        }

        if let Some(email) = email {
            if let Some(existing) = self.repo.find_one_by_email_ignore_case(email).await? {
                if Some(existing.id) != owner {
                    return Err(AppError::conflict("Email"));
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_users(&self, request: PageRequest) -> AppResult<Page<User>> {
        self.repo.find_page(request).await
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        self.repo.find_one_by_login(login).await
    }

    async fn find_by_email_ignore_case(&self, email: &str) -> AppResult<Option<User>> {
        self.repo.find_one_by_email_ignore_case(email).await
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        user.validate()?;
        self.ensure_unique(Some(&user.login), Some(&user.email), None)
            .await?;

        let created = self.repo.insert(user).await?;
        tracing::info!(id = created.id, login = %created.login, "User created");
        Ok(created)
    }

    async fn replace_user(&self, id: i64, user: NewUser) -> AppResult<User> {
        user.validate()?;
        self.get_user(id).await?;
        self.ensure_unique(Some(&user.login), Some(&user.email), Some(id))
            .await?;

        self.repo.replace(id, user).await
    }

    async fn patch_user(&self, id: i64, patch: UserPatch) -> AppResult<User> {
        patch.validate()?;
        let current = self.get_user(id).await?;
        if patch.is_empty() {
            return Ok(current);
        }
        self.ensure_unique(patch.login.as_deref(), patch.email.as_deref(), Some(id))
            .await?;

        self.repo.update(id, patch).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(id, "User deleted");
        Ok(())
    }
}
