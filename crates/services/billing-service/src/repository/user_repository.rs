//! User repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::page::{Page, PageRequest};
use common::{AppError, AppResult};
use domain::{NewUser, User, UserPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Finders return `Ok(None)` when nothing matches; a miss is never an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by primary key
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find the user whose login equals `login` exactly (case-sensitive)
    async fn find_one_by_login(&self, login: &str) -> AppResult<Option<User>>;

    /// Find the user whose email equals `email` ignoring case
    async fn find_one_by_email_ignore_case(&self, email: &str) -> AppResult<Option<User>>;

    /// Load one page of users ordered by id
    async fn find_page(&self, request: PageRequest) -> AppResult<Page<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<u64>;

    /// Persist a new user
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Overwrite every field of an existing user
    async fn replace(&self, id: i64, user: NewUser) -> AppResult<User>;

    /// Apply the fields present in `patch`
    async fn update(&self, id: i64, patch: UserPatch) -> AppResult<User>;

    /// Remove a user permanently
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i64) -> AppResult<user::Model> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }
}

/// Map write failures, turning unique index violations into conflicts.
fn write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violated: {}", detail);
            AppError::conflict("User")
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_one_by_login(&self, login: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Login.eq(login))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_one_by_email_ignore_case(&self, email: &str) -> AppResult<Option<User>> {
        // LOWER() on both sides keeps the folding rules identical to the
        // expression index that enforces uniqueness.
        let result = UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((UserEntity, user::Column::Email))))
                    .eq(Func::lower(Expr::val(email))),
            )
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_page(&self, request: PageRequest) -> AppResult<Page<User>> {
        let paginator = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .paginate(&self.db, request.size);

        let total = paginator.num_items().await.map_err(AppError::from)?;

        // Pages past the end (including offsets too large for u64) are empty
        let in_range = request
            .number
            .checked_mul(request.size)
            .is_some_and(|offset| offset < total);
        let models = if in_range {
            paginator
                .fetch_page(request.number)
                .await
                .map_err(AppError::from)?
        } else {
            Vec::new()
        };

        Ok(Page::new(
            models.into_iter().map(User::from).collect(),
            request,
            total,
        ))
    }

    async fn count(&self) -> AppResult<u64> {
        UserEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            login: Set(user.login),
            email: Set(user.email),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            activated: Set(user.activated),
            lang_key: Set(user.lang_key),
            image_url: Set(user.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(write_error)?;
        tracing::debug!(id = model.id, login = %model.login, "User inserted");
        Ok(User::from(model))
    }

    async fn replace(&self, id: i64, user: NewUser) -> AppResult<User> {
        let mut active: ActiveModel = self.find_model(id).await?.into();

        active.login = Set(user.login);
        active.email = Set(user.email);
        active.first_name = Set(user.first_name);
        active.last_name = Set(user.last_name);
        active.activated = Set(user.activated);
        active.lang_key = Set(user.lang_key);
        active.image_url = Set(user.image_url);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(write_error)?;
        Ok(User::from(model))
    }

    async fn update(&self, id: i64, patch: UserPatch) -> AppResult<User> {
        let mut active: ActiveModel = self.find_model(id).await?.into();

        if let Some(login) = patch.login {
            active.login = Set(login);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(first_name) = patch.first_name {
            active.first_name = Set(Some(first_name));
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(Some(last_name));
        }
        if let Some(activated) = patch.activated {
            active.activated = Set(activated);
        }
        if let Some(lang_key) = patch.lang_key {
            active.lang_key = Set(Some(lang_key));
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(Some(image_url));
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(write_error)?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
