//! CRUD handlers for the `users` collection.

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{ApiPath, ApiQuery, AppResult, ValidatedJson};
use domain::{NewUser, UserPatch};

use super::search_routes;
use crate::api::hal::{user_href, UserCollection, UserModel};
use crate::api::state::AppState;
use crate::repository::PageRequest;

/// Paging query parameters (`page` is zero-based)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index
    pub page: Option<u64>,
    /// Page size (default 20, max 100)
    pub size: Option<u64>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(params.page, params.size)
    }
}

/// Create user collection routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .nest("/search", search_routes())
        .route(
            "/:id",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
}

/// List users page by page
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PageParams),
    responses(
        (status = 200, description = "One page of users", body = UserCollection)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> AppResult<Json<UserCollection>> {
    let page = state.user_service.list_users(params.into()).await?;
    Ok(Json(UserCollection::from(page)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserModel),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<UserModel>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserModel::from(user)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created", body = UserModel),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Login or email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewUser>,
) -> AppResult<Response> {
    let user = state.user_service.create_user(payload).await?;
    let location = user_href(user.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(UserModel::from(user)),
    )
        .into_response())
}

/// Replace a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = NewUser,
    responses(
        (status = 200, description = "User replaced", body = UserModel),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Login or email already exists")
    )
)]
pub async fn replace_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(payload): ValidatedJson<NewUser>,
) -> AppResult<Json<UserModel>> {
    let user = state.user_service.replace_user(id, payload).await?;
    Ok(Json(UserModel::from(user)))
}

/// Partially update a user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = UserModel),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Login or email already exists")
    )
)]
pub async fn patch_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(payload): ValidatedJson<UserPatch>,
) -> AppResult<Json<UserModel>> {
    let user = state.user_service.patch_user(id, payload).await?;
    Ok(Json(UserModel::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
