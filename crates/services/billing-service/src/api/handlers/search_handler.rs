//! Finder endpoints under `/users/search`.
//!
//! A finder that matches nothing answers 404; a missing parameter is a 400.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{ApiQuery, AppError, AppResult, OptionExt};

use crate::api::hal::{SearchIndex, UserModel, FIND_ONE_BY_EMAIL_IGNORE_CASE, FIND_ONE_BY_LOGIN};
use crate::api::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginParams {
    /// Login to match exactly
    pub login: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailParams {
    /// Email to match ignoring case
    pub email: Option<String>,
}

/// Create search routes
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search_index))
        .route(&format!("/{}", FIND_ONE_BY_LOGIN), get(find_one_by_login))
        .route(
            &format!("/{}", FIND_ONE_BY_EMAIL_IGNORE_CASE),
            get(find_one_by_email_ignore_case),
        )
}

fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::bad_request(format!("Parameter '{}' is required", name)))
}

/// List the available finders
#[utoipa::path(
    get,
    path = "/users/search",
    tag = "Search",
    responses(
        (status = 200, description = "Finder links", body = SearchIndex)
    )
)]
pub async fn search_index() -> Json<SearchIndex> {
    Json(SearchIndex::new())
}

/// Find the user with exactly this login
#[utoipa::path(
    get,
    path = "/users/search/findOneByLogin",
    tag = "Search",
    params(LoginParams),
    responses(
        (status = 200, description = "Matching user", body = UserModel),
        (status = 400, description = "Missing login parameter"),
        (status = 404, description = "No user has this login")
    )
)]
pub async fn find_one_by_login(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LoginParams>,
) -> AppResult<Json<UserModel>> {
    let login = required(params.login, "login")?;
    let user = state
        .user_service
        .find_by_login(&login)
        .await?
        .ok_or_not_found()?;

    Ok(Json(UserModel::from(user)))
}

/// Find the user with this email, ignoring case
#[utoipa::path(
    get,
    path = "/users/search/findOneByEmailIgnoreCase",
    tag = "Search",
    params(EmailParams),
    responses(
        (status = 200, description = "Matching user", body = UserModel),
        (status = 400, description = "Missing email parameter"),
        (status = 404, description = "No user has this email")
    )
)]
pub async fn find_one_by_email_ignore_case(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<EmailParams>,
) -> AppResult<Json<UserModel>> {
    let email = required(params.email, "email")?;
    let user = state
        .user_service
        .find_by_email_ignore_case(&email)
        .await?
        .ok_or_not_found()?;

    Ok(Json(UserModel::from(user)))
}
