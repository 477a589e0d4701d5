//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::hal::{
    CollectionLinks, EmbeddedUsers, Link, PageMetadata, SearchIndex, SearchLinks, UserCollection,
    UserLinks, UserModel,
};
use crate::api::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use domain::{NewUser, UserPatch};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_handler::health_check,
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::replace_user,
        crate::api::handlers::user_handler::patch_user,
        crate::api::handlers::user_handler::delete_user,
        crate::api::handlers::search_handler::search_index,
        crate::api::handlers::search_handler::find_one_by_login,
        crate::api::handlers::search_handler::find_one_by_email_ignore_case,
    ),
    components(
        schemas(
            NewUser,
            UserPatch,
            UserModel,
            UserLinks,
            Link,
            UserCollection,
            EmbeddedUsers,
            CollectionLinks,
            PageMetadata,
            SearchIndex,
            SearchLinks,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "User resource"),
        (name = "Search", description = "User finders"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;
