//! Integration tests for the users REST resource.
//!
//! The full router runs on top of an in-memory SQLite database, so requests
//! go through handlers, service rules and real queries.

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, LOCATION},
        Method, Request, StatusCode,
    },
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use billing_service_lib::api::{create_router, AppState};
use billing_service_lib::infra::Database;
use common::DatabaseConfig;

// =============================================================================
// Test Helpers
// =============================================================================

async fn app() -> Router {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    create_router(AppState::from_database(db))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

async fn create(app: &Router, login: &str, email: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({ "login": login, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create {}: {}", login, body);
    body["id"].as_i64().unwrap()
}

// =============================================================================
// Collection
// =============================================================================

#[tokio::test]
async fn test_create_returns_location_and_links() {
    let app = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "login": "jdoe", "email": "jdoe@example.com", "firstName": "John" })
                .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response.headers()[LOCATION].to_str().unwrap().to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(location, format!("/users/{}", body["id"]));
    assert_eq!(body["_links"]["self"]["href"], location);
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["activated"], false);
}

#[tokio::test]
async fn test_list_is_paged() {
    let app = app().await;
    for n in 0..3 {
        create(&app, &format!("user{}", n), &format!("user{}@example.com", n)).await;
    }

    let (status, body) = send(&app, Method::GET, "/users?page=0&size=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_embedded"]["users"].as_array().unwrap().len(), 2);
    assert_eq!(body["page"]["totalElements"], 3);
    assert_eq!(body["page"]["totalPages"], 2);
    assert_eq!(body["_links"]["next"]["href"], "/users?page=1&size=2");

    let (_, body) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(body["page"]["size"], 20);
    assert_eq!(body["_embedded"]["users"][0]["login"], "user0");
}

#[tokio::test]
async fn test_list_past_the_end() {
    let app = app().await;
    create(&app, "jdoe", "jdoe@example.com").await;

    let (status, body) = send(&app, Method::GET, "/users?page=5&size=20", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["_embedded"]["users"].as_array().unwrap().is_empty());
    assert_eq!(body["page"]["totalElements"], 1);
    assert!(body["_links"].get("next").is_none());

    for uri in [
        "/users?page=18446744073709551615&size=20",
        "/users?page=1000000000000000000&size=100",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(body["_embedded"]["users"].as_array().unwrap().is_empty());
        assert!(body["_links"].get("next").is_none());
    }
}

#[tokio::test]
async fn test_malformed_path_and_query_use_error_body() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = send(&app, Method::GET, "/users?page=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_without_content_type_is_415() {
    let app = app().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .body(Body::from(
            json!({ "login": "jdoe", "email": "jdoe@example.com" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_create_invalid_payload() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "login": "no spaces allowed", "email": "jdoe@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "login": "jdoe" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_conflicts() {
    let app = app().await;
    create(&app, "jdoe", "jdoe@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "login": "jdoe", "email": "other@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Login already exists");

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "login": "other", "email": "JDOE@EXAMPLE.COM" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Email already exists");
}

// =============================================================================
// Items
// =============================================================================

#[tokio::test]
async fn test_get_missing_user_is_404() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_put_replaces_user() {
    let app = app().await;
    let id = create(&app, "jdoe", "jdoe@example.com").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/users/{}", id),
        Some(json!({ "login": "john", "email": "john@example.com", "activated": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["login"], "john");
    assert_eq!(body["activated"], true);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/users/999",
        Some(json!({ "login": "ghost", "email": "ghost@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_updates_some_fields() {
    let app = app().await;
    let id = create(&app, "jdoe", "jdoe@example.com").await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/users/{}", id),
        Some(json!({ "langKey": "fr" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["langKey"], "fr");
    assert_eq!(body["email"], "jdoe@example.com");
}

#[tokio::test]
async fn test_patch_email_taken_in_other_case_is_409() {
    let app = app().await;
    create(&app, "one", "taken@example.com").await;
    let id = create(&app, "two", "two@example.com").await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/users/{}", id),
        Some(json!({ "email": "Taken@Example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Email already exists");

    let (_, body) = send(&app, Method::GET, &format!("/users/{}", id), None).await;
    assert_eq!(body["email"], "two@example.com");
}

#[tokio::test]
async fn test_delete_user() {
    let app = app().await;
    let id = create(&app, "jdoe", "jdoe@example.com").await;
    let uri = format!("/users/{}", id);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Finders
// =============================================================================

#[tokio::test]
async fn test_search_index() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/users/search", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["_links"]["findOneByLogin"]["href"],
        "/users/search/findOneByLogin{?login}"
    );
}

#[tokio::test]
async fn test_find_one_by_login() {
    let app = app().await;
    let id = create(&app, "JDoe", "jdoe@example.com").await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/users/search/findOneByLogin?login=JDoe",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);

    let (status, _) = send(
        &app,
        Method::GET,
        "/users/search/findOneByLogin?login=jdoe",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_find_one_by_email_ignore_case() {
    let app = app().await;
    let id = create(&app, "ax", "A@X.com").await;

    for uri in [
        "/users/search/findOneByEmailIgnoreCase?email=A@X.com",
        "/users/search/findOneByEmailIgnoreCase?email=a@x.com",
        "/users/search/findOneByEmailIgnoreCase?email=a%40X.COM",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["id"], id);
    }

    let (status, _) = send(
        &app,
        Method::GET,
        "/users/search/findOneByEmailIgnoreCase?email=b@x.com",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_finders_require_parameter() {
    let app = app().await;
    for uri in [
        "/users/search/findOneByLogin",
        "/users/search/findOneByEmailIgnoreCase",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["services"]["database"]["status"], "healthy");
}
