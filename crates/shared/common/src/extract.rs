//! Extractors that reject with [`AppError`].
//!
//! Axum's own extractors answer plain-text errors; these wrap them so every
//! rejection uses the JSON error body.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON extractor that automatically validates the payload.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameters, rejected as `BAD_REQUEST`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string, rejected as `BAD_REQUEST`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
        response::Response,
        routing::{get, post},
        Router,
    };
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;
    use validator::Validate;

    use super::{ApiPath, ApiQuery, ValidatedJson};

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Name cannot be empty"))]
        name: String,
    }

    async fn echo(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        payload.name
    }

    #[derive(Debug, Deserialize)]
    struct Paging {
        page: Option<u64>,
    }

    async fn by_id(ApiPath(id): ApiPath<i64>) -> String {
        id.to_string()
    }

    async fn paged(ApiQuery(paging): ApiQuery<Paging>) -> String {
        paging.page.unwrap_or_default().to_string()
    }

    async fn error_code(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["error"]["code"].clone()
    }

    fn request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let app = Router::new().route("/", post(echo));
        let response = app.oneshot(request(r#"{"name":"ok"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_payload_is_bad_request() {
        let app = Router::new().route("/", post(echo));
        let response = app.oneshot(request(r#"{"name":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = Router::new().route("/", post(echo));
        let response = app.oneshot(request("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let app = Router::new().route("/", post(echo));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .body(Body::from(r#"{"name":"ok"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(error_code(response).await, "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_bad_path_uses_error_body() {
        let app = Router::new().route("/items/:id", get(by_id));
        let request = Request::builder().uri("/items/abc").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(response).await, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_bad_query_uses_error_body() {
        let app = Router::new().route("/", get(paged));
        let request = Request::builder().uri("/?page=-1").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(response).await, "BAD_REQUEST");
    }
}
