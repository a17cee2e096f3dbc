//! Query and path extractors that reject in the standard envelope
//!
//! `axum::extract::Query` and `axum::extract::Path` answer malformed input
//! with a plain-text body. These wrappers keep axum's status and message but
//! send them as `ApiResponse::error`.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::ApiResponse;

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ExtractRejection))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ExtractRejection))]
pub struct ApiPath<T>(pub T);

#[derive(Debug)]
pub struct ExtractRejection {
    status: StatusCode,
    message: String,
}

impl From<QueryRejection> for ExtractRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ExtractRejection {
    fn from(rejection: PathRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ExtractRejection {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::error(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Filter {
        #[allow(dead_code)]
        page: Option<u32>,
    }

    fn app() -> Router {
        Router::new()
            .route("/items", get(|ApiQuery(_): ApiQuery<Filter>| async { "ok" }))
            .route("/items/{id}", get(|ApiPath(id): ApiPath<i32>| async move { id.to_string() }))
    }

    async fn send(uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn well_formed_input_passes_through() {
        let (status, _) = send("/items?page=2").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send("/items/7").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn bad_query_is_enveloped() {
        let (status, body) = send("/items?page=minus-one").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("page"));
    }

    #[tokio::test]
    async fn bad_path_is_enveloped() {
        let (status, body) = send("/items/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("abc"));
    }
}
