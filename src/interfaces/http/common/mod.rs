//! Shared HTTP types: response envelope, error mapping, extractors

mod extract;
mod validated_json;

pub use extract::{ApiPath, ApiQuery, ExtractRejection};
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope
///
/// Every REST endpoint wraps its payload in this structure.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "message"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload. `null` on error
    pub data: Option<T>,
    /// Error description. Omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Maps a domain failure to its HTTP status and envelope. Storage errors are
/// logged and replaced by a generic message.
pub fn error_response(err: DomainError) -> ApiError {
    let status = match &err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::BadRequest(_) => StatusCode::BAD_REQUEST,
        DomainError::Storage(detail) => {
            tracing::error!(error = %detail, "Request failed on storage");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_error_on_success() {
        let json = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 7}));
    }

    #[test]
    fn client_errors_keep_their_message() {
        let (status, Json(body)) = error_response(DomainError::not_found("Car not found"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.as_deref(), Some("Car not found"));

        let (status, _) = error_response(DomainError::bad_request("Invalid car_id"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_errors_are_hidden() {
        let (status, Json(body)) =
            error_response(DomainError::Storage("UNIQUE constraint failed".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
        assert!(!body.success);
    }
}
