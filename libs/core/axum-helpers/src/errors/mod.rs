//! The application error type and its translation to HTTP responses.
//!
//! [`ApiError::into_response`] is the single point where internal failures
//! become client-visible bodies. Handlers and repositories return
//! `Result<_, ApiError>` and never format error responses themselves.

pub mod handlers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_config::Environment;
use thiserror::Error;

use crate::response;

/// Typed application error carrying an HTTP status.
///
/// `BadRequest` and `NotFound` are operational: expected, client-caused
/// conditions whose message is always safe to show. `Internal` is
/// non-operational: an infrastructure failure whose detail is logged
/// server-side and only exposed in development.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this is an expected, client-attributable condition.
    pub fn is_operational(&self) -> bool {
        !matches!(self, ApiError::Internal(_))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                tracing::info!("Bad request: {}", message);
                response::error(StatusCode::BAD_REQUEST, message)
            }
            ApiError::NotFound(message) => {
                tracing::info!("Not found: {}", message);
                response::error(StatusCode::NOT_FOUND, message)
            }
            ApiError::Internal(detail) => {
                // Full detail always goes to the server log; the client
                // only sees it in development.
                tracing::error!("Unexpected error: {}", detail);

                let message = if Environment::from_env().is_development() {
                    detail
                } else {
                    "Internal server error".to_string()
                };
                response::error(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_operational_flag() {
        assert!(ApiError::bad_request("x").is_operational());
        assert!(ApiError::not_found("x").is_operational());
        assert!(!ApiError::internal("x").is_operational());
    }

    #[tokio::test]
    async fn test_operational_message_shown_verbatim() {
        let response = ApiError::not_found("Post not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Post not found");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_internal_detail_gated_by_environment() {
        let detail = "Failed to fetch users: disk I/O error";

        let body = temp_env::async_with_vars([("APP_ENV", Some("production"))], async {
            body_json(ApiError::internal(detail).into_response()).await
        })
        .await;
        assert_eq!(body["message"], "Internal server error");

        let body = temp_env::async_with_vars([("APP_ENV", Some("development"))], async {
            body_json(ApiError::internal(detail).into_response()).await
        })
        .await;
        assert_eq!(body["message"], detail);
    }
}
