//! The uniform response envelope.
//!
//! Every response on the wire, success or failure, is shaped as
//! `{ "success": bool, "message": string, "data": T | null }`. Handlers
//! build successes through [`success`]/[`success_empty`]; failures are
//! produced exclusively by [`crate::errors::ApiError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The wire shape of every API response.
///
/// `data` is always present and is `null` when a response carries no
/// payload (e.g. a successful delete).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

/// Build a success response with a payload.
pub fn success<T: Serialize>(status: StatusCode, message: impl Into<String>, data: T) -> Response {
    let body = ApiResponse {
        success: true,
        message: message.into(),
        data: Some(data),
    };
    (status, Json(body)).into_response()
}

/// Build a success response with `data: null`.
pub fn success_empty(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ApiResponse::<serde_json::Value> {
        success: true,
        message: message.into(),
        data: None,
    };
    (status, Json(body)).into_response()
}

/// Build an error response. Only [`crate::errors::ApiError`] and the
/// router fallbacks should call this.
pub fn error(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ApiResponse::<serde_json::Value> {
        success: false,
        message: message.into(),
        data: None,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_success_envelope_shape() {
        let response = success(
            StatusCode::OK,
            "Users fetched successfully",
            serde_json::json!({"count": 3}),
        );
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Users fetched successfully");
        assert_eq!(body["data"]["count"], 3);
    }

    #[tokio::test]
    async fn test_success_empty_serializes_null_data() {
        let response = success_empty(StatusCode::OK, "Post deleted successfully");
        let body = body_json(response).await;

        assert_eq!(body["success"], true);
        // data must be present and explicitly null, not omitted
        assert!(body.as_object().unwrap().contains_key("data"));
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let response = error(StatusCode::NOT_FOUND, "Post not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Post not found");
        assert!(body["data"].is_null());
    }
}
