use axum::{http::StatusCode, response::Response};

use crate::response;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    response::error(StatusCode::NOT_FOUND, "The requested resource was not found")
}

/// Fallback handler for matched paths with an unsupported method.
pub async fn method_not_allowed() -> Response {
    response::error(
        StatusCode::METHOD_NOT_ALLOWED,
        "The HTTP method is not allowed for this resource",
    )
}
