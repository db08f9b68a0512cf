use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response;

/// Payload of the liveness endpoint.
#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Health check endpoint handler.
///
/// Always returns 200 while the process is running.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    response::success(
        StatusCode::OK,
        "Service is healthy",
        HealthStatus {
            status: "healthy",
            name: app.name,
            version: app.version,
        },
    )
}

/// Creates a router with the /health endpoint.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
/// use core_config::app_info;
///
/// let app = axum::Router::new().merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
