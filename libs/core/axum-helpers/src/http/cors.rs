use axum::http::{header, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer applied to every response.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - Any origin allowed
/// - Methods: GET, POST, PUT, DELETE
/// - Headers: Origin, X-Requested-With, Content-Type, Accept
///
/// Any-origin implies no credentials, so none are allowed.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
