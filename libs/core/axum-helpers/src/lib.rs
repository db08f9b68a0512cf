//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the HTTP-facing crates.
//!
//! ## Modules
//!
//! - **[`response`]**: the uniform `{success, message, data}` envelope
//! - **[`errors`]**: the domain error type and its single point of
//!   translation into client-visible responses
//! - **[`http`]**: HTTP middleware (CORS)
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes);
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod http;
pub mod response;
pub mod server;

// Re-export error types
pub use errors::{ApiError, ApiResult};

// Re-export the envelope
pub use response::ApiResponse;

// Re-export server helpers
pub use server::{create_app, create_router, health_router, shutdown_signal};

// Re-export HTTP middleware
pub use http::create_cors_layer;
