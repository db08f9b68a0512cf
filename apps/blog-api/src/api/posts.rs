//! Posts API routes
//!
//! This module wires up the posts domain to HTTP routes.

use axum::Router;
use domain_posts::{handlers, PostService, SqlitePostRepository};

use crate::state::AppState;

/// Create posts router
pub fn router(state: &AppState) -> Router {
    let repository = SqlitePostRepository::new(state.db.clone());
    let service = PostService::new(repository);
    handlers::router(service)
}
