//! API route assembly

pub mod posts;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All resource routers mounted under their path prefixes.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/users", users::router(state))
        .nest("/posts", posts::router(state))
}
