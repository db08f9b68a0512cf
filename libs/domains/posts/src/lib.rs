//! Posts Domain
//!
//! Create, list, and delete posts. Every post belongs to an existing
//! user; creation verifies the owner explicitly rather than relying on
//! foreign-key enforcement alone, and deletion of an unknown post is an
//! explicit not-found, never a silent no-op.
//!
//! Layered like the users domain: handlers over a service over a
//! repository trait with SQLite and in-memory implementations.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use handlers::ApiDoc;
pub use models::{NewPost, Post};
pub use repository::{InMemoryPostRepository, PostRepository};
pub use service::PostService;
pub use sqlite::SqlitePostRepository;
