//! Users Domain
//!
//! Read-only user listing and lookup with page/offset pagination. Users
//! and their addresses are created by the seed/setup routine; this domain
//! only serves them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← pagination math, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← User, Address, pagination metadata
//! └─────────────┘
//! ```

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use handlers::ApiDoc;
pub use models::{Address, Pagination, User, UserCount, UsersPage};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use sqlite::SqliteUserRepository;
