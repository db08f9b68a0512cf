//! Shared test utilities for domain testing
//!
//! Provides `TestDatabase`: an in-memory SQLite database with foreign
//! keys enabled and the schema applied, plus fixture helpers for
//! inserting users, addresses, and posts.
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::TestDatabase;
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! db.insert_user_with_address("user-001").await;
//! // Use db.connection() to create your repository
//! # }
//! ```

mod sqlite;

pub use sqlite::TestDatabase;
