//! Store connectivity for the embedded SQLite database.
//!
//! The rest of the workspace talks to the store through a single
//! `sea_orm::DatabaseConnection` created here at startup. Schema creation
//! and demo seeding are one-time idempotent setup steps, not hot paths.

pub mod error;
pub mod sqlite;

pub use error::DatabaseError;
