use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced while opening or preparing the store.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    Connection(#[source] DbErr),

    #[error("Database initialization failed: {0}")]
    Initialization(#[source] DbErr),

    #[error("Database seeding failed: {0}")]
    Seeding(#[source] DbErr),
}
