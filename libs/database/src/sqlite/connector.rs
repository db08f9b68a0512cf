use crate::error::DatabaseError;
use core_config::database::SqliteConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;
use tracing::info;

/// Open the configured database file, creating it (and its parent
/// directory) on first run.
pub async fn connect(config: &SqliteConfig) -> Result<DatabaseConnection, DatabaseError> {
    if let Some(parent) = Path::new(&config.path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Connection(sea_orm::DbErr::Custom(format!(
                    "cannot create database directory {}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }
    }

    connect_url(&config.url()).await
}

/// Connect to a SQLite URL and prepare the connection for use.
///
/// The pool is capped at one connection: SQLite serializes writes
/// internally, and `PRAGMA foreign_keys` is connection-scoped, so a single
/// connection keeps foreign-key enforcement in effect for every statement.
/// SQLite does not enable foreign keys by default.
pub async fn connect_url(url: &str) -> Result<DatabaseConnection, DatabaseError> {
    let mut options = ConnectOptions::new(url.to_string());
    options.max_connections(1).sqlx_logging(false);

    let connection = Database::connect(options)
        .await
        .map_err(DatabaseError::Connection)?;

    connection
        .execute_unprepared("PRAGMA foreign_keys = ON")
        .await
        .map_err(DatabaseError::Connection)?;

    info!("Connected to SQLite database at {}", url);
    Ok(connection)
}
