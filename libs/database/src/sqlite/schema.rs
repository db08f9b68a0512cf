use crate::error::DatabaseError;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::info;

/// Create the three tables if they do not exist yet. Idempotent.
///
/// Addresses are one-to-one with users, posts many-to-one; both cascade
/// on user deletion.
pub async fn init_schema(connection: &DatabaseConnection) -> Result<(), DatabaseError> {
    connection
        .execute_unprepared(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                username TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL
            )
            "#,
        )
        .await
        .map_err(DatabaseError::Initialization)?;

    connection
        .execute_unprepared(
            r#"
            CREATE TABLE IF NOT EXISTS addresses (
                user_id TEXT PRIMARY KEY,
                street TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                zipcode TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
            )
            "#,
        )
        .await
        .map_err(DatabaseError::Initialization)?;

    connection
        .execute_unprepared(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
            )
            "#,
        )
        .await
        .map_err(DatabaseError::Initialization)?;

    info!("Database schema initialized");
    Ok(())
}
