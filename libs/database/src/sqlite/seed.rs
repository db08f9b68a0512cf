use crate::error::DatabaseError;
use chrono::{SecondsFormat, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use tracing::info;

const DEMO_USERS: usize = 10;

/// Insert a small deterministic demo dataset. Idempotent: every statement
/// is `INSERT OR IGNORE`, keyed on the fixed ids.
///
/// Every fourth user is left without an address so the all-or-nothing
/// address mapping has both shapes to work with.
pub async fn seed_demo_data(connection: &DatabaseConnection) -> Result<(), DatabaseError> {
    for i in 1..=DEMO_USERS {
        let user_id = format!("user-{:03}", i);

        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "INSERT OR IGNORE INTO users (id, name, username, email, phone) VALUES (?, ?, ?, ?, ?)",
            [
                user_id.clone().into(),
                format!("Demo User {}", i).into(),
                format!("demo{}", i).into(),
                format!("demo{}@example.com", i).into(),
                format!("555-01{:02}", i).into(),
            ],
        );
        connection
            .execute_raw(stmt)
            .await
            .map_err(DatabaseError::Seeding)?;

        if i % 4 != 0 {
            let stmt = Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "INSERT OR IGNORE INTO addresses (user_id, street, city, state, zipcode) \
                 VALUES (?, ?, ?, ?, ?)",
                [
                    user_id.clone().into(),
                    format!("{} Main St", 100 + i).into(),
                    "Springfield".into(),
                    "IL".into(),
                    format!("627{:02}", i).into(),
                ],
            );
            connection
                .execute_raw(stmt)
                .await
                .map_err(DatabaseError::Seeding)?;
        }
    }

    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    for i in 1..=3usize {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "INSERT OR IGNORE INTO posts (id, user_id, title, body, created_at) \
             VALUES (?, ?, ?, ?, ?)",
            [
                format!("seedpost{:03}", i).into(),
                format!("user-{:03}", i).into(),
                format!("Welcome post {}", i).into(),
                "This account was seeded with demo data.".into(),
                created_at.clone().into(),
            ],
        );
        connection
            .execute_raw(stmt)
            .await
            .map_err(DatabaseError::Seeding)?;
    }

    info!("Demo data seeded ({} users)", DEMO_USERS);
    Ok(())
}
