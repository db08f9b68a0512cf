//! SQLite test infrastructure
//!
//! Creates an in-memory database per test with the production schema
//! applied. The store is embedded, so no container is involved; each
//! `TestDatabase` is fully isolated and dropped with the test.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};

/// Test database wrapper.
///
/// The single pooled connection keeps the in-memory database alive for
/// the lifetime of this struct.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new in-memory test database with the schema applied.
    pub async fn new() -> Self {
        let connection = database::sqlite::connect_url("sqlite::memory:")
            .await
            .expect("Failed to open in-memory test database");

        database::sqlite::init_schema(&connection)
            .await
            .expect("Failed to initialize test schema");

        tracing::debug!("Test database ready (in-memory SQLite)");
        Self { connection }
    }

    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    async fn execute(&self, sql: &str, values: Vec<sea_orm::Value>) {
        let stmt = Statement::from_sql_and_values(DbBackend::Sqlite, sql, values);
        self.connection
            .execute_raw(stmt)
            .await
            .expect("Failed to insert test fixture");
    }

    /// Insert a user without an address. Name, username, email, and phone
    /// are derived from the id.
    pub async fn insert_user(&self, id: &str) {
        self.execute(
            "INSERT INTO users (id, name, username, email, phone) VALUES (?, ?, ?, ?, ?)",
            vec![
                id.into(),
                format!("Name {}", id).into(),
                format!("username-{}", id).into(),
                format!("{}@example.com", id).into(),
                "555-0100".into(),
            ],
        )
        .await;
    }

    /// Insert a user plus a complete address row.
    pub async fn insert_user_with_address(&self, id: &str) {
        self.insert_user(id).await;
        self.execute(
            "INSERT INTO addresses (user_id, street, city, state, zipcode) \
             VALUES (?, ?, ?, ?, ?)",
            vec![
                id.into(),
                format!("1 {} St", id).into(),
                "Springfield".into(),
                "IL".into(),
                "62701".into(),
            ],
        )
        .await;
    }

    /// Insert a post row verbatim.
    pub async fn insert_post(&self, id: &str, user_id: &str, title: &str, body: &str, created_at: &str) {
        self.execute(
            "INSERT INTO posts (id, user_id, title, body, created_at) VALUES (?, ?, ?, ?, ?)",
            vec![
                id.into(),
                user_id.into(),
                title.into(),
                body.into(),
                created_at.into(),
            ],
        )
        .await;
    }

    /// Seed `n` users (ids `user-001` .. `user-N`, zero-padded to three
    /// digits), none with addresses.
    pub async fn seed_users(&self, n: usize) {
        for i in 1..=n {
            self.insert_user(&format!("user-{:03}", i)).await;
        }
    }
}
