use async_trait::async_trait;
use axum_helpers::{ApiError, ApiResult};
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::models::{Address, User};
use crate::repository::UserRepository;

/// SQLite implementation of UserRepository using prepared statements.
#[derive(Clone)]
pub struct SqliteUserRepository {
    db: DatabaseConnection,
}

impl SqliteUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

const SELECT_USERS: &str = "\
    SELECT u.id, u.name, u.username, u.email, u.phone, \
           a.street, a.city, a.state, a.zipcode \
    FROM users u \
    LEFT JOIN addresses a ON a.user_id = u.id \
    ORDER BY u.id \
    LIMIT ? OFFSET ?";

const SELECT_USER_BY_ID: &str = "\
    SELECT u.id, u.name, u.username, u.email, u.phone, \
           a.street, a.city, a.state, a.zipcode \
    FROM users u \
    LEFT JOIN addresses a ON a.user_id = u.id \
    WHERE u.id = ?";

const SELECT_COUNT_OF_USERS: &str = "SELECT COUNT(*) AS count FROM users";

/// Helper struct for deserializing user rows from the left join.
///
/// The address columns are nullable: a user without an address row still
/// appears, with all four columns NULL.
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: String,
    name: String,
    username: String,
    email: String,
    phone: String,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zipcode: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        // All-or-nothing: attach the address only when every field is set
        let address = match (row.street, row.city, row.state, row.zipcode) {
            (Some(street), Some(city), Some(state), Some(zipcode)) => Some(Address {
                street,
                city,
                state,
                zipcode,
            }),
            _ => None,
        };

        User {
            id: row.id,
            name: row.name,
            username: row.username,
            email: row.email,
            phone: row.phone,
            address,
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn count(&self) -> ApiResult<i64> {
        let stmt = Statement::from_string(DbBackend::Sqlite, SELECT_COUNT_OF_USERS);

        let row = CountRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to get user count: {}", e)))?;

        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    async fn list(&self, page_number: i64, page_size: i64) -> ApiResult<Vec<User>> {
        let offset = (page_number - 1).saturating_mul(page_size);
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            SELECT_USERS,
            [page_size.into(), offset.into()],
        );

        let rows = UserRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to fetch users: {}", e)))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> ApiResult<Option<User>> {
        let stmt =
            Statement::from_sql_and_values(DbBackend::Sqlite, SELECT_USER_BY_ID, [id.into()]);

        let row = UserRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to get user by id: {}", e)))?;

        Ok(row.map(User::from))
    }
}
