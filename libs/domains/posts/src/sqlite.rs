use async_trait::async_trait;
use axum_helpers::{ApiError, ApiResult};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::models::Post;
use crate::repository::PostRepository;

/// SQLite implementation of PostRepository using prepared statements.
#[derive(Clone)]
pub struct SqlitePostRepository {
    db: DatabaseConnection,
}

impl SqlitePostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

const SELECT_POSTS: &str = "\
    SELECT id, user_id, title, body, created_at \
    FROM posts \
    WHERE user_id = ? \
    ORDER BY created_at, id";

const SELECT_POST_BY_ID: &str =
    "SELECT id, user_id, title, body, created_at FROM posts WHERE id = ?";

const SELECT_USER_ID: &str = "SELECT id FROM users WHERE id = ?";

const INSERT_POST: &str =
    "INSERT INTO posts (id, user_id, title, body, created_at) VALUES (?, ?, ?, ?, ?)";

const DELETE_POST: &str = "DELETE FROM posts WHERE id = ?";

#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: String,
    user_id: String,
    title: String,
    body: String,
    created_at: String,
}

#[derive(Debug, FromQueryResult)]
struct IdRow {
    #[allow(dead_code)]
    id: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            body: row.body,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn list_by_user(&self, user_id: &str) -> ApiResult<Vec<Post>> {
        let stmt =
            Statement::from_sql_and_values(DbBackend::Sqlite, SELECT_POSTS, [user_id.into()]);

        let rows = PostRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to fetch posts: {}", e)))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn user_exists(&self, user_id: &str) -> ApiResult<bool> {
        let stmt =
            Statement::from_sql_and_values(DbBackend::Sqlite, SELECT_USER_ID, [user_id.into()]);

        let row = IdRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to verify user: {}", e)))?;

        Ok(row.is_some())
    }

    async fn get_by_id(&self, id: &str) -> ApiResult<Option<Post>> {
        let stmt =
            Statement::from_sql_and_values(DbBackend::Sqlite, SELECT_POST_BY_ID, [id.into()]);

        let row = PostRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to fetch post: {}", e)))?;

        Ok(row.map(Post::from))
    }

    async fn insert(&self, post: &Post) -> ApiResult<()> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            INSERT_POST,
            [
                post.id.clone().into(),
                post.user_id.clone().into(),
                post.title.clone().into(),
                post.body.clone().into(),
                post.created_at.clone().into(),
            ],
        );

        self.db
            .execute_raw(stmt)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to create post: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<bool> {
        let stmt = Statement::from_sql_and_values(DbBackend::Sqlite, DELETE_POST, [id.into()]);

        let result = self
            .db
            .execute_raw(stmt)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to delete post: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
