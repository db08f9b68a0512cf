use axum_helpers::{ApiError, ApiResult};
use std::sync::Arc;

use crate::models::{Pagination, User, UsersPage};
use crate::repository::UserRepository;

/// Service layer for user reads.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Total number of users.
    pub async fn get_users_count(&self) -> ApiResult<i64> {
        self.repository.count().await
    }

    /// Fetch one page of users plus pagination metadata.
    ///
    /// The page and the total count are independent read-only queries, so
    /// they run concurrently; their completion order does not matter.
    pub async fn get_users_page(&self, page_number: i64, page_size: i64) -> ApiResult<UsersPage> {
        let (users, total) = tokio::try_join!(
            self.repository.list(page_number, page_size),
            self.repository.count()
        )?;

        Ok(UsersPage {
            users,
            pagination: Pagination {
                page: page_number,
                limit: page_size,
                total,
                total_pages: total_pages(total, page_size),
            },
        })
    }

    /// Get a user by id.
    pub async fn get_user(&self, id: &str) -> ApiResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))
    }
}

/// ceil(total / page_size) in integer arithmetic.
fn total_pages(total: i64, page_size: i64) -> i64 {
    (total + page_size - 1) / page_size
}
