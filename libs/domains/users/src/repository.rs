use async_trait::async_trait;
use axum_helpers::ApiResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::User;

/// Repository trait for User reads.
///
/// Implementations wrap every store failure into a non-operational
/// `ApiError` and never surface raw driver errors.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Count all users. Yields 0 when the store returns no row.
    async fn count(&self) -> ApiResult<i64>;

    /// Fetch one page of users ordered by id.
    ///
    /// The offset is `(page_number - 1) * page_size`; both arguments are
    /// validated to be >= 1 before reaching the repository.
    async fn list(&self, page_number: i64, page_size: i64) -> ApiResult<Vec<User>>;

    /// Look up a user by id, with the joined address when present.
    async fn get_by_id(&self, id: &str) -> ApiResult<Option<User>>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace a user fixture.
    pub async fn insert(&self, user: User) {
        let mut users = self.users.write().await;
        tracing::debug!(user_id = %user.id, "Inserted user fixture");
        users.insert(user.id.clone(), user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn count(&self) -> ApiResult<i64> {
        let users = self.users.read().await;
        Ok(users.len() as i64)
    }

    async fn list(&self, page_number: i64, page_size: i64) -> ApiResult<Vec<User>> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));

        let offset = (page_number - 1).saturating_mul(page_size);
        Ok(result
            .into_iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> ApiResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            username: id.to_string(),
            email: format!("{}@example.com", id),
            phone: "555-0100".to_string(),
            address: None,
        }
    }

    #[tokio::test]
    async fn test_list_pages_ordered_by_id() {
        let repo = InMemoryUserRepository::new();
        for i in 1..=5 {
            repo.insert(user(&format!("user-{:03}", i))).await;
        }

        let first = repo.list(1, 2).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "user-001");
        assert_eq!(first[1].id, "user-002");

        let third = repo.list(3, 2).await.unwrap();
        assert_eq!(third.len(), 1);
        assert_eq!(third[0].id, "user-005");
    }

    #[tokio::test]
    async fn test_count_and_get_by_id() {
        let repo = InMemoryUserRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(user("user-001")).await;
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.get_by_id("user-001").await.unwrap().is_some());
        assert!(repo.get_by_id("user-999").await.unwrap().is_none());
    }
}
