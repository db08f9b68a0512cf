use async_trait::async_trait;
use axum_helpers::ApiResult;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Post;

/// Repository trait for Post persistence.
///
/// Implementations wrap every store failure into a non-operational
/// `ApiError` and never surface raw driver errors.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts for a user, oldest first. No user existence check: an
    /// unknown user simply yields an empty list.
    async fn list_by_user(&self, user_id: &str) -> ApiResult<Vec<Post>>;

    /// Keyed lookup against the users table.
    async fn user_exists(&self, user_id: &str) -> ApiResult<bool>;

    /// Look up a post by id.
    async fn get_by_id(&self, id: &str) -> ApiResult<Option<Post>>;

    /// Insert a post row.
    async fn insert(&self, post: &Post) -> ApiResult<()>;

    /// Delete a post by id, returning whether a row was actually removed.
    async fn delete(&self, id: &str) -> ApiResult<bool>;
}

/// In-memory implementation of PostRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<HashMap<String, Post>>>,
    users: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Register a user id that `user_exists` should accept.
    pub async fn add_user(&self, user_id: &str) {
        let mut users = self.users.write().await;
        users.insert(user_id.to_string());
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_by_user(&self, user_id: &str) -> ApiResult<Vec<Post>> {
        let posts = self.posts.read().await;

        let mut result: Vec<Post> = posts
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| (&a.created_at, &a.id).cmp(&(&b.created_at, &b.id)));

        Ok(result)
    }

    async fn user_exists(&self, user_id: &str) -> ApiResult<bool> {
        let users = self.users.read().await;
        Ok(users.contains(user_id))
    }

    async fn get_by_id(&self, id: &str) -> ApiResult<Option<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.get(id).cloned())
    }

    async fn insert(&self, post: &Post) -> ApiResult<()> {
        let mut posts = self.posts.write().await;
        tracing::debug!(post_id = %post.id, "Inserted post");
        posts.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<bool> {
        let mut posts = self.posts.write().await;
        Ok(posts.remove(id).is_some())
    }
}
