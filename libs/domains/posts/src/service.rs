use axum_helpers::{ApiError, ApiResult};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{NewPost, Post};
use crate::repository::PostRepository;

/// Service layer for post operations.
#[derive(Clone)]
pub struct PostService<R: PostRepository> {
    repository: Arc<R>,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All posts for a user, oldest first. An unknown user yields an
    /// empty list, not an error.
    pub async fn get_posts(&self, user_id: &str) -> ApiResult<Vec<Post>> {
        self.repository.list_by_user(user_id).await
    }

    /// Create a post for an existing user.
    ///
    /// The owner check and the insert are separate statements, not one
    /// transaction; the window between them is a known, accepted gap.
    pub async fn create_post(&self, input: NewPost) -> ApiResult<Post> {
        if !self.repository.user_exists(&input.user_id).await? {
            return Err(ApiError::not_found("User not found"));
        }

        let post = Post {
            id: Uuid::new_v4().simple().to_string(),
            user_id: input.user_id,
            title: input.title,
            body: input.body,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        self.repository.insert(&post).await?;

        // Return the canonical stored row, not the value we built
        self.repository
            .get_by_id(&post.id)
            .await?
            .ok_or_else(|| ApiError::internal("Post was created but could not be retrieved"))
    }

    /// Delete a post by id. Deleting an unknown post is an explicit
    /// not-found. Returns whether a row was actually removed - expected
    /// true after the existence check, kept as a defensive signal.
    pub async fn delete_post(&self, id: &str) -> ApiResult<bool> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ApiError::not_found("Post not found"));
        }

        self.repository.delete(id).await
    }
}
