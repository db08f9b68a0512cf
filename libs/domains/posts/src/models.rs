use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Post entity - matches the SQL schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Unique identifier (UUID v4, no dashes)
    pub id: String,
    /// Owning user; cascades on user deletion
    pub user_id: String,
    pub title: String,
    pub body: String,
    /// ISO-8601 timestamp with millisecond precision, UTC
    pub created_at: String,
}

/// Validated input for creating a post. The id and timestamp are
/// generated server-side.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: String,
}
