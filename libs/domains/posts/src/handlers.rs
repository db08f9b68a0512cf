use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::{delete, get},
    Json, Router,
};
use axum_helpers::{response, ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::models::{NewPost, Post};
use crate::repository::PostRepository;
use crate::service::PostService;

/// OpenAPI documentation for the Posts API
#[derive(OpenApi)]
#[openapi(
    paths(list_posts, create_post, delete_post),
    components(schemas(Post, PostsPayload, PostPayload)),
    tags(
        (name = "Posts", description = "Post creation, listing, and deletion")
    )
)]
pub struct ApiDoc;

/// Create the posts router with all HTTP endpoints.
pub fn router<R: PostRepository + 'static>(service: PostService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", delete(delete_post))
        .with_state(shared_service)
}

#[derive(Debug, Deserialize)]
struct ListPostsQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

/// Payload of the listing endpoint.
#[derive(Debug, Serialize, ToSchema)]
struct PostsPayload {
    posts: Vec<Post>,
}

/// Payload of the creation endpoint.
#[derive(Debug, Serialize, ToSchema)]
struct PostPayload {
    post: Post,
}

/// Extract a required string field from the raw JSON body.
///
/// The body is inspected as a raw value so that a missing field, a
/// wrong-typed field, and a blank field all produce the same
/// field-specific message.
fn require_string_field<'a>(
    payload: &'a Value,
    key: &str,
    message: &'static str,
) -> ApiResult<&'a str> {
    match payload.get(key).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ApiError::bad_request(message)),
    }
}

/// List all posts of a user
#[utoipa::path(
    get,
    path = "",
    tag = "Posts",
    params(
        ("userId" = String, Query, description = "Owning user id")
    ),
    responses(
        (status = 200, description = "The user's posts, enveloped", body = PostsPayload),
        (status = 400, description = "Missing userId"),
        (status = 500, description = "Store failure")
    )
)]
async fn list_posts<R: PostRepository>(
    State(service): State<Arc<PostService<R>>>,
    Query(query): Query<ListPostsQuery>,
) -> ApiResult<Response> {
    let user_id = match query.user_id {
        Some(ref id) if !id.is_empty() => id,
        _ => return Err(ApiError::bad_request("userId is required")),
    };

    let posts = service.get_posts(user_id).await?;
    Ok(response::success(
        StatusCode::OK,
        "Posts fetched successfully",
        PostsPayload { posts },
    ))
}

/// Create a post
#[utoipa::path(
    post,
    path = "",
    tag = "Posts",
    request_body = Object,
    responses(
        (status = 201, description = "The created post as stored, enveloped", body = PostPayload),
        (status = 400, description = "Missing or invalid field"),
        (status = 404, description = "Unknown user"),
        (status = 500, description = "Store failure")
    )
)]
async fn create_post<R: PostRepository>(
    State(service): State<Arc<PostService<R>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(payload) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let title = require_string_field(
        &payload,
        "title",
        "Title is required and must be a non-empty string",
    )?;
    let body = require_string_field(
        &payload,
        "body",
        "Body is required and must be a non-empty string",
    )?;
    let user_id = require_string_field(
        &payload,
        "user_id",
        "User ID is required and must be a non-empty string",
    )?;

    let post = service
        .create_post(NewPost {
            title: title.trim().to_string(),
            body: body.trim().to_string(),
            user_id: user_id.to_string(),
        })
        .await?;

    Ok(response::success(
        StatusCode::CREATED,
        "Post created successfully",
        PostPayload { post },
    ))
}

/// Delete a post by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Posts",
    params(
        ("id" = String, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Deleted; data is null"),
        (status = 400, description = "Empty id"),
        (status = 404, description = "Unknown post"),
        (status = 500, description = "Store failure")
    )
)]
async fn delete_post<R: PostRepository>(
    State(service): State<Arc<PostService<R>>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    if id.is_empty() {
        return Err(ApiError::bad_request("Post ID is required"));
    }

    service.delete_post(&id).await?;
    Ok(response::success_empty(
        StatusCode::OK,
        "Post deleted successfully",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_string_field_accepts_content() {
        let payload = json!({"title": "Hello"});
        assert_eq!(
            require_string_field(&payload, "title", "msg").unwrap(),
            "Hello"
        );
    }

    #[test]
    fn test_require_string_field_rejects_missing_blank_and_wrong_type() {
        let cases = [
            json!({}),
            json!({"title": "   "}),
            json!({"title": 42}),
            json!({"title": null}),
            json!({"title": ["x"]}),
        ];

        for payload in cases {
            let err = require_string_field(&payload, "title", "msg").unwrap_err();
            assert_eq!(err.to_string(), "msg");
        }
    }

    #[test]
    fn test_require_string_field_keeps_surrounding_whitespace() {
        // Trimming is the caller's decision; user_id is stored verbatim
        let payload = json!({"body": " B "});
        assert_eq!(require_string_field(&payload, "body", "msg").unwrap(), " B ");
    }
}
