use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use axum_helpers::{response, ApiError, ApiResult};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Address, Pagination, User, UserCount, UsersPage};
use crate::repository::UserRepository;
use crate::service::UserService;

const DEFAULT_PAGE_NUMBER: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, count_users, get_user),
    components(schemas(User, Address, Pagination, UsersPage, UserCount)),
    tags(
        (name = "Users", description = "Paginated user listing and lookup")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints.
///
/// `/count` is a literal segment registered alongside the `{id}` capture;
/// Axum gives literals priority over captures regardless of declaration
/// order, so `count` can never be misread as a user id.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users))
        .route("/count", get(count_users))
        .route("/{id}", get(get_user))
        .with_state(shared_service)
}

/// Query parameters for the user listing.
///
/// `page`/`limit` are legacy synonyms, consulted only when the primary
/// names are absent or empty.
#[derive(Debug, Deserialize)]
struct ListUsersQuery {
    #[serde(rename = "pageNumber")]
    page_number: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

/// Resolve a pagination parameter: primary name first, then the legacy
/// fallback; absent or non-numeric values yield the default. Range
/// checking happens at the call site so both parameters share one error.
fn resolve_page_param(primary: Option<&str>, fallback: Option<&str>, default: i64) -> i64 {
    primary
        .filter(|s| !s.is_empty())
        .or(fallback.filter(|s| !s.is_empty()))
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(default)
}

/// List users with pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    params(
        ("pageNumber" = Option<String>, Query, description = "1-based page number, default 1"),
        ("pageSize" = Option<String>, Query, description = "Page size, default 10"),
        ("page" = Option<String>, Query, description = "Legacy synonym for pageNumber"),
        ("limit" = Option<String>, Query, description = "Legacy synonym for pageSize")
    ),
    responses(
        (status = 200, description = "One page of users with pagination metadata, enveloped", body = UsersPage),
        (status = 400, description = "Page or limit below 1"),
        (status = 500, description = "Store failure")
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Response> {
    let page_number = resolve_page_param(
        query.page_number.as_deref(),
        query.page.as_deref(),
        DEFAULT_PAGE_NUMBER,
    );
    let page_size = resolve_page_param(
        query.page_size.as_deref(),
        query.limit.as_deref(),
        DEFAULT_PAGE_SIZE,
    );

    if page_number < 1 || page_size < 1 {
        return Err(ApiError::bad_request("Page and limit must be greater than 0"));
    }

    let page = service.get_users_page(page_number, page_size).await?;
    Ok(response::success(
        StatusCode::OK,
        "Users fetched successfully",
        page,
    ))
}

/// Total user count
#[utoipa::path(
    get,
    path = "/count",
    tag = "Users",
    responses(
        (status = 200, description = "Total number of users, enveloped", body = UserCount),
        (status = 500, description = "Store failure")
    )
)]
async fn count_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> ApiResult<Response> {
    let count = service.get_users_count().await?;
    Ok(response::success(
        StatusCode::OK,
        "User count fetched successfully",
        UserCount { count },
    ))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user, enveloped", body = User),
        (status = 400, description = "Empty id"),
        (status = 404, description = "Unknown user"),
        (status = 500, description = "Store failure")
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    if id.is_empty() {
        return Err(ApiError::bad_request("User ID is required"));
    }

    let user = service.get_user(&id).await?;
    Ok(response::success(
        StatusCode::OK,
        "User fetched successfully",
        user,
    ))
}
