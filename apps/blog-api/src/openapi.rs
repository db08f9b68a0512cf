//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "Users and posts over an embedded SQLite store",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/users", api = domain_users::ApiDoc),
        (path = "/posts", api = domain_posts::ApiDoc)
    ),
    tags(
        (name = "Users", description = "Paginated user listing and lookup"),
        (name = "Posts", description = "Post creation, listing, and deletion")
    )
)]
pub struct ApiDoc;
