//! Handler tests for the Users domain
//!
//! These drive the real router over an in-memory SQLite database and
//! verify:
//! - the `{success, message, data}` envelope on every response
//! - pagination defaults, legacy parameter names, and range validation
//! - the all-or-nothing address mapping
//! - 404 behavior and the `/count` vs `/{id}` route precedence

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_users::{handlers, SqliteUserRepository, UserService};
use http_body_util::BodyExt;
use test_utils::TestDatabase;
use tower::ServiceExt; // For oneshot()

fn app(db: &TestDatabase) -> Router {
    let repository = SqliteUserRepository::new(db.connection());
    let service = UserService::new(repository);
    handlers::router(service)
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_users_defaults_to_first_page_of_ten() {
    let db = TestDatabase::new().await;
    db.seed_users(15).await;

    let (status, body) = get(app(&db), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Users fetched successfully");
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 10);

    let pagination = &body["data"]["pagination"];
    assert_eq!(pagination["page"], 1);
    assert_eq!(pagination["limit"], 10);
    assert_eq!(pagination["total"], 15);
    assert_eq!(pagination["totalPages"], 2);
}

#[tokio::test]
async fn test_list_users_second_page_offset() {
    let db = TestDatabase::new().await;
    db.seed_users(15).await;

    let (status, body) = get(app(&db), "/?pageNumber=2&pageSize=10").await;

    assert_eq!(status, StatusCode::OK);
    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 5);
    assert_eq!(users[0]["id"], "user-011");
    assert_eq!(body["data"]["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn test_list_users_second_page_of_four_hundred() {
    let db = TestDatabase::new().await;
    db.seed_users(400).await;

    let (status, body) = get(app(&db), "/?pageNumber=2&pageSize=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["users"].as_array().unwrap().len(), 10);

    let pagination = &body["data"]["pagination"];
    assert_eq!(pagination["total"], 400);
    assert_eq!(pagination["totalPages"], 40);
}

#[tokio::test]
async fn test_list_users_accepts_legacy_page_and_limit() {
    let db = TestDatabase::new().await;
    db.seed_users(12).await;

    let (status, body) = get(app(&db), "/?page=2&limit=5").await;

    assert_eq!(status, StatusCode::OK);
    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 5);
    assert_eq!(users[0]["id"], "user-006");
    assert_eq!(body["data"]["pagination"]["page"], 2);
    assert_eq!(body["data"]["pagination"]["limit"], 5);
}

#[tokio::test]
async fn test_list_users_non_numeric_params_fall_back_to_defaults() {
    let db = TestDatabase::new().await;
    db.seed_users(3).await;

    let (status, body) = get(app(&db), "/?pageNumber=abc&pageSize=xyz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["page"], 1);
    assert_eq!(body["data"]["pagination"]["limit"], 10);
}

#[tokio::test]
async fn test_list_users_rejects_page_below_one() {
    let db = TestDatabase::new().await;
    db.seed_users(3).await;

    for uri in ["/?pageNumber=0", "/?pageSize=0", "/?pageNumber=-2", "/?page=0"] {
        let (status, body) = get(app(&db), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Page and limit must be greater than 0");
        assert!(body["data"].is_null());
    }
}

#[tokio::test]
async fn test_list_users_empty_store() {
    let db = TestDatabase::new().await;

    let (status, body) = get(app(&db), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["users"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["pagination"]["total"], 0);
    assert_eq!(body["data"]["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn test_address_is_all_or_nothing() {
    let db = TestDatabase::new().await;
    db.insert_user_with_address("user-001").await;
    db.insert_user("user-002").await;

    let (status, body) = get(app(&db), "/").await;
    assert_eq!(status, StatusCode::OK);

    let users = body["data"]["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);

    let with_address = users[0].as_object().unwrap();
    let address = with_address["address"].as_object().unwrap();
    for field in ["street", "city", "state", "zipcode"] {
        assert!(address[field].is_string(), "missing address field {}", field);
    }

    // The whole key is absent, never a null or partial object
    let without_address = users[1].as_object().unwrap();
    assert!(!without_address.contains_key("address"));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let db = TestDatabase::new().await;
    db.insert_user_with_address("user-001").await;

    let (status, body) = get(app(&db), "/user-001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User fetched successfully");
    assert_eq!(body["data"]["id"], "user-001");
    assert_eq!(body["data"]["address"]["city"], "Springfield");
}

#[tokio::test]
async fn test_get_unknown_user_is_enveloped_404() {
    let db = TestDatabase::new().await;
    db.seed_users(1).await;

    let (status, body) = get(app(&db), "/user-999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User not found");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_count_users() {
    let db = TestDatabase::new().await;
    db.seed_users(7).await;

    let (status, body) = get(app(&db), "/count").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User count fetched successfully");
    assert_eq!(body["data"]["count"], 7);
}

#[tokio::test]
async fn test_count_route_takes_precedence_over_id_capture() {
    // With zero users, a "/count"-as-id lookup would be a 404; the
    // literal route must win and return the count payload instead.
    let db = TestDatabase::new().await;

    let (status, body) = get(app(&db), "/count").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 0);
}
