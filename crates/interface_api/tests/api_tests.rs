//! HTTP API tests
//!
//! Exercise the full router over the in-memory adapters, checking both
//! happy paths and the error-to-status mapping.

use axum_test::TestServer;
use serde_json::{json, Value};

use domain_items::ItemStatus;
use interface_api::{create_router, AppState};
use test_utils::TestRegistry;

fn test_server() -> (TestServer, TestRegistry) {
    let registry = TestRegistry::new();
    // The pool is never connected; handlers go through the in-memory stores
    let pool = sqlx::PgPool::connect_lazy("postgres://localhost/unused")
        .expect("lazy pool");
    let state = AppState::with_services(
        pool,
        registry.items.clone(),
        registry.claims.clone(),
        registry.directory.clone(),
    );
    let server = TestServer::new(create_router(state)).expect("test server");
    (server, registry)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _) = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_report_and_fetch_item() {
    let (server, registry) = test_server();
    let reporter = registry.seed_user().await;
    let category = registry.seed_category("Electronics").await;
    let department = registry.seed_department("Library").await;

    let response = server
        .post("/api/v1/items")
        .json(&json!({
            "title": "Black umbrella",
            "location": "Main lobby",
            "status": "FOUND",
            "reporter_id": reporter.id,
            "category_id": category.id,
            "department_id": department.id,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["status"], "FOUND");

    let id = created["id"].as_str().unwrap();
    let response = server.get(&format!("/api/v1/items/{id}")).await;
    response.assert_status_ok();

    let fetched: Value = response.json();
    assert_eq!(fetched["title"], "Black umbrella");
}

#[tokio::test]
async fn test_report_item_blank_title_is_400() {
    let (server, registry) = test_server();
    let reporter = registry.seed_user().await;
    let category = registry.seed_category("Electronics").await;
    let department = registry.seed_department("Library").await;

    let response = server
        .post("/api/v1/items")
        .json(&json!({
            "title": "   ",
            "status": "LOST",
            "reporter_id": reporter.id,
            "category_id": category.id,
            "department_id": department.id,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_get_unknown_item_is_404() {
    let (server, _) = test_server();

    let response = server
        .get(&format!("/api/v1/items/{}", uuid::Uuid::new_v4()))
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_list_items_by_status() {
    let (server, registry) = test_server();
    registry.seed_item(ItemStatus::Found).await;
    registry.seed_item(ItemStatus::Lost).await;

    let response = server.get("/api/v1/items/status/FOUND").await;
    response.assert_status_ok();
    let found: Vec<Value> = response.json();
    assert_eq!(found.len(), 1);

    let response = server.get("/api/v1/items/status/BROKEN").await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_items() {
    let (server, registry) = test_server();
    registry.seed_item(ItemStatus::Found).await;

    let response = server
        .get("/api/v1/items/search")
        .add_query_param("title", "backpack")
        .await;
    response.assert_status_ok();
    let hits: Vec<Value> = response.json();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn test_claim_lifecycle_over_http() {
    let (server, registry) = test_server();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    // file via the item-scoped route
    let response = server
        .post(&format!("/api/v1/items/{}/claim", item.id.as_uuid()))
        .json(&json!({
            "user_id": claimant.id,
            "verification_answer": "blue backpack with stickers",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let claim: Value = response.json();
    assert_eq!(claim["status"], "PENDING");
    assert_eq!(claim["verified"], false);

    // item is now CLAIMED
    let response = server.get(&format!("/api/v1/items/{}", item.id.as_uuid())).await;
    let fetched: Value = response.json();
    assert_eq!(fetched["status"], "CLAIMED");

    // approve: claim APPROVED/verified, item RETURNED
    let claim_id = claim["id"].as_str().unwrap();
    let response = server
        .put(&format!("/api/v1/claims/{claim_id}/approve"))
        .await;
    response.assert_status_ok();
    let approved: Value = response.json();
    assert_eq!(approved["status"], "APPROVED");
    assert_eq!(approved["verified"], true);

    let response = server.get(&format!("/api/v1/items/{}", item.id.as_uuid())).await;
    let fetched: Value = response.json();
    assert_eq!(fetched["status"], "RETURNED");
}

#[tokio::test]
async fn test_claim_on_lost_item_is_400() {
    let (server, registry) = test_server();
    let item = registry.seed_item(ItemStatus::Lost).await;
    let claimant = registry.seed_user().await;

    let response = server
        .post("/api/v1/claims")
        .json(&json!({
            "item_id": item.id,
            "user_id": claimant.id,
            "verification_answer": "it is mine",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_self_claim_is_400() {
    let (server, registry) = test_server();
    let item = registry.seed_item(ItemStatus::Found).await;

    let response = server
        .post("/api/v1/claims")
        .json(&json!({
            "item_id": item.id,
            "user_id": item.reporter_id,
            "verification_answer": "I reported it",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reject_reopens_item() {
    let (server, registry) = test_server();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;

    let claim = registry
        .claims
        .file_claim(item.id, claimant.id, "green scarf")
        .await
        .unwrap();

    let response = server
        .put(&format!("/api/v1/claims/{}/reject", claim.id.as_uuid()))
        .await;
    response.assert_status_ok();
    let rejected: Value = response.json();
    assert_eq!(rejected["status"], "REJECTED");

    let response = server.get(&format!("/api/v1/items/{}", item.id.as_uuid())).await;
    let fetched: Value = response.json();
    assert_eq!(fetched["status"], "FOUND");
}

#[tokio::test]
async fn test_pending_and_verified_claim_listings() {
    let (server, registry) = test_server();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;
    let claim = registry
        .claims
        .file_claim(item.id, claimant.id, "red wallet")
        .await
        .unwrap();

    let response = server.get("/api/v1/claims/pending").await;
    let pending: Vec<Value> = response.json();
    assert_eq!(pending.len(), 1);

    registry.claims.approve_claim(claim.id).await.unwrap();

    let response = server.get("/api/v1/claims/verified").await;
    let verified: Vec<Value> = response.json();
    assert_eq!(verified.len(), 1);

    let response = server.get("/api/v1/claims/pending").await;
    let pending: Vec<Value> = response.json();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_register_login_and_duplicate_conflict() {
    let (server, _) = test_server();

    let response = server
        .post("/api/v1/users/register")
        .json(&json!({
            "email": "dana@campus.edu",
            "username": "dana",
            "first_name": "Dana",
            "last_name": "Reyes",
            "password": "hunter2hunter2",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let user: Value = response.json();
    assert!(user.get("password_hash").is_none());

    let response = server
        .post("/api/v1/users/login")
        .json(&json!({ "login": "dana@campus.edu", "password": "hunter2hunter2" }))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/api/v1/users/login")
        .json(&json!({ "login": "dana", "password": "wrong-password" }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    // same email again
    let response = server
        .post("/api/v1/users/register")
        .json(&json!({
            "email": "dana@campus.edu",
            "username": "dana2",
            "first_name": "Dana",
            "last_name": "Reyes",
            "password": "hunter2hunter2",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_category_crud_and_delete_in_use() {
    let (server, registry) = test_server();

    let response = server
        .post("/api/v1/categories")
        .json(&json!({ "name": "Keys" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let category: Value = response.json();
    let id = category["id"].as_str().unwrap().to_string();

    let response = server
        .put(&format!("/api/v1/categories/{id}"))
        .json(&json!({ "name": "Keycards" }))
        .await;
    response.assert_status_ok();

    // reference the category from an item, then deletion conflicts
    let reporter = registry.seed_user().await;
    let department = registry.seed_department("Registrar").await;
    registry
        .items
        .create_item(
            test_utils::ItemBuilder::new()
                .with_reporter(reporter.id)
                .with_category(id.parse().unwrap())
                .with_department(department.id)
                .build(),
        )
        .await
        .unwrap();

    let response = server.delete(&format!("/api/v1/categories/{id}")).await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_item_cascades_claims() {
    let (server, registry) = test_server();
    let item = registry.seed_item(ItemStatus::Found).await;
    let claimant = registry.seed_user().await;
    let claim = registry
        .claims
        .file_claim(item.id, claimant.id, "laptop sleeve")
        .await
        .unwrap();

    let response = server.delete(&format!("/api/v1/items/{}", item.id.as_uuid())).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/v1/claims/{}", claim.id.as_uuid())).await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}
