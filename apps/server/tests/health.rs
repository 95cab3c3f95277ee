mod common;

use axum::body::to_bytes;

#[tokio::test]
async fn healthz_works() {
    let app = common::spawn_app().await;
    let response = app.get("/api/v1/healthz").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn readyz_reports_ready_once_migrated() {
    let app = common::spawn_app().await;
    let response = app.get("/api/v1/readyz").await;
    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, "ok".as_bytes());
}

#[tokio::test]
async fn openapi_document_lists_goal_routes() {
    let app = common::spawn_app().await;
    let response = app.get("/openapi.json").await;
    assert_eq!(response.status(), 200);
    let doc = common::json_body(response).await;
    assert!(doc["paths"]["/api/v1/manager/goals"].is_object());
    assert!(doc["paths"]["/api/v1/manager/goals/{id}"].is_object());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = common::spawn_app().await;
    let response = app.get("/api/v1/healthz").await;
    assert!(response.headers().contains_key("x-request-id"));
}
