mod common;

use axum::http::Method;
use common::json_body;
use serde_json::json;

#[tokio::test]
async fn tasks_are_managed_through_their_goal() {
    let app = common::spawn_app().await;
    let client = app.create_client("Acme").await;
    let goal = app.create_goal(&client, "Run", "Run a marathon").await;
    let task = app.create_task(&goal, "Shoes", "").await;
    let task_uri = format!("/api/v1/manager/goals/{}/tasks/{}", goal, task);

    let updated = app
        .send_json(Method::PUT, &task_uri, json!({ "description": "Trail shoes" }))
        .await;
    assert_eq!(updated.status(), 200);
    let body = json_body(updated).await;
    assert_eq!(body["name"], "Shoes");
    assert_eq!(body["description"], "Trail shoes");

    assert_eq!(app.delete(&task_uri).await.status(), 204);
    let list = json_body(
        app.get(&format!("/api/v1/manager/goals/{}/tasks", goal))
            .await,
    )
    .await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn task_without_name_is_unprocessable() {
    let app = common::spawn_app().await;
    let client = app.create_client("Acme").await;
    let goal = app.create_goal(&client, "Run", "Run a marathon").await;

    let response = app
        .send_json(
            Method::POST,
            &format!("/api/v1/manager/goals/{}/tasks", goal),
            json!({ "description": "No name" }),
        )
        .await;
    assert_eq!(response.status(), 422);
    let body = json_body(response).await;
    assert_eq!(body["errors"]["name"], json!(["can't be blank"]));
}

#[tokio::test]
async fn task_from_another_goal_is_not_found() {
    let app = common::spawn_app().await;
    let client = app.create_client("Acme").await;
    let first = app.create_goal(&client, "Run", "Run a marathon").await;
    let second = app.create_goal(&client, "Read", "Read books").await;
    let task = app.create_task(&first, "Shoes", "").await;

    let response = app
        .delete(&format!("/api/v1/manager/goals/{}/tasks/{}", second, task))
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn clients_can_be_listed_and_fetched() {
    let app = common::spawn_app().await;
    let id = app.create_client("Acme").await;

    let list = json_body(app.get("/api/v1/manager/clients").await).await;
    assert_eq!(list[0]["name"], "Acme");

    let one = json_body(app.get(&format!("/api/v1/manager/clients/{}", id)).await).await;
    assert_eq!(one["id"], id.as_str());
    assert_eq!(
        app.get("/api/v1/manager/clients/missing").await.status(),
        404
    );
}
