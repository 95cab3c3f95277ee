#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
    Router,
};
use goalmanager_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let dir = tempdir().unwrap();
    let mut config = Config {
        db_path: dir.path().join("test.db").to_string_lossy().into_owned(),
        ..Config::default()
    };
    configure(&mut config);
    let state = build_state(&config).await.unwrap();
    TestApp {
        router: app_router(state, &config),
        _dir: dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: Value) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn create_client(&self, name: &str) -> String {
        let response = self
            .send_json(
                Method::POST,
                "/api/v1/manager/clients",
                serde_json::json!({ "name": name }),
            )
            .await;
        assert_eq!(response.status(), 201);
        json_body(response).await["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    /// Creates a goal and returns its id, taken from the redirect target.
    pub async fn create_goal(&self, client_id: &str, name: &str, description: &str) -> String {
        let response = self
            .send_json(
                Method::POST,
                "/api/v1/manager/goals",
                serde_json::json!({
                    "clientId": client_id,
                    "name": name,
                    "description": description,
                }),
            )
            .await;
        assert_eq!(response.status(), 303);
        location(&response)
            .rsplit('/')
            .next()
            .unwrap()
            .to_string()
    }

    pub async fn create_task(&self, goal_id: &str, name: &str, description: &str) -> String {
        let response = self
            .send_json(
                Method::POST,
                &format!("/api/v1/manager/goals/{}/tasks", goal_id),
                serde_json::json!({ "name": name, "description": description }),
            )
            .await;
        assert_eq!(response.status(), 201);
        json_body(response).await["id"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn goal_names(index: &Value) -> Vec<String> {
    index["goals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap().to_string())
        .collect()
}
