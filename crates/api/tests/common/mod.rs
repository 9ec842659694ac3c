#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use railab_api::config::ServerConfig;
use railab_api::router::build_app_router;
use railab_api::state::AppState;
use railab_db::memory::MemoryStore;
use railab_db::store::LabStore;

/// Token used by tests that turn the mutation guard on.
pub const TEST_TOKEN: &str = "test-admin-token";

/// Build a test `ServerConfig` with safe defaults and no admin token.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        admin_token: None,
    }
}

/// A fresh, empty in-memory store. Clone the `Arc` to share it across
/// several apps within one test.
pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over the given store.
pub fn build_test_app(store: Arc<dyn LabStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: Arc<dyn LabStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Same as [`build_test_app`] with `ADMIN_TOKEN` set to [`TEST_TOKEN`].
pub fn build_guarded_app(store: Arc<dyn LabStore>) -> Router {
    let config = ServerConfig {
        admin_token: Some(TEST_TOKEN.to_string()),
        ..test_config()
    };
    build_test_app_with_config(store, config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// POST a person through the API and return the created id.
pub async fn seed_person(store: &Arc<MemoryStore>, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(store.clone()), "/api/people", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// POST a project through the API and return the created id.
pub async fn seed_project(store: &Arc<MemoryStore>, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(store.clone()), "/api/projects", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
