//! Tests for `AppError` → HTTP response mapping.
//!
//! Most tests call `IntoResponse` directly on `AppError` values. The last
//! group drives the router over a store whose every call fails.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use railab_api::error::AppError;
use railab_core::error::CoreError;
use railab_core::types::DbId;
use railab_db::models::person::{NewPerson, Person, UpdatePerson};
use railab_db::models::project::{NewProject, Project, UpdateProject};
use railab_db::store::{LabStore, StoreError, StoreResult};
use serde_json::json;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id 42 not found");
}

#[tokio::test]
async fn invalid_identifier_returns_400_without_echoing_input() {
    let err = AppError::Core(CoreError::InvalidIdentifier {
        entity: "Person",
        raw: "<script>".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_ID");
    assert_eq!(json["error"], "Invalid ID format");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name is required");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Invalid admin token".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal("secret database credentials leaked".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn store_unavailable_returns_500_and_sanitizes_message() {
    let err = AppError::Store(StoreError::Unavailable("connection refused at 10.0.0.5".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn sqlx_row_not_found_returns_404() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::RowNotFound));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_sqlx_errors_return_500() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

// ---------------------------------------------------------------------------
// Store failures through the router
// ---------------------------------------------------------------------------

/// A store whose every operation fails.
struct BrokenStore;

fn broken<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable("store is down".into()))
}

#[async_trait]
impl LabStore for BrokenStore {
    async fn ping(&self) -> StoreResult<()> {
        broken()
    }
    async fn list_people(&self, _is_active: bool) -> StoreResult<Vec<Person>> {
        broken()
    }
    async fn find_person(&self, _id: DbId) -> StoreResult<Option<Person>> {
        broken()
    }
    async fn find_people_by_ids(&self, _ids: &[DbId]) -> StoreResult<Vec<Person>> {
        broken()
    }
    async fn create_person(&self, _input: &NewPerson) -> StoreResult<Person> {
        broken()
    }
    async fn update_person(&self, _id: DbId, _input: &UpdatePerson) -> StoreResult<Option<Person>> {
        broken()
    }
    async fn delete_person(&self, _id: DbId) -> StoreResult<bool> {
        broken()
    }
    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        broken()
    }
    async fn find_project(&self, _id: DbId) -> StoreResult<Option<Project>> {
        broken()
    }
    async fn create_project(&self, _input: &NewProject) -> StoreResult<Project> {
        broken()
    }
    async fn update_project(
        &self,
        _id: DbId,
        _input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        broken()
    }
    async fn delete_project(&self, _id: DbId) -> StoreResult<bool> {
        broken()
    }
}

#[tokio::test]
async fn store_failure_on_list_returns_generic_500() {
    let app = common::build_test_app(Arc::new(BrokenStore));
    let response = common::get(app, "/api/people").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
    assert!(!json.to_string().contains("store is down"));
}

#[tokio::test]
async fn malformed_id_is_rejected_before_the_store_is_touched() {
    let app = common::build_test_app(Arc::new(BrokenStore));
    let response = common::get(app, "/api/projects/oops").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validation_runs_before_the_store_is_touched() {
    let app = common::build_test_app(Arc::new(BrokenStore));
    let response = common::post_json(app, "/api/people", json!({"name": "Ada"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::body_json(response).await["code"], "VALIDATION_ERROR");
}
