//! HTTP-level integration tests for the `/api/people` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! over an in-memory store.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, memory_store, post_json, put_json, seed_person};
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_person_returns_201_with_defaults() {
    let store = memory_store();
    let response = post_json(
        build_test_app(store.clone()),
        "/api/people",
        json!({"name": "  Ada Lovelace ", "role": "Professor", "email": "ADA@lab.org"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["email"], "ada@lab.org");
    assert_eq!(json["isActive"], true);
    assert_eq!(json["order"], 0);
    assert_eq!(json["researchInterests"], json!([]));
    assert!(json["imageUrl"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn create_person_without_name_returns_400() {
    let response = post_json(
        build_test_app(memory_store()),
        "/api/people",
        json!({"role": "Postdoc"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_on_empty_store_returns_empty_array() {
    let response = get(build_test_app(memory_store()), "/api/people").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_returns_active_people_in_listing_order() {
    let store = memory_store();
    seed_person(&store, json!({"name": "Prof", "role": "Professor", "order": 1})).await;
    seed_person(&store, json!({"name": "Zed", "role": "PhD Student"})).await;
    seed_person(&store, json!({"name": "Amy", "role": "PhD Student"})).await;
    seed_person(&store, json!({"name": "Gone", "role": "Postdoc", "isActive": false})).await;

    let response = get(build_test_app(store.clone()), "/api/people").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Amy", "Zed", "Prof"]);
}

#[tokio::test]
async fn alumni_lists_only_inactive_people() {
    let store = memory_store();
    seed_person(&store, json!({"name": "Here", "role": "Postdoc"})).await;
    seed_person(&store, json!({"name": "Gone", "role": "Postdoc", "isActive": false})).await;

    let json = body_json(get(build_test_app(store.clone()), "/api/people/alumni").await).await;
    let people = json.as_array().unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0]["name"], "Gone");
    assert_eq!(people[0]["isActive"], false);
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_person_by_id() {
    let store = memory_store();
    let id = seed_person(&store, json!({"name": "Ada", "role": "Professor"})).await;

    let response = get(build_test_app(store.clone()), &format!("/api/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Ada");
}

#[tokio::test]
async fn get_nonexistent_person_returns_404() {
    let response = get(build_test_app(memory_store()), "/api/people/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_person_id_returns_400() {
    for uri in ["/api/people/not-an-id", "/api/people/-3", "/api/people/0"] {
        let response = get(build_test_app(memory_store()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_ID");
        assert_eq!(json["error"], "Invalid ID format");
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_bio_does_not_clear_existing_bio() {
    let store = memory_store();
    let id = seed_person(
        &store,
        json!({"name": "Ada", "role": "Professor", "bio": "Works on engines."}),
    )
    .await;

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/people/{id}"),
        json!({"bio": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["bio"], "Works on engines.");
}

#[tokio::test]
async fn deactivating_moves_person_to_alumni() {
    let store = memory_store();
    let id = seed_person(&store, json!({"name": "Ada", "role": "Professor", "order": 4})).await;

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/people/{id}"),
        json!({"isActive": false, "order": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["isActive"], false);
    assert_eq!(json["order"], 0);

    let active = body_json(get(build_test_app(store.clone()), "/api/people").await).await;
    assert_eq!(active, json!([]));

    let alumni = body_json(get(build_test_app(store.clone()), "/api/people/alumni").await).await;
    assert_eq!(alumni[0]["id"], id);
}

#[tokio::test]
async fn update_applies_non_empty_text_and_keeps_the_rest() {
    let store = memory_store();
    let id = seed_person(
        &store,
        json!({"name": "Ada", "role": "Postdoc", "researchInterests": ["graphs"]}),
    )
    .await;

    let response = put_json(
        build_test_app(store.clone()),
        &format!("/api/people/{id}"),
        json!({"role": "Assistant Professor", "researchInterests": []}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["role"], "Assistant Professor");
    assert_eq!(json["researchInterests"], json!([]));
}

#[tokio::test]
async fn update_nonexistent_person_returns_404() {
    let response = put_json(
        build_test_app(memory_store()),
        "/api/people/42",
        json!({"name": "Nobody"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_malformed_id_returns_400() {
    let response = put_json(
        build_test_app(memory_store()),
        "/api/people/abc",
        json!({"name": "Nobody"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_ID");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_then_get_returns_404() {
    let store = memory_store();
    let id = seed_person(&store, json!({"name": "Ada", "role": "Professor"})).await;

    let response = delete(build_test_app(store.clone()), &format!("/api/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"msg": "Person removed"}));

    let response = get(build_test_app(store.clone()), &format!("/api/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(build_test_app(store.clone()), &format!("/api/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_malformed_id_returns_400() {
    let store = memory_store();
    seed_person(&store, json!({"name": "Ada", "role": "Professor"})).await;

    for uri in ["/api/people/abc", "/api/people/0", "/api/people/1.5"] {
        let response = delete(build_test_app(store.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["code"], "INVALID_ID");
    }

    let json = body_json(get(build_test_app(store.clone()), "/api/people").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
