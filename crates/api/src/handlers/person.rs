//! Handlers for the `/people` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railab_core::types::parse_db_id;
use railab_db::models::person::{CreatePerson, Person, UpdatePerson};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireEditor;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Person";

/// GET /api/people
///
/// Active members, ordered by `order`, then role, then name.
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = state.store.list_people(true).await?;
    Ok(Json(people))
}

/// GET /api/people/alumni
pub async fn list_alumni(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = state.store.list_people(false).await?;
    Ok(Json(people))
}

/// GET /api/people/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Person>> {
    let id = parse_db_id(ENTITY, &raw_id)?;
    let person = state
        .store
        .find_person(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(person))
}

/// POST /api/people
pub async fn create(
    _editor: RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let new = input.into_new()?;
    let person = state.store.create_person(&new).await?;
    tracing::info!(person_id = person.id, role = %person.role, "Person created");
    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /api/people/{id}
///
/// Partial update. Empty text values are ignored, so a field cannot be
/// cleared through this route.
pub async fn update(
    _editor: RequireEditor,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<Person>> {
    let id = parse_db_id(ENTITY, &raw_id)?;
    let changes = input.apply_field_policy();
    let person = state
        .store
        .update_person(id, &changes)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(person_id = id, is_active = person.is_active, "Person updated");
    Ok(Json(person))
}

/// DELETE /api/people/{id}
///
/// Projects that reference the person keep the dangling id.
pub async fn delete(
    _editor: RequireEditor,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_db_id(ENTITY, &raw_id)?;
    if !state.store.delete_person(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(person_id = id, "Person removed");
    Ok(Json(MessageResponse {
        msg: "Person removed",
    }))
}
