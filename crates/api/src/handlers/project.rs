//! Handlers for the `/projects` resource.
//!
//! Read routes return [`ProjectView`]s with `teamMembers` resolved against
//! the people table. Write routes return the stored [`Project`] with raw ids.

use std::collections::{BTreeSet, HashMap};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railab_core::types::{parse_db_id, DbId};
use railab_db::models::person::Person;
use railab_db::models::project::{
    CreateProject, Project, ProjectView, TeamDetail, UpdateProject,
};
use railab_db::store::LabStore;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireEditor;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Project";

/// Fetch every person referenced by `projects` in a single store call.
async fn team_index(
    store: &dyn LabStore,
    projects: &[Project],
) -> AppResult<HashMap<DbId, Person>> {
    let ids: Vec<DbId> = projects
        .iter()
        .flat_map(|p| p.team_members.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let people = store.find_people_by_ids(&ids).await?;
    Ok(people.into_iter().map(|p| (p.id, p)).collect())
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectView>>> {
    let projects = state.store.list_projects().await?;
    let people = team_index(state.store.as_ref(), &projects).await?;

    let views = projects
        .into_iter()
        .map(|p| ProjectView::resolve(p, &people, TeamDetail::Card))
        .collect();
    Ok(Json(views))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ProjectView>> {
    let id = parse_db_id(ENTITY, &raw_id)?;
    let project = state
        .store
        .find_project(id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;

    let people = team_index(state.store.as_ref(), std::slice::from_ref(&project)).await?;
    Ok(Json(ProjectView::resolve(project, &people, TeamDetail::Full)))
}

/// POST /api/projects
///
/// Team member ids are stored as given; they are not checked against the
/// people table.
pub async fn create(
    _editor: RequireEditor,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let new = input.into_new()?;
    let project = state.store.create_project(&new).await?;
    tracing::info!(
        project_id = project.id,
        status = %project.status,
        team_size = project.team_members.len(),
        "Project created",
    );
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
pub async fn update(
    _editor: RequireEditor,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let id = parse_db_id(ENTITY, &raw_id)?;
    let changes = input.apply_field_policy();
    let project = state
        .store
        .update_project(id, &changes)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    _editor: RequireEditor,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_db_id(ENTITY, &raw_id)?;
    if !state.store.delete_project(id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(project_id = id, "Project removed");
    Ok(Json(MessageResponse {
        msg: "Project removed",
    }))
}
