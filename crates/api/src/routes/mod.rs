pub mod health;
pub mod person;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /people      people CRUD and the alumni listing
/// /projects    project CRUD with resolved teams
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/people", person::router())
        .nest("/projects", project::router())
}
