//! Route definitions for the `/people` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET    /          -> list_active
/// POST   /          -> create
/// GET    /alumni    -> list_alumni
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(person::list_active).post(person::create))
        .route("/alumni", get(person::list_alumni))
        .route(
            "/{id}",
            get(person::get_by_id)
                .put(person::update)
                .delete(person::delete),
        )
}
