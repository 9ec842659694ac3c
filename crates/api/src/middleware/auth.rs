//! Mutation guard for the write routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use railab_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Marker extractor placed first in every create/update/delete handler.
///
/// When `ADMIN_TOKEN` is configured the request must carry
/// `Authorization: Bearer <token>` with that exact value. Without a
/// configured token every request is admitted.
///
/// ```ignore
/// async fn create(_editor: RequireEditor, State(state): State<AppState>) -> AppResult<()> {
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireEditor;

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            tracing::debug!(path = %parts.uri.path(), "No admin token configured, mutation admitted");
            return Ok(RequireEditor);
        };

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if token != expected {
            tracing::warn!(path = %parts.uri.path(), "Rejected mutation with wrong admin token");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin token".into(),
            )));
        }

        Ok(RequireEditor)
    }
}
