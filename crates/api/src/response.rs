//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "msg": "..." }` confirmation body, returned by deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}
