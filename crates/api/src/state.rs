use std::sync::Arc;

use railab_db::store::LabStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// People and project store (PostgreSQL or in-memory).
    pub store: Arc<dyn LabStore>,
    /// Server configuration (read by the mutation guard).
    pub config: Arc<ServerConfig>,
}
