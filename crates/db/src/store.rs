//! The store contract used by the API layer.
//!
//! Every operation touches a single record (or reads a list), so there is
//! no cross-record transaction anywhere in this trait.

use async_trait::async_trait;
use railab_core::types::DbId;

use crate::models::person::{NewPerson, Person, UpdatePerson};
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::repositories::{PersonRepo, ProjectRepo};
use crate::DbPool;

/// Failure of the persistence layer itself (not "record missing").
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for people and projects.
///
/// Lookups by id return `Ok(None)` / `Ok(false)` when the record does not
/// exist. Update DTOs are applied verbatim: every `Some` field is written.
#[async_trait]
pub trait LabStore: Send + Sync {
    /// Check that the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    // ---- people ----

    /// People with the given `is_active` flag, in listing order.
    async fn list_people(&self, is_active: bool) -> StoreResult<Vec<Person>>;

    async fn find_person(&self, id: DbId) -> StoreResult<Option<Person>>;

    /// People whose id is in `ids`, in no particular order. Unknown ids are skipped.
    async fn find_people_by_ids(&self, ids: &[DbId]) -> StoreResult<Vec<Person>>;

    async fn create_person(&self, input: &NewPerson) -> StoreResult<Person>;

    async fn update_person(&self, id: DbId, input: &UpdatePerson) -> StoreResult<Option<Person>>;

    async fn delete_person(&self, id: DbId) -> StoreResult<bool>;

    // ---- projects ----

    /// All projects, in listing order.
    async fn list_projects(&self) -> StoreResult<Vec<Project>>;

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>>;

    async fn create_project(&self, input: &NewProject) -> StoreResult<Project>;

    async fn update_project(&self, id: DbId, input: &UpdateProject)
        -> StoreResult<Option<Project>>;

    async fn delete_project(&self, id: DbId) -> StoreResult<bool>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabStore for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }

    async fn list_people(&self, is_active: bool) -> StoreResult<Vec<Person>> {
        Ok(PersonRepo::list_by_active(&self.pool, is_active).await?)
    }

    async fn find_person(&self, id: DbId) -> StoreResult<Option<Person>> {
        Ok(PersonRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_people_by_ids(&self, ids: &[DbId]) -> StoreResult<Vec<Person>> {
        Ok(PersonRepo::find_by_ids(&self.pool, ids).await?)
    }

    async fn create_person(&self, input: &NewPerson) -> StoreResult<Person> {
        Ok(PersonRepo::create(&self.pool, input).await?)
    }

    async fn update_person(&self, id: DbId, input: &UpdatePerson) -> StoreResult<Option<Person>> {
        Ok(PersonRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_person(&self, id: DbId) -> StoreResult<bool> {
        Ok(PersonRepo::delete(&self.pool, id).await?)
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_project(&self, input: &NewProject) -> StoreResult<Project> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }
}
