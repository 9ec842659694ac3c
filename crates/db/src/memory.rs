//! In-process store with the same contract as [`PgStore`](crate::store::PgStore).
//!
//! Used when no database is configured and as the backing store in tests.
//! Each operation takes the lock once, so single-record operations are
//! atomic with respect to each other.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use railab_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::person::{NewPerson, Person, UpdatePerson};
use crate::models::project::{NewProject, Project, UpdateProject};
use crate::store::{LabStore, StoreResult};

#[derive(Default)]
struct Tables {
    last_person_id: DbId,
    last_project_id: DbId,
    people: BTreeMap<DbId, Person>,
    projects: BTreeMap<DbId, Project>,
}

/// Store holding every record in memory behind a [`RwLock`].
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// `sort_order ASC, role ASC, name ASC, id ASC`, same as the SQL listing.
fn person_listing_order(a: &Person, b: &Person) -> Ordering {
    a.order
        .cmp(&b.order)
        .then_with(|| a.role.cmp(&b.role))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// `sort_order ASC, start_date DESC NULLS LAST, id ASC`.
fn project_listing_order(a: &Project, b: &Project) -> Ordering {
    let by_start = match (a.start_date, b.start_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    a.order
        .cmp(&b.order)
        .then(by_start)
        .then_with(|| a.id.cmp(&b.id))
}

#[async_trait]
impl LabStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_people(&self, is_active: bool) -> StoreResult<Vec<Person>> {
        let tables = self.tables.read().await;
        let mut people: Vec<Person> = tables
            .people
            .values()
            .filter(|p| p.is_active == is_active)
            .cloned()
            .collect();
        people.sort_by(person_listing_order);
        Ok(people)
    }

    async fn find_person(&self, id: DbId) -> StoreResult<Option<Person>> {
        Ok(self.tables.read().await.people.get(&id).cloned())
    }

    async fn find_people_by_ids(&self, ids: &[DbId]) -> StoreResult<Vec<Person>> {
        let tables = self.tables.read().await;
        Ok(tables
            .people
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn create_person(&self, input: &NewPerson) -> StoreResult<Person> {
        let mut tables = self.tables.write().await;
        tables.last_person_id += 1;
        let now = Utc::now();
        let person = Person {
            id: tables.last_person_id,
            name: input.name.clone(),
            role: input.role.clone(),
            email: input.email.clone(),
            image_url: input.image_url.clone(),
            bio: input.bio.clone(),
            research_interests: input.research_interests.clone(),
            publications: input.publications.clone(),
            linkedin: input.linkedin.clone(),
            google_scholar: input.google_scholar.clone(),
            personal_website: input.personal_website.clone(),
            is_active: input.is_active,
            order: input.order,
            created_at: now,
            updated_at: now,
        };
        tables.people.insert(person.id, person.clone());
        Ok(person)
    }

    async fn update_person(&self, id: DbId, input: &UpdatePerson) -> StoreResult<Option<Person>> {
        let mut tables = self.tables.write().await;
        Ok(tables.people.get_mut(&id).map(|person| {
            input.apply_to(person);
            person.updated_at = Utc::now();
            person.clone()
        }))
    }

    async fn delete_person(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.people.remove(&id).is_some())
    }

    async fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let tables = self.tables.read().await;
        let mut projects: Vec<Project> = tables.projects.values().cloned().collect();
        projects.sort_by(project_listing_order);
        Ok(projects)
    }

    async fn find_project(&self, id: DbId) -> StoreResult<Option<Project>> {
        Ok(self.tables.read().await.projects.get(&id).cloned())
    }

    async fn create_project(&self, input: &NewProject) -> StoreResult<Project> {
        let mut tables = self.tables.write().await;
        tables.last_project_id += 1;
        let now = Utc::now();
        let project = Project {
            id: tables.last_project_id,
            title: input.title.clone(),
            short_description: input.short_description.clone(),
            full_description: input.full_description.clone(),
            image_url: input.image_url.clone(),
            start_date: input.start_date,
            end_date: input.end_date,
            status: input.status,
            team_members: input.team_members.clone(),
            publications: input.publications.clone(),
            github_link: input.github_link.clone(),
            demo_link: input.demo_link.clone(),
            tags: input.tags.clone(),
            order: input.order,
            created_at: now,
            updated_at: now,
        };
        tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> StoreResult<Option<Project>> {
        let mut tables = self.tables.write().await;
        Ok(tables.projects.get_mut(&id).map(|project| {
            input.apply_to(project);
            project.updated_at = Utc::now();
            project.clone()
        }))
    }

    async fn delete_project(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.tables.write().await.projects.remove(&id).is_some())
    }
}
