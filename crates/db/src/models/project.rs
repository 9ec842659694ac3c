//! Project entity model, DTOs and the read-side view with resolved team.

use std::collections::HashMap;

use railab_core::error::CoreError;
use railab_core::grouping::Ranked;
use railab_core::patch::{blank_as_none, normalize_text};
use railab_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::person::Person;
use crate::models::publication::Publication;
use crate::models::status::ProjectStatus;

/// Image shown for projects created without one.
pub const DEFAULT_PROJECT_IMAGE: &str = "https://via.placeholder.com/400x250?text=No+Image";

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub short_description: String,
    pub full_description: Option<String>,
    pub image_url: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    /// Person ids, unchecked. May reference deleted people.
    pub team_members: Vec<DbId>,
    #[sqlx(json)]
    pub publications: Vec<Publication>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub tags: Vec<String>,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ranked for Project {
    fn sort_order(&self) -> i32 {
        self.order
    }

    fn sort_label(&self) -> &str {
        &self.title
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    pub full_description: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status: Option<ProjectStatus>,
    pub team_members: Option<Vec<DbId>>,
    pub publications: Option<Vec<Publication>>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub tags: Option<Vec<String>>,
    pub order: Option<i32>,
}

/// A project ready to insert: normalized, validated, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub short_description: String,
    pub full_description: Option<String>,
    pub image_url: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status: ProjectStatus,
    pub team_members: Vec<DbId>,
    pub publications: Vec<Publication>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub tags: Vec<String>,
    pub order: i32,
}

impl CreateProject {
    /// Trim text, require `title` and `shortDescription`, and fill in schema
    /// defaults. Team member ids are taken as given.
    pub fn into_new(self) -> Result<NewProject, CoreError> {
        let title = normalize_text(Some(self.title))
            .ok_or_else(|| CoreError::Validation("title is required".into()))?;
        let short_description = normalize_text(Some(self.short_description))
            .ok_or_else(|| CoreError::Validation("shortDescription is required".into()))?;

        Ok(NewProject {
            title,
            short_description,
            full_description: normalize_text(self.full_description),
            image_url: normalize_text(self.image_url)
                .unwrap_or_else(|| DEFAULT_PROJECT_IMAGE.to_string()),
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status.unwrap_or_default(),
            team_members: self.team_members.unwrap_or_default(),
            publications: self.publications.unwrap_or_default(),
            github_link: normalize_text(self.github_link),
            demo_link: normalize_text(self.demo_link),
            tags: self.tags.unwrap_or_default(),
            order: self.order.unwrap_or(0),
        })
    }
}

/// DTO for updating an existing project. All fields are optional.
///
/// Stores write every `Some` field verbatim; call
/// [`UpdateProject::apply_field_policy`] first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<ProjectStatus>,
    pub team_members: Option<Vec<DbId>>,
    pub publications: Option<Vec<Publication>>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub tags: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl UpdateProject {
    /// Normalize text and drop the values that must not be written.
    ///
    /// Blank dates and statuses are already `None` after deserializing.
    pub fn apply_field_policy(self) -> Self {
        Self {
            title: normalize_text(self.title),
            short_description: normalize_text(self.short_description),
            full_description: normalize_text(self.full_description),
            image_url: normalize_text(self.image_url),
            github_link: normalize_text(self.github_link),
            demo_link: normalize_text(self.demo_link),
            ..self
        }
    }

    /// Overwrite the fields of `project` that are `Some` here.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(v) = &self.title {
            project.title = v.clone();
        }
        if let Some(v) = &self.short_description {
            project.short_description = v.clone();
        }
        if let Some(v) = &self.full_description {
            project.full_description = Some(v.clone());
        }
        if let Some(v) = &self.image_url {
            project.image_url = v.clone();
        }
        if let Some(v) = self.start_date {
            project.start_date = Some(v);
        }
        if let Some(v) = self.end_date {
            project.end_date = Some(v);
        }
        if let Some(v) = self.status {
            project.status = v;
        }
        if let Some(v) = &self.team_members {
            project.team_members = v.clone();
        }
        if let Some(v) = &self.publications {
            project.publications = v.clone();
        }
        if let Some(v) = &self.github_link {
            project.github_link = Some(v.clone());
        }
        if let Some(v) = &self.demo_link {
            project.demo_link = Some(v.clone());
        }
        if let Some(v) = &self.tags {
            project.tags = v.clone();
        }
        if let Some(v) = self.order {
            project.order = v;
        }
    }
}

// ---------------------------------------------------------------------------
// Read-side view
// ---------------------------------------------------------------------------

/// How much of each team member to inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamDetail {
    /// Name, image and role (project listings).
    Card,
    /// Card fields plus email and LinkedIn (single project page).
    Full,
}

/// Person fields inlined into a project's team list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberSummary {
    pub name: String,
    pub image_url: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl TeamMemberSummary {
    pub fn from_person(person: &Person, detail: TeamDetail) -> Self {
        let full = detail == TeamDetail::Full;
        Self {
            name: person.name.clone(),
            image_url: person.image_url.clone(),
            role: person.role.clone(),
            email: person.email.clone().filter(|_| full),
            linkedin: person.linkedin.clone().filter(|_| full),
        }
    }
}

/// One entry of a project's team. `person` is `None` for a dangling id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    #[serde(flatten)]
    pub person: Option<TeamMemberSummary>,
}

/// A project as returned by the read endpoints, with its team resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: DbId,
    pub title: String,
    pub short_description: String,
    pub full_description: Option<String>,
    pub image_url: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status: ProjectStatus,
    pub team_members: Vec<TeamMember>,
    pub publications: Vec<Publication>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub tags: Vec<String>,
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectView {
    /// Resolve `project.team_members` against `people`, keeping order.
    /// Ids missing from `people` stay in the list without person fields.
    pub fn resolve(project: Project, people: &HashMap<DbId, Person>, detail: TeamDetail) -> Self {
        let team_members = project
            .team_members
            .iter()
            .map(|id| TeamMember {
                id: *id,
                person: people
                    .get(id)
                    .map(|p| TeamMemberSummary::from_person(p, detail)),
            })
            .collect();

        Self {
            id: project.id,
            title: project.title,
            short_description: project.short_description,
            full_description: project.full_description,
            image_url: project.image_url,
            start_date: project.start_date,
            end_date: project.end_date,
            status: project.status,
            team_members,
            publications: project.publications,
            github_link: project.github_link,
            demo_link: project.demo_link,
            tags: project.tags,
            order: project.order,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
