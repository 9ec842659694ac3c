//! Page models: fetched data arranged for display.

use railab_core::grouping::Group;
use railab_core::portfolio::group_by_status;
use railab_core::roster::Roster;
use serde::Serialize;

use crate::api::{ClientError, LabClient};
use crate::models::{PersonCard, ProjectCard};

/// A page could not be built because its data could not be fetched.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Failed to fetch {what} data. Please ensure the backend is running.")]
    Fetch {
        what: &'static str,
        #[source]
        source: ClientError,
    },
    /// A single project could not be loaded: missing id or backend down.
    #[error("Failed to fetch project details. Project might not exist or backend is down.")]
    ProjectDetail {
        id: i64,
        #[source]
        source: ClientError,
    },
}

fn fetch_failed(what: &'static str) -> impl FnOnce(ClientError) -> PageError {
    move |source| {
        tracing::warn!(error = %source, what, "Fetch failed");
        PageError::Fetch { what, source }
    }
}

/// Current members and alumni, each grouped by role.
#[derive(Debug, Clone, Serialize)]
pub struct PeoplePage {
    pub roster: Roster<PersonCard>,
}

impl PeoplePage {
    pub async fn load(client: &LabClient) -> Result<Self, PageError> {
        let (active, alumni) = tokio::try_join!(client.fetch_people(), client.fetch_alumni())
            .map_err(fetch_failed("people"))?;
        Ok(Self::from_people(active.into_iter().chain(alumni)))
    }

    pub fn from_people<I: IntoIterator<Item = PersonCard>>(people: I) -> Self {
        Self {
            roster: Roster::from_people(people),
        }
    }
}

/// Every project, grouped by status.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsPage {
    pub groups: Vec<Group<ProjectCard>>,
}

impl ProjectsPage {
    pub async fn load(client: &LabClient) -> Result<Self, PageError> {
        let projects = client
            .fetch_projects()
            .await
            .map_err(fetch_failed("projects"))?;
        Ok(Self::from_projects(&projects))
    }

    pub fn from_projects(projects: &[ProjectCard]) -> Self {
        Self {
            groups: group_by_status(projects),
        }
    }
}

/// A single project with its team.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPage {
    pub project: ProjectCard,
}

impl ProjectPage {
    pub async fn load(client: &LabClient, id: i64) -> Result<Self, PageError> {
        let project = client.fetch_project(id).await.map_err(|source| {
            tracing::warn!(error = %source, id, "Project fetch failed");
            PageError::ProjectDetail { id, source }
        })?;
        Ok(Self { project })
    }
}
