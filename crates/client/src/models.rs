//! Response shapes the client reads. Unknown fields are ignored and
//! optional ones default, so older or newer backends still decode.

use chrono::{DateTime, Utc};
use railab_core::grouping::Ranked;
use railab_core::portfolio::PortfolioEntry;
use railab_core::roster::RosterEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationLink {
    pub title: Option<String>,
    pub link: Option<String>,
}

/// A person as listed on the people page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCard {
    pub id: i64,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub research_interests: Vec<String>,
    #[serde(default)]
    pub publications: Vec<PublicationLink>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub google_scholar: Option<String>,
    #[serde(default)]
    pub personal_website: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub order: i32,
}

fn default_active() -> bool {
    true
}

impl Ranked for PersonCard {
    fn sort_order(&self) -> i32 {
        self.order
    }

    fn sort_label(&self) -> &str {
        &self.name
    }
}

impl RosterEntry for PersonCard {
    fn role(&self) -> &str {
        &self.role
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// One entry of a project's team. Only `id` is present when the person
/// no longer exists.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberCard {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl TeamMemberCard {
    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: i64,
    pub title: String,
    pub short_description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub team_members: Vec<TeamMemberCard>,
    #[serde(default)]
    pub publications: Vec<PublicationLink>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub demo_link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

impl Ranked for ProjectCard {
    fn sort_order(&self) -> i32 {
        self.order
    }

    fn sort_label(&self) -> &str {
        &self.title
    }
}

impl PortfolioEntry for ProjectCard {
    fn status(&self) -> &str {
        &self.status
    }
}
