//! Plain-text rendering of the pages.

use std::fmt;

use chrono::{DateTime, Utc};
use railab_core::grouping::Group;

use crate::models::{PersonCard, ProjectCard, PublicationLink, TeamMemberCard};
use crate::pages::{PeoplePage, ProjectPage, ProjectsPage};

pub const NO_PEOPLE: &str = "No active team members to display.";
pub const NO_PROJECTS: &str = "No projects to display yet.";

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

fn people_groups(f: &mut fmt::Formatter<'_>, groups: &[Group<PersonCard>]) -> fmt::Result {
    for group in groups {
        writeln!(f)?;
        writeln!(f, "{}", group.label)?;
        for person in &group.members {
            write!(f, "  - {}", person.name)?;
            if let Some(email) = &person.email {
                write!(f, " <{email}>")?;
            }
            writeln!(f)?;
            if !person.research_interests.is_empty() {
                writeln!(f, "    Interests: {}", person.research_interests.join(", "))?;
            }
        }
    }
    Ok(())
}

impl fmt::Display for PeoplePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Current Members")?;
        if self.roster.current.is_empty() {
            writeln!(f)?;
            writeln!(f, "{NO_PEOPLE}")?;
        } else {
            people_groups(f, &self.roster.current)?;
        }

        if !self.roster.alumni.is_empty() {
            writeln!(f)?;
            heading(f, "Alumni")?;
            people_groups(f, &self.roster.alumni)?;
        }
        Ok(())
    }
}

fn month(date: DateTime<Utc>) -> String {
    date.format("%b %Y").to_string()
}

fn date_range(project: &ProjectCard) -> Option<String> {
    match (project.start_date, project.end_date) {
        (Some(start), Some(end)) => Some(format!("{} to {}", month(start), month(end))),
        (Some(start), None) => Some(format!("{} to present", month(start))),
        (None, Some(end)) => Some(format!("until {}", month(end))),
        (None, None) => None,
    }
}

fn member_name(member: &TeamMemberCard) -> String {
    match &member.name {
        Some(name) => name.clone(),
        None => format!("#{} (no longer listed)", member.id),
    }
}

impl fmt::Display for ProjectsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Projects")?;
        if self.groups.is_empty() {
            writeln!(f)?;
            return writeln!(f, "{NO_PROJECTS}");
        }

        for group in &self.groups {
            writeln!(f)?;
            writeln!(f, "{}", group.label)?;
            for project in &group.members {
                write!(f, "  - {} (#{})", project.title, project.id)?;
                if let Some(range) = date_range(project) {
                    write!(f, " [{range}]")?;
                }
                writeln!(f)?;
                writeln!(f, "    {}", project.short_description)?;
                if !project.team_members.is_empty() {
                    let names: Vec<String> =
                        project.team_members.iter().map(member_name).collect();
                    writeln!(f, "    Team: {}", names.join(", "))?;
                }
                if !project.tags.is_empty() {
                    writeln!(f, "    Tags: {}", project.tags.join(", "))?;
                }
            }
        }
        Ok(())
    }
}

fn publication(f: &mut fmt::Formatter<'_>, publication: &PublicationLink) -> fmt::Result {
    let title = publication.title.as_deref().unwrap_or("Untitled");
    match &publication.link {
        Some(link) => writeln!(f, "  - {title} ({link})"),
        None => writeln!(f, "  - {title}"),
    }
}

impl fmt::Display for ProjectPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let project = &self.project;
        heading(f, &format!("{} ({})", project.title, project.status))?;
        if let Some(range) = date_range(project) {
            writeln!(f, "{range}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            project
                .full_description
                .as_deref()
                .unwrap_or(&project.short_description)
        )?;

        if !project.team_members.is_empty() {
            writeln!(f)?;
            writeln!(f, "Team")?;
            for member in &project.team_members {
                write!(f, "  - {}", member_name(member))?;
                if let Some(role) = &member.role {
                    write!(f, ", {role}")?;
                }
                if let Some(email) = &member.email {
                    write!(f, " <{email}>")?;
                }
                if let Some(linkedin) = &member.linkedin {
                    write!(f, " {linkedin}")?;
                }
                writeln!(f)?;
            }
        }

        if project.github_link.is_some() || project.demo_link.is_some() {
            writeln!(f)?;
            if let Some(link) = &project.github_link {
                writeln!(f, "GitHub: {link}")?;
            }
            if let Some(link) = &project.demo_link {
                writeln!(f, "Demo: {link}")?;
            }
        }

        if !project.publications.is_empty() {
            writeln!(f)?;
            writeln!(f, "Publications")?;
            for entry in &project.publications {
                publication(f, entry)?;
            }
        }
        Ok(())
    }
}
