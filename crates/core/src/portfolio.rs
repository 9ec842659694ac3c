//! Project listing grouped by status.

use crate::grouping::{group_and_order, Group, Ranked};

/// Status precedence for the projects page. Active work first.
pub const STATUS_PRIORITY: &[&str] = &["Ongoing", "Upcoming", "Completed"];

/// Group for projects that carry no status.
pub const DEFAULT_STATUS: &str = "Ongoing";

/// A project as seen by the portfolio listing.
pub trait PortfolioEntry: Ranked {
    fn status(&self) -> &str;
}

/// Group projects by status using [`STATUS_PRIORITY`].
pub fn group_by_status<T: PortfolioEntry + Clone>(projects: &[T]) -> Vec<Group<T>> {
    group_and_order(projects, status_key::<T>, STATUS_PRIORITY)
}

fn status_key<T: PortfolioEntry>(project: &T) -> Option<&str> {
    match project.status().trim() {
        "" => Some(DEFAULT_STATUS),
        status => Some(status),
    }
}
