//! People roster: current members and alumni, each grouped by role.
//!
//! Roles are free text. [`ROLE_PRIORITY`] only fixes the display order of
//! the well-known ones; any other role is still listed, after these.

use serde::Serialize;

use crate::grouping::{group_and_order, Group, Ranked};

/// Canonical role precedence, highest first.
pub const ROLE_PRIORITY: &[&str] = &[
    "Professor",
    "Associate Professor",
    "Assistant Professor",
    "Postdoc",
    "Ph.D. Student",
    "M.S. Student",
    "Research Assistant",
    "Visiting Scholar",
    "Undergraduate Researcher",
    "Other",
];

/// A person as seen by the roster.
pub trait RosterEntry: Ranked {
    fn role(&self) -> &str;
    fn is_active(&self) -> bool;
}

/// Display structure for the people listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster<T> {
    pub current: Vec<Group<T>>,
    pub alumni: Vec<Group<T>>,
}

impl<T: RosterEntry + Clone> Roster<T> {
    /// Split `people` on `is_active`, then group each side by role.
    pub fn from_people<I>(people: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let (current, alumni) = partition_by_active(people);
        Self {
            current: group_by_role(&current),
            alumni: group_by_role(&alumni),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.alumni.is_empty()
    }
}

/// Split people into `(current, alumni)`, preserving input order.
pub fn partition_by_active<T, I>(people: I) -> (Vec<T>, Vec<T>)
where
    T: RosterEntry,
    I: IntoIterator<Item = T>,
{
    people.into_iter().partition(|p| p.is_active())
}

/// Group people by role using [`ROLE_PRIORITY`].
pub fn group_by_role<T: RosterEntry + Clone>(people: &[T]) -> Vec<Group<T>> {
    group_and_order(people, role_key::<T>, ROLE_PRIORITY)
}

fn role_key<T: RosterEntry>(person: &T) -> Option<&str> {
    Some(person.role())
}
