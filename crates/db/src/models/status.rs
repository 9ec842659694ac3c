//! Project status: a closed set stored as TEXT.
//!
//! The database enforces the same set with a `CHECK` constraint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Ongoing,
    Completed,
    Upcoming,
}

/// Returned when a stored or submitted status is outside the closed set.
#[derive(Debug, thiserror::Error)]
#[error("unknown project status: {0:?}")]
pub struct UnknownStatus(pub String);

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Ongoing, Self::Completed, Self::Upcoming];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Upcoming => "Upcoming",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
