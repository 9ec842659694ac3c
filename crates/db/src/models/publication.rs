use serde::{Deserialize, Serialize};

/// A publication reference attached to a person or project.
///
/// Stored as an element of a JSONB array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
