//! Person entity model and DTOs.

use railab_core::error::CoreError;
use railab_core::grouping::Ranked;
use railab_core::patch::{normalize_email, normalize_text};
use railab_core::roster::RosterEntry;
use railab_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::publication::Publication;

/// Image shown for people created without one.
pub const DEFAULT_PERSON_IMAGE: &str = "https://via.placeholder.com/150?text=No+Image";

/// A person row from the `people` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: DbId,
    pub name: String,
    /// Free text. Well-known roles only affect display order.
    pub role: String,
    pub email: Option<String>,
    pub image_url: String,
    pub bio: Option<String>,
    pub research_interests: Vec<String>,
    #[sqlx(json)]
    pub publications: Vec<Publication>,
    pub linkedin: Option<String>,
    pub google_scholar: Option<String>,
    pub personal_website: Option<String>,
    /// `false` moves the person to the alumni listing.
    pub is_active: bool,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Ranked for Person {
    fn sort_order(&self) -> i32 {
        self.order
    }

    fn sort_label(&self) -> &str {
        &self.name
    }
}

impl RosterEntry for Person {
    fn role(&self) -> &str {
        &self.role
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// DTO for creating a new person.
///
/// `name` and `role` default to empty so that a missing field is reported by
/// [`CreatePerson::into_new`] rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub research_interests: Option<Vec<String>>,
    pub publications: Option<Vec<Publication>>,
    pub linkedin: Option<String>,
    pub google_scholar: Option<String>,
    pub personal_website: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

/// A person ready to insert: normalized, validated, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub image_url: String,
    pub bio: Option<String>,
    pub research_interests: Vec<String>,
    pub publications: Vec<Publication>,
    pub linkedin: Option<String>,
    pub google_scholar: Option<String>,
    pub personal_website: Option<String>,
    pub is_active: bool,
    pub order: i32,
}

impl CreatePerson {
    /// Trim text, lowercase the email, require `name` and `role`, and fill
    /// in schema defaults.
    pub fn into_new(self) -> Result<NewPerson, CoreError> {
        let name = normalize_text(Some(self.name))
            .ok_or_else(|| CoreError::Validation("name is required".into()))?;
        let role = normalize_text(Some(self.role))
            .ok_or_else(|| CoreError::Validation("role is required".into()))?;

        Ok(NewPerson {
            name,
            role,
            email: normalize_email(self.email),
            image_url: normalize_text(self.image_url)
                .unwrap_or_else(|| DEFAULT_PERSON_IMAGE.to_string()),
            bio: normalize_text(self.bio),
            research_interests: self.research_interests.unwrap_or_default(),
            publications: self.publications.unwrap_or_default(),
            linkedin: normalize_text(self.linkedin),
            google_scholar: normalize_text(self.google_scholar),
            personal_website: normalize_text(self.personal_website),
            is_active: self.is_active.unwrap_or(true),
            order: self.order.unwrap_or(0),
        })
    }
}

/// DTO for updating an existing person. All fields are optional.
///
/// Stores write every `Some` field verbatim; call
/// [`UpdatePerson::apply_field_policy`] first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerson {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub research_interests: Option<Vec<String>>,
    pub publications: Option<Vec<Publication>>,
    pub linkedin: Option<String>,
    pub google_scholar: Option<String>,
    pub personal_website: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl UpdatePerson {
    /// Normalize text and drop the values that must not be written.
    ///
    /// Text fields skip empty values, so `{"bio": ""}` leaves the stored bio
    /// alone. Lists, `isActive` and `order` apply whenever present.
    pub fn apply_field_policy(self) -> Self {
        Self {
            name: normalize_text(self.name),
            role: normalize_text(self.role),
            email: normalize_email(self.email),
            image_url: normalize_text(self.image_url),
            bio: normalize_text(self.bio),
            linkedin: normalize_text(self.linkedin),
            google_scholar: normalize_text(self.google_scholar),
            personal_website: normalize_text(self.personal_website),
            ..self
        }
    }

    /// Overwrite the fields of `person` that are `Some` here.
    pub fn apply_to(&self, person: &mut Person) {
        if let Some(v) = &self.name {
            person.name = v.clone();
        }
        if let Some(v) = &self.role {
            person.role = v.clone();
        }
        if let Some(v) = &self.email {
            person.email = Some(v.clone());
        }
        if let Some(v) = &self.image_url {
            person.image_url = v.clone();
        }
        if let Some(v) = &self.bio {
            person.bio = Some(v.clone());
        }
        if let Some(v) = &self.research_interests {
            person.research_interests = v.clone();
        }
        if let Some(v) = &self.publications {
            person.publications = v.clone();
        }
        if let Some(v) = &self.linkedin {
            person.linkedin = Some(v.clone());
        }
        if let Some(v) = &self.google_scholar {
            person.google_scholar = Some(v.clone());
        }
        if let Some(v) = &self.personal_website {
            person.personal_website = Some(v.clone());
        }
        if let Some(v) = self.is_active {
            person.is_active = v;
        }
        if let Some(v) = self.order {
            person.order = v;
        }
    }
}
