//! Helpers for partial updates.
//!
//! An update request carries every field as an `Option`. Text fields skip
//! empty values, so an update can never blank out a stored name or bio.
//! Every other field applies whenever present, which is how `isActive: false`,
//! `order: 0` and `[]` take effect.
//!
//! Dates and statuses arrive as strings. An empty string there means "not
//! supplied", see [`blank_as_none`].

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error};

/// Trim a text value, mapping whitespace-only input to `None`.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim and lowercase an email address.
pub fn normalize_email(value: Option<String>) -> Option<String> {
    normalize_text(value).map(|v| v.to_lowercase())
}

/// `deserialize_with` helper for optional string-encoded fields.
///
/// `null`, `""` and whitespace map to `None`; anything else must parse as `T`.
/// Pair it with `#[serde(default)]` so a missing key is `None` too.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match normalize_text(Option::<String>::deserialize(deserializer)?) {
        Some(raw) => raw.parse().map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}
