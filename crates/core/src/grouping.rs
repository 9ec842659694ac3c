//! Grouped, display-ordered listings.
//!
//! [`group_and_order`] turns a flat slice of entities into labelled groups.
//! Groups follow a caller-supplied priority list; labels missing from the
//! list come after every listed label, in lexicographic order. Members of a
//! group are ordered by their manual `order` value, then by name or title.
//!
//! The same routine serves people (grouped by role) and projects (grouped by
//! status). It is a pure function: the input slice is only read and cloned.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

/// Label used when an entity has no group key or an empty one.
pub const FALLBACK_GROUP: &str = "Other";

/// Ordering keys for an entity inside its group.
pub trait Ranked {
    /// Manual sort position; lower values come first.
    fn sort_order(&self) -> i32;

    /// Tie-break label (a person's name, a project's title).
    fn sort_label(&self) -> &str;
}

/// One labelled group of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group<T> {
    pub label: String,
    pub members: Vec<T>,
}

/// Partition `entities` by `group_key` and order groups and members.
///
/// - Groups are ordered by their position in `priority`; unlisted labels sort
///   after listed ones, lexicographically among themselves.
/// - Members are ordered by [`Ranked::sort_order`] ascending, then by
///   [`Ranked::sort_label`]. Remaining ties keep their input order.
/// - Empty input yields an empty listing.
pub fn group_and_order<T, K>(entities: &[T], group_key: K, priority: &[&str]) -> Vec<Group<T>>
where
    T: Ranked + Clone,
    K: Fn(&T) -> Option<&str>,
{
    let mut buckets: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for entity in entities {
        let label = match group_key(entity) {
            Some(key) if !key.is_empty() => key,
            _ => FALLBACK_GROUP,
        };
        buckets
            .entry(label.to_string())
            .or_default()
            .push(entity.clone());
    }

    let mut groups: Vec<Group<T>> = buckets
        .into_iter()
        .map(|(label, mut members)| {
            members.sort_by(compare_members);
            Group { label, members }
        })
        .collect();

    groups.sort_by(|a, b| compare_labels(&a.label, &b.label, priority));
    groups
}

fn compare_members<T: Ranked>(a: &T, b: &T) -> Ordering {
    a.sort_order()
        .cmp(&b.sort_order())
        .then_with(|| a.sort_label().cmp(b.sort_label()))
}

fn compare_labels(a: &str, b: &str, priority: &[&str]) -> Ordering {
    let rank = |label: &str| priority.iter().position(|p| *p == label);
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
