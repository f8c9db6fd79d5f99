//! Folding flat association rows into nested entities.
//!
//! Detail queries return one row per (parent, role) pair, already sorted.
//! [`group_roles`] collapses them into one [`RoleGroup`] per parent, keeping
//! parents and roles in first-seen order and dropping repeated roles.

use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

/// An entity together with the distinct role names attached to it.
///
/// Serializes flat: the entity's own fields followed by `roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGroup<T> {
    #[serde(flatten)]
    pub item: T,
    pub roles: Vec<String>,
}

/// A flat association row that can be grouped by its parent.
pub trait RoleRow {
    type Key: Eq + Hash;
    type Item;

    /// Identity of the parent entity this row belongs to.
    fn key(&self) -> Self::Key;

    /// Split the row into the parent entity and the role name it carries.
    fn into_parts(self) -> (Self::Item, String);
}

/// Group rows by parent in first-appearance order, de-duplicating roles.
///
/// The parent entity is taken from the first row seen for its key.
/// An empty input yields an empty list.
pub fn group_roles<R, I>(rows: I) -> Vec<RoleGroup<R::Item>>
where
    R: RoleRow,
    I: IntoIterator<Item = R>,
{
    let mut groups: IndexMap<R::Key, RoleGroup<R::Item>> = IndexMap::new();

    for row in rows {
        let key = row.key();
        let (item, role) = row.into_parts();
        let group = groups.entry(key).or_insert_with(|| RoleGroup {
            item,
            roles: Vec::new(),
        });
        if !group.roles.contains(&role) {
            group.roles.push(role);
        }
    }

    groups.into_values().collect()
}
