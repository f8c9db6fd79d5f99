//! Contributor projections.

use marquee_core::aggregate::{RoleGroup, RoleRow};
use marquee_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use super::title::TitleSummary;

/// A row from the `contributor` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Contributor {
    pub id: DbId,
    pub imdb_reference_id: Option<String>,
    pub name: String,
}

/// One (contributor, role) row for a title, sorted by name then role.
#[derive(Debug, Clone, FromRow)]
pub struct ContributorRoleRow {
    #[sqlx(flatten)]
    pub contributor: Contributor,
    pub role: String,
}

impl RoleRow for ContributorRoleRow {
    type Key = DbId;
    type Item = Contributor;

    fn key(&self) -> DbId {
        self.contributor.id
    }

    fn into_parts(self) -> (Contributor, String) {
        (self.contributor, self.role)
    }
}

/// A contributor with the roles they held on one title.
pub type ContributorSummary = RoleGroup<Contributor>;

/// Full contributor detail with every title they worked on.
#[derive(Debug, Clone, Serialize)]
pub struct ContributorDetail {
    #[serde(flatten)]
    pub contributor: Contributor,
    pub titles: Vec<TitleSummary>,
}
