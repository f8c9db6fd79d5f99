//! Title projections.

use marquee_core::aggregate::{RoleGroup, RoleRow};
use marquee_core::types::{DbId, Year};
use serde::Serialize;
use sqlx::FromRow;

use super::contributor::ContributorSummary;

/// A title joined with its media type name.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Title {
    pub id: DbId,
    pub imdb_reference_id: Option<String>,
    pub title: String,
    pub release_year: Option<Year>,
    pub media_type: String,
}

/// One (title, role) row for a contributor, sorted by title then role.
#[derive(Debug, Clone, FromRow)]
pub struct TitleRoleRow {
    #[sqlx(flatten)]
    pub title: Title,
    pub role: String,
}

impl RoleRow for TitleRoleRow {
    type Key = DbId;
    type Item = Title;

    fn key(&self) -> DbId {
        self.title.id
    }

    fn into_parts(self) -> (Title, String) {
        (self.title, self.role)
    }
}

/// A title with the roles one contributor held on it.
pub type TitleSummary = RoleGroup<Title>;

/// Full title detail: genres by name, contributors with their roles.
#[derive(Debug, Clone, Serialize)]
pub struct TitleDetail {
    #[serde(flatten)]
    pub title: Title,
    pub genres: Vec<String>,
    pub contributors: Vec<ContributorSummary>,
}
