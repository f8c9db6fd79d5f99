//! Repository for the `contributor` table.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::contributor::{Contributor, ContributorRoleRow};

/// Read access to contributors.
pub struct ContributorRepo;

impl ContributorRepo {
    /// Find a contributor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contributor>, sqlx::Error> {
        sqlx::query_as::<_, Contributor>(
            "SELECT c.id, c.imdb_reference_id, c.name \
             FROM contributor c \
             WHERE c.id = $1 \
             LIMIT 1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// One row per (contributor, role) credited on a title,
    /// ordered by contributor name then role name.
    pub async fn roles_for_title(
        pool: &PgPool,
        title_id: DbId,
    ) -> Result<Vec<ContributorRoleRow>, sqlx::Error> {
        sqlx::query_as::<_, ContributorRoleRow>(
            "SELECT c.id, c.imdb_reference_id, c.name, ctl.name AS role \
             FROM contributor_title_mapping ctm \
             JOIN contributor c ON c.id = ctm.contributor_id \
             JOIN contributor_type_lkup ctl ON ctl.id = ctm.type_id \
             WHERE ctm.title_id = $1 \
             ORDER BY c.name, c.id, ctl.name",
        )
        .bind(title_id)
        .fetch_all(pool)
        .await
    }
}
