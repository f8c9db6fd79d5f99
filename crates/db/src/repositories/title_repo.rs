//! Repository for the `title` table and its genre links.

use marquee_core::types::DbId;
use sqlx::PgPool;

use super::TITLE_COLUMNS;
use crate::models::title::{Title, TitleRoleRow};

/// Read access to titles.
pub struct TitleRepo;

impl TitleRepo {
    /// Find a title by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Title>, sqlx::Error> {
        let query = format!(
            "SELECT {TITLE_COLUMNS} \
             FROM title t \
             JOIN media_type_lkup mt ON mt.id = t.media_type \
             WHERE t.id = $1 \
             LIMIT 1"
        );
        sqlx::query_as::<_, Title>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Genre names linked to a title, ordered by name.
    pub async fn genre_names(pool: &PgPool, title_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT g.name \
             FROM title_genre tg \
             JOIN genre_type_lkup g ON g.id = tg.genre_id \
             WHERE tg.title_id = $1 \
             ORDER BY g.name",
        )
        .bind(title_id)
        .fetch_all(pool)
        .await
    }

    /// One row per (title, role) a contributor is credited with,
    /// ordered by title name then role name.
    pub async fn roles_for_contributor(
        pool: &PgPool,
        contributor_id: DbId,
    ) -> Result<Vec<TitleRoleRow>, sqlx::Error> {
        let query = format!(
            "SELECT {TITLE_COLUMNS}, ctl.name AS role \
             FROM contributor_title_mapping ctm \
             JOIN title t ON t.id = ctm.title_id \
             JOIN media_type_lkup mt ON mt.id = t.media_type \
             JOIN contributor_type_lkup ctl ON ctl.id = ctm.type_id \
             WHERE ctm.contributor_id = $1 \
             ORDER BY t.title, t.id, ctl.name"
        );
        sqlx::query_as::<_, TitleRoleRow>(&query)
            .bind(contributor_id)
            .fetch_all(pool)
            .await
    }
}
