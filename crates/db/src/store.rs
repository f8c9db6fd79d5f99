//! The data-access boundary used by request handlers.
//!
//! [`CatalogStore`] is the only way handlers read the catalog. The Postgres
//! implementation converts every `sqlx::Error` into a [`CoreError`] here, so
//! database details never travel further up than this module's logs.

use async_trait::async_trait;
use marquee_core::browse::BrowseParams;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;

use crate::models::contributor::{Contributor, ContributorRoleRow};
use crate::models::genre::Genre;
use crate::models::title::{Title, TitleRoleRow};
use crate::repositories::{BrowseRepo, ContributorRepo, GenreRepo, TitleRepo};
use crate::DbPool;

/// Read operations over the catalog.
///
/// Row-returning methods hand back rows in the order the aggregator expects:
/// contributor rows by contributor name then role, title rows by title name
/// then role, genre names by name.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// One page of browse results.
    async fn browse_titles(&self, params: &BrowseParams) -> Result<Vec<Title>, CoreError>;

    /// Every genre, for the browse filter.
    async fn list_genres(&self) -> Result<Vec<Genre>, CoreError>;

    async fn find_title(&self, id: DbId) -> Result<Option<Title>, CoreError>;

    async fn title_genres(&self, title_id: DbId) -> Result<Vec<String>, CoreError>;

    async fn title_contributors(&self, title_id: DbId)
        -> Result<Vec<ContributorRoleRow>, CoreError>;

    async fn find_contributor(&self, id: DbId) -> Result<Option<Contributor>, CoreError>;

    async fn contributor_titles(&self, contributor_id: DbId)
        -> Result<Vec<TitleRoleRow>, CoreError>;

    /// Whether the backing store answers at all.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// [`CatalogStore`] backed by a Postgres connection pool.
///
/// Connections are checked out per query and returned to the pool when the
/// query future completes, on success and on error alike.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log a database failure and reduce it to the client-safe error kind.
fn data_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| match err {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            tracing::error!(operation, error = %err, "Connection pool not ready");
            CoreError::PoolNotReady
        }
        other => {
            tracing::error!(operation, error = %other, "Data provider error");
            CoreError::DataProvider
        }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn browse_titles(&self, params: &BrowseParams) -> Result<Vec<Title>, CoreError> {
        BrowseRepo::fetch_page(&self.pool, params)
            .await
            .map_err(data_error("browse_titles"))
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, CoreError> {
        GenreRepo::list(&self.pool)
            .await
            .map_err(data_error("list_genres"))
    }

    async fn find_title(&self, id: DbId) -> Result<Option<Title>, CoreError> {
        TitleRepo::find_by_id(&self.pool, id)
            .await
            .map_err(data_error("find_title"))
    }

    async fn title_genres(&self, title_id: DbId) -> Result<Vec<String>, CoreError> {
        TitleRepo::genre_names(&self.pool, title_id)
            .await
            .map_err(data_error("title_genres"))
    }

    async fn title_contributors(
        &self,
        title_id: DbId,
    ) -> Result<Vec<ContributorRoleRow>, CoreError> {
        ContributorRepo::roles_for_title(&self.pool, title_id)
            .await
            .map_err(data_error("title_contributors"))
    }

    async fn find_contributor(&self, id: DbId) -> Result<Option<Contributor>, CoreError> {
        ContributorRepo::find_by_id(&self.pool, id)
            .await
            .map_err(data_error("find_contributor"))
    }

    async fn contributor_titles(
        &self,
        contributor_id: DbId,
    ) -> Result<Vec<TitleRoleRow>, CoreError> {
        TitleRepo::roles_for_contributor(&self.pool, contributor_id)
            .await
            .map_err(data_error("contributor_titles"))
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(data_error("health_check"))
    }
}
