//! Handlers for paginated title browsing and the genre filter list.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Datelike;
use marquee_core::browse::BrowseQuery;
use marquee_core::error::CoreError;
use marquee_db::models::browse::BrowsePage;
use marquee_db::models::genre::Genre;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /browse
///
/// Search and filter titles. Parameters are validated against the current
/// UTC year before the catalog is queried.
pub async fn browse_titles(
    State(state): State<AppState>,
    query: Result<Query<BrowseQuery>, QueryRejection>,
) -> AppResult<Json<BrowsePage>> {
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable browse query string");
        CoreError::invalid("query")
    })?;

    let current_year = chrono::Utc::now().year();
    let params = query.validate(current_year)?;

    let results = state.catalog.browse_titles(&params).await?;

    tracing::debug!(
        offset = params.offset,
        page_size = params.page_size,
        words = params.search_words.len(),
        results = results.len(),
        "Browse executed"
    );

    Ok(Json(BrowsePage {
        offset: params.offset,
        page_size: params.page_size,
        results,
    }))
}

/// GET /browse/genres
///
/// All genres; their ids are the accepted values of `genre` on `/browse`.
pub async fn browse_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.catalog.list_genres().await?;
    Ok(Json(genres))
}
