use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use marquee_core::aggregate::group_roles;
use marquee_core::browse::validate_positive_id;
use marquee_core::error::CoreError;
use marquee_db::models::title::TitleDetail;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /title/{title_id}
///
/// A title with its genres and every credited contributor's roles.
pub async fn get_title_details(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<TitleDetail>> {
    let Path(raw_id) = raw_id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable title path segment");
        CoreError::invalid("title ID")
    })?;
    let id = validate_positive_id(&raw_id, "title ID")?;

    let title = state
        .catalog
        .find_title(id)
        .await?
        .ok_or(CoreError::TitleNotFound(id))?;

    let genres = state.catalog.title_genres(id).await?;
    let rows = state.catalog.title_contributors(id).await?;
    let contributors = group_roles(rows);

    tracing::debug!(
        title_id = id,
        genres = genres.len(),
        contributors = contributors.len(),
        "Title details loaded"
    );

    Ok(Json(TitleDetail {
        title,
        genres,
        contributors,
    }))
}
