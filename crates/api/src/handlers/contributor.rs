use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use marquee_core::aggregate::group_roles;
use marquee_core::browse::validate_positive_id;
use marquee_core::error::CoreError;
use marquee_db::models::contributor::ContributorDetail;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /contributor/{contributor_id}
///
/// A contributor with every title they are credited on and their roles there.
pub async fn get_contributor_details(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ContributorDetail>> {
    let Path(raw_id) = raw_id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Undecodable contributor path segment");
        CoreError::invalid("contributor ID")
    })?;
    let id = validate_positive_id(&raw_id, "contributor ID")?;

    let contributor = state
        .catalog
        .find_contributor(id)
        .await?
        .ok_or(CoreError::ContributorNotFound(id))?;

    let rows = state.catalog.contributor_titles(id).await?;
    let titles = group_roles(rows);

    tracing::debug!(contributor_id = id, titles = titles.len(), "Contributor details loaded");

    Ok(Json(ContributorDetail {
        contributor,
        titles,
    }))
}
