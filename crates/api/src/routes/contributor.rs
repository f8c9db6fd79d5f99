use axum::routing::get;
use axum::Router;

use crate::handlers::contributor;
use crate::state::AppState;

/// Contributor routes mounted at `/contributor`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{contributor_id}", get(contributor::get_contributor_details))
}
