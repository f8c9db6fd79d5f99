use axum::routing::get;
use axum::Router;

use crate::handlers::browse;
use crate::state::AppState;

/// Browse routes mounted at `/browse`.
///
/// ```text
/// GET    /              -> browse_titles
/// GET    /genres        -> browse_genres
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(browse::browse_titles))
        .route("/genres", get(browse::browse_genres))
}
