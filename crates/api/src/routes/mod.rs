pub mod browse;
pub mod contributor;
pub mod health;
pub mod title;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /browse                              paginated search (GET)
/// /browse/genres                       genre filter options (GET)
/// /title/{title_id}                    title details (GET)
/// /contributor/{contributor_id}        contributor details (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/browse", browse::router())
        .nest("/title", title::router())
        .nest("/contributor", contributor::router())
}
