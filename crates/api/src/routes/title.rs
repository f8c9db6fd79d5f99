use axum::routing::get;
use axum::Router;

use crate::handlers::title;
use crate::state::AppState;

/// Title routes mounted at `/title`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{title_id}", get(title::get_title_details))
}
