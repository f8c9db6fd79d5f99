use std::sync::Arc;

use marquee_db::store::CatalogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the catalog store owns the connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Read access to the movie catalog.
    pub catalog: Arc<dyn CatalogStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
