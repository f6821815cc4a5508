use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; per-request handlers hold no mutable state of their
/// own, so one instance serves any number of in-flight requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinelog_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Cache of cacheable single-resource responses.
    pub cache: Arc<ResponseCache>,
}
