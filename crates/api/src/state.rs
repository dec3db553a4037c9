use std::sync::Arc;

use crate::config::ServerConfig;
use crate::uploads::FileStore;

/// State handed to every handler through `State<AppState>`.
///
/// Cloning is cheap: the pool and file store clone by handle and the config
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Postgres connection pool.
    pub pool: chitrashala_db::DbPool,
    /// Server configuration (JWT settings, timeouts, CORS).
    pub config: Arc<ServerConfig>,
    /// Image storage for artwork uploads.
    pub uploads: FileStore,
}
