use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::MediaClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: trackvote_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Best-effort cover-art lookup client.
    pub media: Arc<MediaClient>,
}
