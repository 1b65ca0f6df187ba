use std::sync::Arc;

use sentinel_core::Console;
use sentinel_db::PgLogGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sentinel_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The command console, constructed once at startup with the process
    /// start time and listening port.
    pub console: Arc<Console<PgLogGateway>>,
}
