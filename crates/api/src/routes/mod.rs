//! Route definitions.
//!
//! The original deployment mounts everything at the root, so there is no
//! `/api/v1` nesting here.

pub mod console;
pub mod health;
pub mod orchestrator;

use axum::Router;

use crate::state::AppState;

/// All application routes except the health check, which `main` mounts
/// separately.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(orchestrator::router())
        .merge(console::router())
}
