//! The HTTP face of the command console.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::response::CommandResponse;
use crate::state::AppState;

/// Request body for `POST /command`.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

/// POST /command -- run one line of console input.
///
/// Always answers 200 with `{ "response": ... }`: malformed command text and
/// backend failures come back as in-band text, never as an HTTP error.
async fn run_command(
    State(state): State<AppState>,
    Json(input): Json<CommandRequest>,
) -> Json<CommandResponse> {
    let response = state.console.execute(&input.command).await;
    Json(CommandResponse { response })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/command", post(run_command))
}
