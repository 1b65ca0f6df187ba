//! Orchestrator entry persistence endpoints.
//!
//! Simple pass-through CRUD over the `orchestrator` table:
//!
//! ```text
//! POST   /save                      -> save_entry
//! GET    /orchestrator              -> list_entries
//! GET    /orchestrator/type/{type}  -> list_entries_by_type
//! GET    /orchestrator/{id}         -> get_entry
//! DELETE /orchestrator/{id}         -> delete_entry
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use sentinel_core::types::DbId;
use sentinel_db::models::orchestrator::CreateOrchestratorEntry;
use sentinel_db::repositories::OrchestratorRepo;

use crate::error::{AppError, AppResult};
use crate::response::{EntriesResponse, EntryResponse, SingleEntryResponse};
use crate::state::AppState;

/// POST /save
///
/// Persist a typed record. Both `type` and `data` are required; a missing
/// or empty field is this endpoint's own 400, not a deserialization error.
async fn save_entry(
    State(state): State<AppState>,
    Json(input): Json<CreateOrchestratorEntry>,
) -> AppResult<impl IntoResponse> {
    let entry_type = input.entry_type.as_deref().unwrap_or("").trim();
    if entry_type.is_empty() {
        return Err(AppError::BadRequest("Missing type or data".to_string()));
    }
    let Some(data) = input.data.filter(|value| !value.is_null()) else {
        return Err(AppError::BadRequest("Missing type or data".to_string()));
    };

    let entry = OrchestratorRepo::insert(&state.pool, entry_type, &data).await?;

    tracing::info!(entry_id = entry.id, entry_type = %entry.entry_type, "Entry saved");

    Ok((
        StatusCode::CREATED,
        Json(EntryResponse {
            message: "Data saved successfully",
            entry,
        }),
    ))
}

/// GET /orchestrator
///
/// List the 100 newest entries.
async fn list_entries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = OrchestratorRepo::list_recent(&state.pool).await?;
    Ok(Json(EntriesResponse { entries }))
}

/// GET /orchestrator/type/{type}
///
/// List all entries of one type, newest first.
async fn list_entries_by_type(
    State(state): State<AppState>,
    Path(entry_type): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entries = OrchestratorRepo::list_by_type(&state.pool, &entry_type).await?;
    Ok(Json(EntriesResponse { entries }))
}

/// GET /orchestrator/{id}
async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = OrchestratorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Entry not found"))?;

    Ok(Json(SingleEntryResponse { entry }))
}

/// DELETE /orchestrator/{id}
async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = OrchestratorRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Entry not found"))?;

    tracing::info!(entry_id = entry.id, entry_type = %entry.entry_type, "Entry deleted");

    Ok(Json(EntryResponse {
        message: "Data deleted successfully",
        entry,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(save_entry))
        .route("/orchestrator", get(list_entries))
        .route("/orchestrator/type/{type}", get(list_entries_by_type))
        .route("/orchestrator/{id}", get(get_entry).delete(delete_entry))
}
