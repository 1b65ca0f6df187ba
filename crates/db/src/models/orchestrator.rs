//! Orchestrator entry models and DTOs.
//!
//! The wire name of the `entry_type` field is `type`, matching both the
//! column name and the JSON the original deployment's clients already send.

use sentinel_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row from the `orchestrator` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrchestratorEntry {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub entry_type: String,
    pub data: serde_json::Value,
    pub created_at: Timestamp,
}

/// The subset echoed back by `POST /save`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SavedEntry {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub entry_type: String,
    pub created_at: Timestamp,
}

/// The subset echoed back by `DELETE /orchestrator/{id}`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeletedEntry {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub entry_type: String,
}

/// Request body for `POST /save`.
///
/// Both fields are optional at the serde level so the handler can answer
/// missing ones with the endpoint's own 400 message instead of a generic
/// deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateOrchestratorEntry {
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub data: Option<serde_json::Value>,
}
