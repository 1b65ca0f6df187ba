//! Repository for the `orchestrator` table.

use sentinel_core::types::DbId;
use sqlx::PgPool;

use crate::models::orchestrator::{DeletedEntry, OrchestratorEntry, SavedEntry};

/// Column list for `orchestrator` queries.
const ENTRY_COLUMNS: &str = "id, type, data, created_at";

/// How many entries an unfiltered listing returns.
const LIST_LIMIT: i64 = 100;

/// Read/write operations for orchestrator entries.
pub struct OrchestratorRepo;

impl OrchestratorRepo {
    /// Insert a new entry, returning the columns the save endpoint echoes.
    pub async fn insert(
        pool: &PgPool,
        entry_type: &str,
        data: &serde_json::Value,
    ) -> Result<SavedEntry, sqlx::Error> {
        sqlx::query_as::<_, SavedEntry>(
            "INSERT INTO orchestrator (type, data) \
             VALUES ($1, $2) \
             RETURNING id, type, created_at",
        )
        .bind(entry_type)
        .bind(data)
        .fetch_one(pool)
        .await
    }

    /// List the newest entries, capped at 100.
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<OrchestratorEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM orchestrator ORDER BY created_at DESC LIMIT $1"
        );
        sqlx::query_as::<_, OrchestratorEntry>(&query)
            .bind(LIST_LIMIT)
            .fetch_all(pool)
            .await
    }

    /// List all entries of one type, newest first.
    pub async fn list_by_type(
        pool: &PgPool,
        entry_type: &str,
    ) -> Result<Vec<OrchestratorEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {ENTRY_COLUMNS} FROM orchestrator WHERE type = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, OrchestratorEntry>(&query)
            .bind(entry_type)
            .fetch_all(pool)
            .await
    }

    /// Find a single entry by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OrchestratorEntry>, sqlx::Error> {
        let query = format!("SELECT {ENTRY_COLUMNS} FROM orchestrator WHERE id = $1");
        sqlx::query_as::<_, OrchestratorEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by id, returning the columns the delete endpoint
    /// echoes, or `None` if there was no match.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<DeletedEntry>, sqlx::Error> {
        sqlx::query_as::<_, DeletedEntry>(
            "DELETE FROM orchestrator WHERE id = $1 RETURNING id, type",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
