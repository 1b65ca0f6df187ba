//! Repository for the `logs` table.

use sentinel_core::types::DbId;
use sqlx::PgPool;

use crate::models::log::LogRow;

/// Column list for `logs` queries.
const LOG_COLUMNS: &str = "id, content, created_at";

/// Read/write operations for console log entries.
pub struct LogRepo;

impl LogRepo {
    /// Insert a new log entry, returning the stored row.
    pub async fn insert(pool: &PgPool, content: &str) -> Result<LogRow, sqlx::Error> {
        let query = format!("INSERT INTO logs (content) VALUES ($1) RETURNING {LOG_COLUMNS}");
        sqlx::query_as::<_, LogRow>(&query)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// List the newest entries. Ties on `created_at` break by `id` so the
    /// ordering stays deterministic at sub-second timestamp resolution.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<LogRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LOG_COLUMNS} FROM logs ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, LogRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Delete an entry by id, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<LogRow>, sqlx::Error> {
        let query = format!("DELETE FROM logs WHERE id = $1 RETURNING {LOG_COLUMNS}");
        sqlx::query_as::<_, LogRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
