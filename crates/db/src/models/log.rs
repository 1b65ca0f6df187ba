//! Console log entry model.

use sentinel_core::types::{DbId, Timestamp};
use sentinel_core::LogRecord;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LogRow {
    pub id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

impl From<LogRow> for LogRecord {
    fn from(row: LogRow) -> Self {
        LogRecord {
            id: row.id,
            content: row.content,
            created_at: row.created_at,
        }
    }
}
