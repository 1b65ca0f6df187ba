//! The storage boundary the console depends on.
//!
//! The console never talks to PostgreSQL directly; it sees this trait only.
//! `sentinel-db` provides the production implementation, tests provide an
//! in-memory fake.

use async_trait::async_trait;
use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// A persisted log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// Opaque storage failure carrying the backend's own message.
///
/// The message is whatever the driver reports; credentials and connection
/// internals are never part of it.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct GatewayError(pub String);

/// Narrow query interface to the relational store.
#[async_trait]
pub trait LogGateway: Send + Sync {
    /// Persist a new log entry and return the stored record.
    async fn insert_log(&self, content: &str) -> Result<LogRecord, GatewayError>;

    /// Return the newest entries, ordered by `(created_at DESC, id DESC)`.
    ///
    /// The id tiebreak keeps the ordering deterministic when timestamps
    /// collide at sub-second resolution.
    async fn list_recent_logs(&self, limit: i64) -> Result<Vec<LogRecord>, GatewayError>;

    /// Delete an entry by id, returning the deleted record if it existed.
    async fn delete_log(&self, id: DbId) -> Result<Option<LogRecord>, GatewayError>;

    /// Lightweight liveness probe.
    async fn ping(&self) -> Result<(), GatewayError>;
}
