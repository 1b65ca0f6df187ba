//! Shared response envelope types for API handlers.
//!
//! Mutating orchestrator endpoints answer `{ "message": ..., "entry": ... }`,
//! list endpoints answer `{ "entries": [...] }`, and the console endpoint
//! answers `{ "response": ... }`. Using these structs instead of ad-hoc
//! `serde_json::json!` keeps the shapes compile-time checked.

use serde::Serialize;

/// `{ "message": ..., "entry": ... }` envelope.
#[derive(Debug, Serialize)]
pub struct EntryResponse<T: Serialize> {
    pub message: &'static str,
    pub entry: T,
}

/// `{ "entries": [...] }` envelope.
#[derive(Debug, Serialize)]
pub struct EntriesResponse<T: Serialize> {
    pub entries: Vec<T>,
}

/// `{ "entry": ... }` envelope for single-entry reads.
#[derive(Debug, Serialize)]
pub struct SingleEntryResponse<T: Serialize> {
    pub entry: T,
}

/// `{ "response": ... }` envelope for console command output.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub response: String,
}
