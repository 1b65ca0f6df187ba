//! Rendering of command results into their fixed text layouts.
//!
//! Pure functions only; ordering and data are the dispatcher's problem.
//! All output is plain text -- the HTTP layer owns the JSON envelope.

use chrono::SecondsFormat;

use crate::error::CommandError;
use crate::gateway::LogRecord;

/// Fixed platform label shown in the status block.
pub const PLATFORM: &str = "sentinel-orchestrator";

/// Shown by `view` when the logs table is empty.
pub const EMPTY_LOGS: &str = "No logs found.";

/// One line per record: `[<id>] <created_at> → <content>`, joined by
/// newlines. Records are rendered in the order given (newest first as
/// supplied by the gateway); this function does not re-sort.
pub fn log_lines(records: &[LogRecord]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "[{}] {} → {}",
                record.id,
                record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                record.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The fixed multi-line status block.
pub fn status_block(uptime_secs: i64, db_connected: bool, port: u16) -> String {
    let database = if db_connected {
        "CONNECTED"
    } else {
        "DISCONNECTED"
    };

    format!(
        "=== Server Status ===\n\
         Uptime:   {}\n\
         Platform: {PLATFORM}\n\
         Database: {database}\n\
         Port:     {port}",
        uptime(uptime_secs)
    )
}

/// Decompose a second count into `<h>h <m>m <s>s`.
///
/// Hours are unbounded; negative inputs (a clock that went backwards) clamp
/// to zero.
pub fn uptime(total_secs: i64) -> String {
    let total = total_secs.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

/// Static help text listing every recognized verb and its syntax.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     insert <text>  - save a new log entry\n\
     view           - show the 20 most recent log entries\n\
     delete <id>    - remove a log entry by its id\n\
     status         - show server uptime and database connectivity\n\
     help           - show this message"
}

/// Render a failed command as in-band response text.
///
/// User errors and not-found lookups read as polite messages; backend
/// failures carry a `CRITICAL` label plus the backend's own error text.
pub fn error_message(err: &CommandError) -> String {
    match err {
        CommandError::UserInput(msg) => msg.clone(),
        CommandError::NotFound(id) => format!("No log found with id {id}."),
        CommandError::Backend(msg) => format!("CRITICAL: {msg}"),
    }
}
