//! The command console: parse, dispatch, render.
//!
//! [`Console::execute`] is the single operation the HTTP layer calls. It is
//! total -- every input, well-formed or not, comes back as response text,
//! and no gateway failure crosses this boundary as anything but a rendered
//! message.

use chrono::Utc;

use crate::command::{self, Command};
use crate::error::CommandError;
use crate::format;
use crate::gateway::LogGateway;
use crate::types::{DbId, Timestamp};

/// How many records a `view` command returns.
const VIEW_LIMIT: i64 = 20;

/// The console façade over a storage gateway.
///
/// Holds the only process-wide state the interpreter needs: the start time
/// captured once at construction (for `status` uptime) and the listening
/// port (displayed in the status block). Both are immutable.
pub struct Console<G> {
    gateway: G,
    started_at: Timestamp,
    port: u16,
}

impl<G: LogGateway> Console<G> {
    pub fn new(gateway: G, started_at: Timestamp, port: u16) -> Self {
        Self {
            gateway,
            started_at,
            port,
        }
    }

    /// Execute one line of console input and render the response.
    pub async fn execute(&self, raw: &str) -> String {
        match self.dispatch(command::parse(raw)).await {
            Ok(text) => text,
            Err(err) => format::error_message(&err),
        }
    }

    async fn dispatch(&self, cmd: Command) -> Result<String, CommandError> {
        match cmd {
            Command::Insert { content } => self.insert(&content).await,
            Command::View => self.view().await,
            Command::Delete { raw_id } => self.delete(&raw_id).await,
            Command::Status => Ok(self.status().await),
            Command::Help => Ok(format::help_text().to_string()),
            Command::Unknown { input } => Err(CommandError::UserInput(format!(
                "Unknown command: \"{input}\". Type \"help\" for a list of commands."
            ))),
        }
    }

    async fn insert(&self, content: &str) -> Result<String, CommandError> {
        if content.is_empty() {
            return Err(CommandError::UserInput(
                "no text provided for insert".to_string(),
            ));
        }
        let record = self.gateway.insert_log(content).await?;
        Ok(format!("Saved log [{}]", record.id))
    }

    async fn view(&self) -> Result<String, CommandError> {
        let records = self.gateway.list_recent_logs(VIEW_LIMIT).await?;
        if records.is_empty() {
            return Ok(format::EMPTY_LOGS.to_string());
        }
        Ok(format::log_lines(&records))
    }

    async fn delete(&self, raw_id: &str) -> Result<String, CommandError> {
        // Base-10 only; anything unparseable as i64 (non-numeric, empty,
        // overflow) is rejected here without touching storage.
        let id: DbId = match raw_id.parse() {
            Ok(id) => id,
            Err(_) => {
                return Err(CommandError::UserInput(format!(
                    "invalid ID format: \"{raw_id}\""
                )))
            }
        };
        match self.gateway.delete_log(id).await? {
            Some(record) => Ok(format!("Deleted log [{}]", record.id)),
            None => Err(CommandError::NotFound(id)),
        }
    }

    /// Build the status block. A failed liveness probe is deliberately
    /// swallowed into `DISCONNECTED` rather than propagated; the degraded
    /// status is itself the successful response.
    async fn status(&self) -> String {
        let uptime_secs = (Utc::now() - self.started_at).num_seconds();
        let connected = self.gateway.ping().await.is_ok();
        format::status_block(uptime_secs, connected, self.port)
    }
}
