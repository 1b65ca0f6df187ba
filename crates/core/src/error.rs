use crate::gateway::GatewayError;
use crate::types::DbId;

/// Why a dispatched command did not produce a regular response.
///
/// None of these escape the console: every variant renders to an in-band
/// text message via [`crate::format::error_message`].
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Malformed or incomplete command text. Always recoverable locally.
    #[error("{0}")]
    UserInput(String),

    /// A well-formed command referencing a nonexistent log id.
    #[error("no log found with id {0}")]
    NotFound(DbId),

    /// The storage gateway failed. Not retried; surfaced with the backend's
    /// own error text.
    #[error("{0}")]
    Backend(String),
}

impl From<GatewayError> for CommandError {
    fn from(err: GatewayError) -> Self {
        CommandError::Backend(err.0)
    }
}
