//! Free-text command parsing for the log console.

/// A parsed console command.
///
/// Verb keywords match ASCII case-insensitively. The `insert` payload keeps
/// the caller's original casing; the `delete` argument stays a raw string
/// here and is validated by the dispatcher, not the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `insert <text>` -- persist a new log entry.
    Insert { content: String },
    /// `view` -- list the most recent log entries.
    View,
    /// `delete <id>` -- remove a log entry by id.
    Delete { raw_id: String },
    /// `status` -- report uptime and database connectivity.
    Status,
    /// `help` -- list the recognized commands.
    Help,
    /// Anything unrecognized, carrying the lowercased trimmed input for the
    /// error message.
    Unknown { input: String },
}

/// Parse one line of raw console input into a [`Command`].
///
/// Total over all inputs: empty or unrecognized text becomes
/// [`Command::Unknown`], never an error. First match wins, in the order
/// `insert`, `view`, `delete`, `status`, `help`.
pub fn parse(raw: &str) -> Command {
    let trimmed = raw.trim();

    if let Some(content) = strip_verb(trimmed, "insert ") {
        return Command::Insert {
            content: content.to_string(),
        };
    }
    if trimmed.eq_ignore_ascii_case("view") {
        return Command::View;
    }
    if let Some(raw_id) = strip_verb(trimmed, "delete ") {
        return Command::Delete {
            raw_id: raw_id.to_string(),
        };
    }
    if trimmed.eq_ignore_ascii_case("status") {
        return Command::Status;
    }
    if trimmed.eq_ignore_ascii_case("help") {
        return Command::Help;
    }

    Command::Unknown {
        input: trimmed.to_lowercase(),
    }
}

/// ASCII case-insensitive prefix match returning the trimmed remainder of
/// the original string, so argument casing survives verb normalization.
///
/// The char-boundary check keeps the slice valid when the input starts with
/// multi-byte characters that happen to be longer than the prefix.
fn strip_verb<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if text.len() >= prefix.len()
        && text.is_char_boundary(prefix.len())
        && text[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(text[prefix.len()..].trim())
    } else {
        None
    }
}
