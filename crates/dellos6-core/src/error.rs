// ── Core error types ──
//
// Errors surfaced by fact-domain operations. Consumers never see ssh exit
// codes or regex compile failures directly: the `From<dellos6_api::Error>`
// impl folds channel and extraction failures into domain variants.
// Unparseable fields are never errors; they degrade to sentinels.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Channel errors ───────────────────────────────────────────────
    #[error("Cannot reach device {host}: {reason}")]
    ConnectionFailed { host: String, reason: String },

    #[error("Device disconnected while running '{command}'")]
    Disconnected { command: String },

    #[error("Device did not answer within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Device errors ────────────────────────────────────────────────
    /// The device rejected a command (explicit error marker in the output).
    #[error("Error while executing '{command}'")]
    Command {
        command: String,
        /// Raw device output, kept for diagnosis.
        output: String,
    },

    // ── Data errors ──────────────────────────────────────────────────
    /// An authoritative source produced no records.
    #[error("No {what} found in '{template}' output")]
    MissingData { template: String, what: String },

    /// An extracted record does not fit its typed shape.
    #[error("Malformed '{template}' record: {message}")]
    Record { template: String, message: String },

    /// Template lookup or definition failure.
    #[error("Template error: {message}")]
    Template { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` for failures of the channel itself.
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::Disconnected { .. } | Self::Timeout { .. }
        )
    }
}

// ── Conversion from boundary errors ──────────────────────────────────

impl From<dellos6_api::Error> for CoreError {
    fn from(err: dellos6_api::Error) -> Self {
        match err {
            dellos6_api::Error::Connection { host, reason } => {
                CoreError::ConnectionFailed { host, reason }
            }
            dellos6_api::Error::Disconnected { command } => CoreError::Disconnected { command },
            dellos6_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            dellos6_api::Error::Io(e) => CoreError::ConnectionFailed {
                host: String::new(),
                reason: e.to_string(),
            },
            e @ dellos6_api::Error::Replay { .. } => CoreError::ConnectionFailed {
                host: "replay".into(),
                reason: e.to_string(),
            },
            e @ (dellos6_api::Error::UnknownTemplate(_)
            | dellos6_api::Error::Template { .. }
            | dellos6_api::Error::TemplateFile(_)) => CoreError::Template {
                message: e.to_string(),
            },
        }
    }
}
