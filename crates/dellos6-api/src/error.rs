use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `dellos6-api` crate.
///
/// Covers the two device-facing seams: issuing commands over a channel
/// and turning raw command output into records. `dellos6-core` maps these
/// into domain errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Channel ─────────────────────────────────────────────────────
    /// The channel could not be established (ssh exited before running
    /// the command, host unreachable, authentication refused).
    #[error("Connection to {host} failed: {reason}")]
    Connection { host: String, reason: String },

    /// The channel was torn down while a command was in flight.
    #[error("Channel closed while running '{command}'")]
    Disconnected { command: String },

    /// The command did not complete within the channel timeout.
    #[error("Command timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Local I/O failure (spawning ssh, reading a capture).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A replay channel has no capture for the requested command.
    #[error("No captured output for '{command}' (looked in {})", path.display())]
    Replay { command: String, path: PathBuf },

    // ── Extraction ──────────────────────────────────────────────────
    /// The extractor was asked for a template it does not know.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A template definition is invalid (bad regex, undeclared value).
    #[error("Invalid template '{id}': {message}")]
    Template { id: String, message: String },

    /// The template file could not be parsed.
    #[error("Template file error: {0}")]
    TemplateFile(#[from] toml::de::Error),
}

impl Error {
    /// Returns `true` if the failure came from the channel rather than
    /// from the extraction layer.
    pub fn is_channel(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::Disconnected { .. } | Self::Timeout { .. }
        )
    }
}
