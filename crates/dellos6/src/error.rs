//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use dellos6_config::ConfigError;
use dellos6_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const COMMAND: i32 = 9;
    pub const DATA: i32 = 10;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach switch {host}")]
    #[diagnostic(
        code(dellos6::connection_failed),
        help(
            "{reason}\n\
             Check that the switch accepts key-based ssh logins.\n\
             Try: ssh {host} show version"
        )
    )]
    ConnectionFailed { host: String, reason: String },

    #[error("Session closed while running '{command}'")]
    #[diagnostic(
        code(dellos6::disconnected),
        help("The ssh session ended before the switch finished printing. Retry the command.")
    )]
    Disconnected { command: String },

    // ── Timeout ──────────────────────────────────────────────────────

    #[error("Switch did not answer within {seconds}s")]
    #[diagnostic(
        code(dellos6::timeout),
        help("Increase timeout with --timeout or check switch responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Device ───────────────────────────────────────────────────────

    #[error("Switch rejected '{command}'")]
    #[diagnostic(
        code(dellos6::command_rejected),
        help("The switch answered:\n{output}")
    )]
    CommandRejected { command: String, output: String },

    #[error("Ping to {destination} failed")]
    #[diagnostic(code(dellos6::ping_failed))]
    PingFailed { destination: String },

    // ── Data ─────────────────────────────────────────────────────────

    #[error("No {what} found in '{template}' output")]
    #[diagnostic(
        code(dellos6::missing_data),
        help(
            "The switch output did not contain the expected table.\n\
             Run with -vv to see the commands issued."
        )
    )]
    MissingData { template: String, what: String },

    #[error("Malformed '{template}' record: {message}")]
    #[diagnostic(code(dellos6::malformed_record))]
    MalformedRecord { template: String, message: String },

    #[error("Template error: {message}")]
    #[diagnostic(
        code(dellos6::template),
        help("Check the template file configured under `templates`.")
    )]
    Template { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dellos6::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(dellos6::profile_not_found),
        help("Available profiles: {available}\nRun: dellos6 profile path")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No switch to talk to")]
    #[diagnostic(
        code(dellos6::no_target),
        help(
            "Pass --host or --replay, or add a profile to the config file.\n\
             Expected at: {path}"
        )
    )]
    NoTarget { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(dellos6::config))]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render JSON: {0}")]
    #[diagnostic(code(dellos6::json))]
    Json(#[from] serde_json::Error),

    #[error("Could not render YAML: {0}")]
    #[diagnostic(code(dellos6::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Disconnected { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::CommandRejected { .. } | Self::PingFailed { .. } => exit_code::COMMAND,
            Self::MissingData { .. } | Self::MalformedRecord { .. } => exit_code::DATA,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::NoTarget { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { host, reason } => {
                CliError::ConnectionFailed { host, reason }
            }
            CoreError::Disconnected { command } => CliError::Disconnected { command },
            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },
            CoreError::Command { command, output } => CliError::CommandRejected {
                command,
                output: output.trim().to_owned(),
            },
            CoreError::MissingData { template, what } => CliError::MissingData { template, what },
            CoreError::Record { template, message } => {
                CliError::MalformedRecord { template, message }
            }
            CoreError::Template { message } => CliError::Template { message },
            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::UnknownProfile { profile } => CliError::ProfileNotFound {
                name: profile,
                available: String::new(),
            },
            ConfigError::Templates(e) => CliError::Template {
                message: e.to_string(),
            },
            ConfigError::Io(e) => CliError::Io(e),
            e @ (ConfigError::Serialization(_) | ConfigError::Figment(_)) => CliError::Config {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_keep_their_exit_codes() {
        let cases = [
            (
                CoreError::ConnectionFailed {
                    host: "sw1".into(),
                    reason: "refused".into(),
                },
                exit_code::CONNECTION,
            ),
            (CoreError::Timeout { timeout_secs: 5 }, exit_code::TIMEOUT),
            (
                CoreError::Command {
                    command: "show bogus".into(),
                    output: "% Invalid input detected at '^' marker.\n".into(),
                },
                exit_code::COMMAND,
            ),
            (
                CoreError::MissingData {
                    template: "show_version".into(),
                    what: "version".into(),
                },
                exit_code::DATA,
            ),
        ];
        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn rejected_command_output_is_trimmed() {
        let err = CliError::from(CoreError::Command {
            command: "show bogus".into(),
            output: "\n% Invalid input\n\n".into(),
        });
        match err {
            CliError::CommandRejected { output, .. } => assert_eq!(output, "% Invalid input"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn config_validation_is_a_usage_error() {
        let err = CliError::from(ConfigError::Validation {
            field: "host".into(),
            reason: "required".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
