//! Command channel backed by the system `ssh` client.
//!
//! Each command runs as one non-interactive `ssh host command` invocation
//! with key-based authentication (`BatchMode=yes`, so ssh never prompts).

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::channel::CommandChannel;
use crate::error::Error;

/// ssh exits with this status when the connection itself failed.
const SSH_CONNECTION_FAILURE: i32 = 255;

/// Connection parameters for an [`SshChannel`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Hostname or address of the switch.
    pub host: String,
    pub port: u16,
    /// Login name. `None` leaves it to ssh (`~/.ssh/config`, `$USER`).
    pub username: Option<String>,
    /// Private key passed with `-i`.
    pub identity_file: Option<PathBuf>,
    /// Extra `-o` options, e.g. `StrictHostKeyChecking=accept-new`.
    pub ssh_options: Vec<String>,
    /// Upper bound for a single command, connection setup included.
    pub timeout: Duration,
    /// ssh executable to spawn.
    pub ssh_binary: PathBuf,
}

impl SessionConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 22,
            username: None,
            identity_file: None,
            ssh_options: Vec::new(),
            timeout: Duration::from_secs(60),
            ssh_binary: PathBuf::from("ssh"),
        }
    }
}

/// Runs commands through the local OpenSSH client.
#[derive(Debug)]
pub struct SshChannel {
    config: SessionConfig,
}

impl SshChannel {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Arguments passed to the ssh binary for `command`.
    pub fn command_args(&self, command: &str) -> Vec<String> {
        let cfg = &self.config;
        let mut args = vec![
            "-o".to_owned(),
            "BatchMode=yes".to_owned(),
            "-o".to_owned(),
            format!("ConnectTimeout={}", cfg.timeout.as_secs().max(1)),
            "-p".to_owned(),
            cfg.port.to_string(),
        ];
        if let Some(ref identity) = cfg.identity_file {
            args.push("-i".to_owned());
            args.push(identity.display().to_string());
        }
        if let Some(ref user) = cfg.username {
            args.push("-l".to_owned());
            args.push(user.clone());
        }
        for opt in &cfg.ssh_options {
            args.push("-o".to_owned());
            args.push(opt.clone());
        }
        // Options end here; a host such as `-oProxyCommand=...` stays a host.
        args.push("--".to_owned());
        args.push(cfg.host.clone());
        args.push(command.to_owned());
        args
    }
}

impl CommandChannel for SshChannel {
    async fn execute(&mut self, command: &str) -> Result<String, Error> {
        let args = self.command_args(command);
        debug!(host = %self.config.host, command, "running command over ssh");

        let child = Command::new(&self.config.ssh_binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = tokio::time::timeout(self.config.timeout, child.wait_with_output())
            .await
            .map_err(|_| Error::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            })??;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        match output.status.code() {
            Some(SSH_CONNECTION_FAILURE) => Err(Error::Connection {
                host: self.config.host.clone(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            }),
            // Killed by a signal before finishing.
            None => Err(Error::Disconnected {
                command: command.to_owned(),
            }),
            Some(code) => {
                debug!(code, bytes = stdout.len(), "ssh command finished");
                Ok(stdout)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn command_args_include_identity_user_and_options() {
        let mut config = SessionConfig::new("sw1.example.net");
        config.port = 2222;
        config.username = Some("admin".into());
        config.identity_file = Some(PathBuf::from("/keys/id_ed25519"));
        config.ssh_options = vec!["StrictHostKeyChecking=accept-new".into()];
        config.timeout = Duration::from_secs(15);

        let args = SshChannel::new(config).command_args("show version");
        assert_eq!(
            args,
            vec![
                "-o",
                "BatchMode=yes",
                "-o",
                "ConnectTimeout=15",
                "-p",
                "2222",
                "-i",
                "/keys/id_ed25519",
                "-l",
                "admin",
                "-o",
                "StrictHostKeyChecking=accept-new",
                "--",
                "sw1.example.net",
                "show version",
            ]
        );
    }

    #[test]
    fn command_args_minimal() {
        let args = SshChannel::new(SessionConfig::new("10.0.0.1")).command_args("show vlan");
        assert_eq!(args.last().unwrap(), "show vlan");
        assert_eq!(args[args.len() - 2], "10.0.0.1");
        assert!(!args.contains(&"-i".to_owned()));
        assert!(!args.contains(&"-l".to_owned()));
    }

    #[test]
    fn host_is_never_read_as_an_option() {
        let args = SshChannel::new(SessionConfig::new("-oProxyCommand=touch_x"))
            .command_args("show version");
        let end = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(args[end + 1], "-oProxyCommand=touch_x");
        assert_eq!(end + 3, args.len());
    }

    #[tokio::test]
    async fn missing_ssh_binary_is_io_error() {
        let mut config = SessionConfig::new("10.0.0.1");
        config.ssh_binary = PathBuf::from("/nonexistent/dellos6-ssh");
        let err = SshChannel::new(config)
            .execute("show version")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)), "got {err:?}");
    }
}
