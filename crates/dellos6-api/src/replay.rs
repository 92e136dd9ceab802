//! Command channel that serves previously captured output.
//!
//! Used for offline runs against saved `show` output and throughout the
//! test suites. Captures live either in memory or as one file per command
//! in a directory, named by [`capture_name`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::channel::CommandChannel;
use crate::error::Error;

#[derive(Debug)]
enum Source {
    Memory(HashMap<String, String>),
    Directory(PathBuf),
}

/// Replays canned command output and records every command issued.
#[derive(Debug)]
pub struct ReplayChannel {
    source: Source,
    issued: Vec<String>,
}

impl ReplayChannel {
    /// Build from `(command, output)` pairs held in memory.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into().trim().to_owned(), v.into()))
            .collect();
        Self {
            source: Source::Memory(map),
            issued: Vec::new(),
        }
    }

    /// Serve captures from `dir`, one `<capture_name>` file per command.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Directory(dir.into()),
            issued: Vec::new(),
        }
    }

    /// Commands issued so far, in order.
    pub fn issued(&self) -> &[String] {
        &self.issued
    }

    async fn lookup(&self, command: &str) -> Result<String, Error> {
        match &self.source {
            Source::Memory(map) => map.get(command).cloned().ok_or_else(|| Error::Replay {
                command: command.to_owned(),
                path: PathBuf::from("<memory>"),
            }),
            Source::Directory(dir) => read_capture(dir, command).await,
        }
    }
}

impl CommandChannel for ReplayChannel {
    async fn execute(&mut self, command: &str) -> Result<String, Error> {
        let command = command.trim();
        debug!(command, "replaying command");
        self.issued.push(command.to_owned());
        self.lookup(command).await
    }
}

async fn read_capture(dir: &Path, command: &str) -> Result<String, Error> {
    let path = dir.join(capture_name(command));
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::Replay {
            command: command.to_owned(),
            path,
        }),
        Err(e) => Err(Error::Io(e)),
    }
}

/// File name a capture of `command` is stored under.
///
/// Every character outside `[A-Za-z0-9._-]` becomes `_`:
/// `show lldp remote-device detail Te1/0/1` is stored as
/// `show_lldp_remote-device_detail_Te1_0_1.txt`.
pub fn capture_name(command: &str) -> String {
    let mut name: String = command
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    name.push_str(".txt");
    name
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn capture_name_replaces_separators() {
        assert_eq!(capture_name("show version"), "show_version.txt");
        assert_eq!(
            capture_name("show lldp remote-device detail Te1/0/1"),
            "show_lldp_remote-device_detail_Te1_0_1.txt"
        );
        assert_eq!(
            capture_name("ping 10.0.0.1 repeat 5"),
            "ping_10.0.0.1_repeat_5.txt"
        );
    }

    #[tokio::test]
    async fn memory_replay_records_commands() {
        let mut ch = ReplayChannel::from_pairs([("show version", "N4032"), ("show vlan", "")]);
        assert_eq!(ch.execute("show version").await.unwrap(), "N4032");
        assert_eq!(ch.execute("  show vlan ").await.unwrap(), "");
        assert_eq!(ch.issued(), ["show version", "show vlan"]);
    }

    #[tokio::test]
    async fn memory_replay_unknown_command() {
        let mut ch = ReplayChannel::from_pairs([("show version", "N4032")]);
        let err = ch.execute("show clock").await.unwrap_err();
        assert!(matches!(err, Error::Replay { ref command, .. } if command == "show clock"));
        // The failed command is still recorded.
        assert_eq!(ch.issued(), ["show clock"]);
    }

    #[tokio::test]
    async fn directory_replay_reads_capture_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("show_interfaces_status.txt"),
            "Te1/0/1 ... Up\n",
        )
        .unwrap();

        let mut ch = ReplayChannel::from_dir(dir.path());
        let out = ch.execute("show interfaces status").await.unwrap();
        assert_eq!(out, "Te1/0/1 ... Up\n");

        let err = ch.execute("show arp").await.unwrap_err();
        match err {
            Error::Replay { path, .. } => assert!(path.ends_with("show_arp.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
