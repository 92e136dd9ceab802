//! The channel a CLI invocation talks through: live ssh or saved captures.

use dellos6_api::{CommandChannel, Error, ReplayChannel, SshChannel};

#[derive(Debug)]
pub enum SwitchChannel {
    Ssh(SshChannel),
    Replay(ReplayChannel),
}

impl SwitchChannel {
    pub fn describe(&self) -> String {
        match self {
            Self::Ssh(ssh) => format!("ssh://{}:{}", ssh.config().host, ssh.config().port),
            Self::Replay(_) => "replay".into(),
        }
    }
}

impl CommandChannel for SwitchChannel {
    async fn execute(&mut self, command: &str) -> Result<String, Error> {
        match self {
            Self::Ssh(ssh) => ssh.execute(command).await,
            Self::Replay(replay) => replay.execute(command).await,
        }
    }
}
