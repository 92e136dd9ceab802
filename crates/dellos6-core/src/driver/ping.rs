use dellos6_api::CommandChannel;

use super::Driver;
use crate::error::CoreError;
use crate::ping::{PingOutcome, PingRequest, parse_statistics};

impl<C: CommandChannel + Send> Driver<C> {
    /// Ping from the device. A rejected command is an error outcome, not
    /// an `Err`; only channel failures propagate.
    pub async fn ping(&mut self, request: &PingRequest) -> Result<PingOutcome, CoreError> {
        let command = request.command();
        let raw = self.execute(&command).await?;
        if self.is_rejected(&raw) {
            return Ok(PingOutcome::Error {
                message: format!("Error while executing '{command}': {}", raw.trim()),
            });
        }
        Ok(parse_statistics(&command, &raw))
    }
}
