// ── Command channel seam ──
//
// Everything above this trait treats the device as "send a command string,
// get the raw text back". The channel is stateful and not reentrant, so
// `execute` takes `&mut self`: one command in flight per channel.

use std::future::Future;

use crate::error::Error;

/// A session that runs one CLI command on a device and returns its output.
pub trait CommandChannel {
    /// Run `command` and return the raw text the device printed.
    ///
    /// Transport failures (unreachable host, closed session, timeout) are
    /// returned as errors. Device-reported command errors are *not*
    /// detected here; the output is returned as-is.
    fn execute(&mut self, command: &str) -> impl Future<Output = Result<String, Error>> + Send;
}
