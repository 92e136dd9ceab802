// dellos6-api: device-facing boundary for Dell Networking OS6 switches.
//
// Command channels (system ssh, capture replay) and the template engine
// that turns raw `show` output into records.

pub mod channel;
pub mod error;
pub mod extract;
pub mod replay;
pub mod ssh;

pub use channel::CommandChannel;
pub use error::Error;
pub use extract::{Record, RecordExtractor, TemplateSet};
pub use replay::{ReplayChannel, capture_name};
pub use ssh::{SessionConfig, SshChannel};
