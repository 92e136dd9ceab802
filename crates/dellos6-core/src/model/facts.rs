use serde::{Deserialize, Serialize};

/// Basic device identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facts {
    /// Seconds since boot.
    pub uptime: u64,
    pub vendor: String,
    pub model: String,
    pub hostname: String,
    /// `hostname.domain`, or `N/A` when no domain is configured.
    pub fqdn: String,
    pub os_version: String,
    pub serial_number: String,
    /// Canonical interface names, first-seen order, no duplicates.
    pub interface_list: Vec<String>,
}
