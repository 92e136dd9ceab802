use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::normalize::{INT_UNKNOWN, TEXT_UNKNOWN};

/// BGP state of one routing instance (OS6 only has `global`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgpInstance {
    pub router_id: String,
    pub peers: IndexMap<String, BgpPeer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgpPeer {
    pub local_as: i64,
    pub remote_as: i64,
    pub remote_id: String,
    pub is_up: bool,
    pub is_enabled: bool,
    pub description: String,
    /// Seconds in the current state.
    pub uptime: i64,
    pub address_family: IndexMap<String, AddressFamily>,
}

impl Default for BgpPeer {
    fn default() -> Self {
        Self {
            local_as: INT_UNKNOWN,
            remote_as: INT_UNKNOWN,
            remote_id: TEXT_UNKNOWN.to_owned(),
            is_up: false,
            is_enabled: true,
            description: String::new(),
            uptime: INT_UNKNOWN,
            address_family: IndexMap::new(),
        }
    }
}

/// Prefix counters for one address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFamily {
    pub received_prefixes: i64,
    pub accepted_prefixes: i64,
    pub sent_prefixes: i64,
}

impl Default for AddressFamily {
    fn default() -> Self {
        Self {
            received_prefixes: INT_UNKNOWN,
            accepted_prefixes: INT_UNKNOWN,
            sent_prefixes: INT_UNKNOWN,
        }
    }
}
