use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::MacAddress;
use crate::normalize::CapabilityTag;

/// One LLDP neighbor as seen in the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LldpNeighbor {
    pub hostname: String,
    pub port: String,
}

/// Full LLDP information for one neighbor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LldpNeighborDetail {
    /// Aggregate the local port belongs to; empty when standalone.
    pub parent_interface: String,
    pub remote_port: String,
    pub remote_port_description: String,
    pub remote_chassis_id: String,
    pub remote_system_name: String,
    pub remote_system_description: String,
    pub remote_system_capab: BTreeSet<CapabilityTag>,
    pub remote_system_enable_capab: BTreeSet<CapabilityTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArpEntry {
    pub interface: String,
    pub mac: MacAddress,
    pub ip: String,
    /// Seconds; `-1.0` for static or unreadable entries.
    pub age: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ipv6Neighbor {
    pub interface: String,
    pub mac: MacAddress,
    pub ip: String,
    pub age: f64,
    pub state: String,
    pub is_router: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacTableEntry {
    pub mac: MacAddress,
    pub interface: String,
    pub vlan: i64,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub active: bool,
    /// Not reported by OS6.
    pub moves: i64,
    /// Not reported by OS6.
    pub last_move: f64,
}
