use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::MacAddress;
use crate::normalize::{FLOAT_UNKNOWN, INT_UNKNOWN};

/// MTU assumed until a configuration source says otherwise.
pub const DEFAULT_MTU: i64 = 1500;

/// Link and configuration state of one interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub is_up: bool,
    pub is_enabled: bool,
    pub description: String,
    /// Seconds since the last link change; not reported by OS6 (`-1.0`).
    pub last_flapped: f64,
    /// Mbit/s, `-1` when unknown.
    pub speed: i64,
    /// Bytes, `-1` when the device reports a non-numeric MTU.
    pub mtu: i64,
    pub mac_address: MacAddress,
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            is_up: false,
            is_enabled: false,
            description: String::new(),
            last_flapped: FLOAT_UNKNOWN,
            speed: INT_UNKNOWN,
            mtu: DEFAULT_MTU,
            mac_address: MacAddress::default(),
        }
    }
}

/// Packet and error counters of one interface. `-1` marks counters the
/// device does not report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceCounters {
    pub tx_errors: i64,
    pub rx_errors: i64,
    pub tx_discards: i64,
    pub rx_discards: i64,
    pub tx_octets: i64,
    pub rx_octets: i64,
    pub tx_unicast_packets: i64,
    pub rx_unicast_packets: i64,
    pub tx_multicast_packets: i64,
    pub rx_multicast_packets: i64,
    pub tx_broadcast_packets: i64,
    pub rx_broadcast_packets: i64,
}

impl Default for InterfaceCounters {
    fn default() -> Self {
        Self {
            tx_errors: INT_UNKNOWN,
            rx_errors: INT_UNKNOWN,
            tx_discards: INT_UNKNOWN,
            rx_discards: INT_UNKNOWN,
            tx_octets: INT_UNKNOWN,
            rx_octets: INT_UNKNOWN,
            tx_unicast_packets: INT_UNKNOWN,
            rx_unicast_packets: INT_UNKNOWN,
            tx_multicast_packets: INT_UNKNOWN,
            rx_multicast_packets: INT_UNKNOWN,
            tx_broadcast_packets: INT_UNKNOWN,
            rx_broadcast_packets: INT_UNKNOWN,
        }
    }
}

/// An address assigned to an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixLength {
    /// `-1` when the mask could not be read.
    pub prefix_length: i64,
}

/// IPv4 and IPv6 addresses of one interface, address → prefix length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceIp {
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub ipv4: IndexMap<String, PrefixLength>,
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub ipv6: IndexMap<String, PrefixLength>,
}
