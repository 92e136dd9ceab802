//! LLDP system capability decoding.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// LLDP system capability (IEEE 802.1AB).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CapabilityTag {
    Other,
    Repeater,
    Bridge,
    WlanAccessPoint,
    Router,
    Telephone,
    DocsisCableDevice,
    Station,
}

impl CapabilityTag {
    /// Decode a single-letter code (`b`, `r`, ...) or a spelled-out name
    /// with whitespace already removed (`WLANAccessPoint`).
    pub fn from_code(code: &str) -> Option<Self> {
        let tag = match code.to_ascii_lowercase().as_str() {
            "o" | "other" => Self::Other,
            "p" | "repeater" => Self::Repeater,
            "b" | "bridge" => Self::Bridge,
            "w" | "wlanaccesspoint" | "wlan-access-point" => Self::WlanAccessPoint,
            "r" | "router" => Self::Router,
            "t" | "telephone" => Self::Telephone,
            "c" | "docsiscabledevice" | "docsis-cable-device" => Self::DocsisCableDevice,
            "s" | "station" | "stationonly" => Self::Station,
            _ => return None,
        };
        Some(tag)
    }
}

/// Decode a comma-separated capability list; unknown codes are dropped.
pub fn decode_capabilities(text: &str) -> BTreeSet<CapabilityTag> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(',')
        .filter(|code| !code.is_empty())
        .filter_map(|code| {
            let tag = CapabilityTag::from_code(code);
            if tag.is_none() {
                trace!(code, "unknown capability code");
            }
            tag
        })
        .collect()
}
