// ── Typed records ──
//
// One struct per extraction template. Loose field → value records are
// converted exactly once, right after extraction; everything downstream
// works on these types. Field names match the template's declared values.

use dellos6_api::Record;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::de::value::{Error as ValueError, MapDeserializer};

use crate::error::CoreError;

/// A record type bound to the template that produces it.
pub trait TemplateRecord: DeserializeOwned {
    /// Template id passed to the extractor.
    const TEMPLATE: &'static str;

    /// Convert one extracted record; a field missing from the record is a
    /// [`CoreError::Record`] naming the template.
    fn from_record(record: Record) -> Result<Self, CoreError> {
        let de = MapDeserializer::<_, ValueError>::new(record.into_iter());
        Self::deserialize(de).map_err(|e| CoreError::Record {
            template: Self::TEMPLATE.to_owned(),
            message: e.to_string(),
        })
    }
}

macro_rules! template_record {
    ($ty:ident => $template:literal) => {
        impl TemplateRecord for $ty {
            const TEMPLATE: &'static str = $template;
        }
    };
}

// ── System ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct VersionRecord {
    pub model: String,
    pub serial_num: String,
}
template_record!(VersionRecord => "show_version");

#[derive(Debug, Clone, Deserialize)]
pub struct SwitchRecord {
    pub unit: String,
    pub version: String,
}
template_record!(SwitchRecord => "show_switch");

#[derive(Debug, Clone, Deserialize)]
pub struct SystemRecord {
    pub sys_name: String,
    pub uptime: String,
    pub contact: String,
    pub location: String,
}
template_record!(SystemRecord => "show_system");

#[derive(Debug, Clone, Deserialize)]
pub struct TemperatureRecord {
    pub unit: String,
    pub sensor: String,
    pub temperature: String,
    pub status: String,
}
template_record!(TemperatureRecord => "show_system_temperature");

#[derive(Debug, Clone, Deserialize)]
pub struct FanRecord {
    pub unit: String,
    pub fan: String,
    pub status: String,
}
template_record!(FanRecord => "show_system_fans");

#[derive(Debug, Clone, Deserialize)]
pub struct PowerRecord {
    pub unit: String,
    pub supply: String,
    pub status: String,
    pub current_power: String,
}
template_record!(PowerRecord => "show_system_power");

#[derive(Debug, Clone, Deserialize)]
pub struct HostsRecord {
    pub domain: String,
}
template_record!(HostsRecord => "show_hosts");

#[derive(Debug, Clone, Deserialize)]
pub struct MemoryRecord {
    pub used: String,
    pub available: String,
}
template_record!(MemoryRecord => "show_memory_cpu");

#[derive(Debug, Clone, Deserialize)]
pub struct CpuRecord {
    pub five_seconds: String,
}
template_record!(CpuRecord => "show_process_cpu");

// ── Interfaces ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceStatusRecord {
    pub interface: String,
    pub speed: String,
    pub link_state: String,
}
template_record!(InterfaceStatusRecord => "show_interfaces_status");

#[derive(Debug, Clone, Deserialize)]
pub struct IpInterfaceRecord {
    pub interface: String,
    pub link_state: String,
    pub ip_address: String,
    pub ip_mask: String,
}
template_record!(IpInterfaceRecord => "show_ip_interface");

#[derive(Debug, Clone, Deserialize)]
pub struct Ipv6InterfaceRecord {
    pub interface: String,
    pub ipv6_address: String,
    pub prefix_length: String,
}
template_record!(Ipv6InterfaceRecord => "show_ipv6_interface_brief");

#[derive(Debug, Clone, Deserialize)]
pub struct StackPortRecord {
    pub interface: String,
    pub link_state: String,
    pub speed: String,
}
template_record!(StackPortRecord => "show_switch_stack-ports");

#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceConfigRecord {
    pub interface: String,
    pub speed: String,
    pub mtu: String,
    pub admin_state: String,
}
template_record!(InterfaceConfigRecord => "show_interfaces_configuration");

#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceDescriptionRecord {
    pub interface: String,
    pub desc: String,
}
template_record!(InterfaceDescriptionRecord => "show_interfaces_description");

#[derive(Debug, Clone, Deserialize)]
pub struct InterfaceDetailRecord {
    pub interface: String,
    pub mac_address: String,
}
template_record!(InterfaceDetailRecord => "show_interfaces");

/// One row of the receive or transmit packet table.
#[derive(Debug, Clone, Deserialize)]
pub struct PacketCountersRecord {
    pub interface: String,
    pub unicast: String,
    pub multicast: String,
    pub broadcast: String,
}

/// Receive table of `show interfaces counters`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RxCountersRecord(pub PacketCountersRecord);
template_record!(RxCountersRecord => "show_interfaces_counters_rx");

/// Transmit table of `show interfaces counters`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct TxCountersRecord(pub PacketCountersRecord);
template_record!(TxCountersRecord => "show_interfaces_counters_tx");

#[derive(Debug, Clone, Deserialize)]
pub struct CounterErrorsRecord {
    pub interface: String,
    pub rx_errors: String,
    pub tx_errors: String,
    pub tx_discards: String,
}
template_record!(CounterErrorsRecord => "show_interfaces_counters_errors");

#[derive(Debug, Clone, Deserialize)]
pub struct OpticsRecord {
    pub interface: String,
    pub current: String,
    pub output_power: String,
    pub input_power: String,
}
template_record!(OpticsRecord => "show_fiber-ports_optical-transceiver");

// ── Neighbors ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LldpSummaryRecord {
    pub interface: String,
    pub chassis_id: String,
    pub port_id: String,
    pub host_name: String,
}
template_record!(LldpSummaryRecord => "show_lldp_remote-device_all");

#[derive(Debug, Clone, Deserialize)]
pub struct LldpDetailRecord {
    pub chassis_id: String,
    pub port_id: String,
    pub host_name: String,
    pub system_description: String,
    pub port_description: String,
    pub capabilities_supported: String,
    pub capabilities_enabled: String,
}
template_record!(LldpDetailRecord => "show_lldp_remote-device_detail");

#[derive(Debug, Clone, Deserialize)]
pub struct ArpRecord {
    pub ip_address: String,
    pub mac_address: String,
    pub interface: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub age: String,
}
template_record!(ArpRecord => "show_arp");

#[derive(Debug, Clone, Deserialize)]
pub struct Ipv6NeighborRecord {
    pub interface: String,
    pub ip_address: String,
    pub mac_address: String,
    pub is_router: String,
    pub state: String,
    pub age: String,
}
template_record!(Ipv6NeighborRecord => "show_ipv6_neighbors");

#[derive(Debug, Clone, Deserialize)]
pub struct MacTableRecord {
    pub vlan: String,
    pub mac_address: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub interface: String,
}
template_record!(MacTableRecord => "show_mac_address-table");

// ── Routing ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct BgpSummaryRecord {
    pub router_id: String,
    pub local_as: String,
}
template_record!(BgpSummaryRecord => "show_ip_bgp_summary");

#[derive(Debug, Clone, Deserialize)]
pub struct BgpSummaryPeerRecord {
    pub neighbor: String,
    pub remote_as: String,
    pub state: String,
    pub up_down: String,
    pub received_prefixes: String,
}
template_record!(BgpSummaryPeerRecord => "show_ip_bgp_summary_peers");

#[derive(Debug, Clone, Deserialize)]
pub struct BgpNeighborRecord {
    pub remote_address: String,
    pub remote_as: String,
    pub peer_id: String,
    pub admin_status: String,
    pub state: String,
    pub description: String,
    pub received_prefixes: String,
    pub accepted_prefixes: String,
    pub sent_prefixes: String,
}
template_record!(BgpNeighborRecord => "show_ip_bgp_neighbors");

#[derive(Debug, Clone, Deserialize)]
pub struct VrfRecord {
    pub name: String,
    pub interfaces: String,
}
template_record!(VrfRecord => "show_ip_vrf");

#[derive(Debug, Clone, Deserialize)]
pub struct VlanRecord {
    /// Empty on continuation lines.
    pub vlan_id: String,
    pub name: String,
    pub ports: String,
}
template_record!(VlanRecord => "show_vlan");

// ── Configuration ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SnmpEngineRecord {
    pub engine_id: String,
}
template_record!(SnmpEngineRecord => "show_snmp_engineID");

#[derive(Debug, Clone, Deserialize)]
pub struct SnmpCommunityRecord {
    pub community: String,
    pub mode: String,
    pub acl: String,
}
template_record!(SnmpCommunityRecord => "show_running-config_snmp_community");

#[derive(Debug, Clone, Deserialize)]
pub struct SnmpSystemRecord {
    pub location: String,
    pub contact: String,
}
template_record!(SnmpSystemRecord => "show_running-config_snmp_system");

#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub level: String,
}
template_record!(UserRecord => "show_running-config_users");

#[derive(Debug, Clone, Deserialize)]
pub struct UserKeyRecord {
    pub username: String,
    pub key: String,
}
template_record!(UserKeyRecord => "show_running-config_user_keys");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn converts_matching_record() {
        let rec = record(&[
            ("interface", "Te1/0/1"),
            ("speed", "10000"),
            ("link_state", "Up"),
            ("duplex", "Full"),
        ]);
        let status = InterfaceStatusRecord::from_record(rec).unwrap();
        assert_eq!(status.interface, "Te1/0/1");
        assert_eq!(status.speed, "10000");
        assert_eq!(status.link_state, "Up");
    }

    #[test]
    fn transparent_counter_records() {
        let rec = record(&[
            ("interface", "Po1"),
            ("total", "1"),
            ("unicast", "2"),
            ("multicast", "3"),
            ("broadcast", "4"),
        ]);
        let rx = RxCountersRecord::from_record(rec).unwrap();
        assert_eq!(rx.0.interface, "Po1");
        assert_eq!(rx.0.broadcast, "4");
    }

    #[test]
    fn missing_field_names_the_template() {
        let rec = record(&[("interface", "Te1/0/1")]);
        match InterfaceStatusRecord::from_record(rec).unwrap_err() {
            CoreError::Record { template, message } => {
                assert_eq!(template, "show_interfaces_status");
                assert!(message.contains("speed"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
