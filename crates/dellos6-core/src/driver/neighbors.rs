use dellos6_api::CommandChannel;
use indexmap::IndexMap;
use tracing::warn;

use super::Driver;
use crate::error::CoreError;
use crate::model::{ArpEntry, Ipv6Neighbor, LldpNeighbor, LldpNeighborDetail, MacAddress, MacTableEntry};
use crate::normalize::{
    FLOAT_UNKNOWN, INT_UNKNOWN, decode_capabilities, parse_optional_float, parse_optional_int,
    try_parse_arp_age,
};
use crate::records::{
    ArpRecord, Ipv6NeighborRecord, LldpDetailRecord, LldpSummaryRecord, MacTableRecord,
};

/// Suffix OS6 puts on system names cut to the summary column width.
const TRUNCATED: &str = "...";

impl<C: CommandChannel + Send> Driver<C> {
    /// LLDP neighbors per local interface.
    ///
    /// Truncated system names are completed from the per-port detail view;
    /// neighbors without a system name are reported by chassis id.
    pub async fn get_lldp_neighbors(
        &mut self,
    ) -> Result<IndexMap<String, Vec<LldpNeighbor>>, CoreError> {
        let summary = self
            .fetch::<LldpSummaryRecord>("show lldp remote-device all")
            .await?;

        let mut neighbors: IndexMap<String, Vec<LldpNeighbor>> = IndexMap::new();
        for r in summary {
            let mut hostname = r.host_name;
            if hostname.ends_with(TRUNCATED) {
                if let Some(detail) = self.lldp_detail(&r.interface).await? {
                    if !detail.host_name.is_empty() {
                        hostname = detail.host_name;
                    }
                }
            }
            if hostname.is_empty() {
                hostname.clone_from(&r.chassis_id);
            }
            neighbors
                .entry(self.canonical(&r.interface))
                .or_default()
                .push(LldpNeighbor {
                    hostname,
                    port: r.port_id,
                });
        }
        Ok(neighbors)
    }

    /// Full LLDP information per local interface, optionally for a single
    /// interface (any spelling).
    pub async fn get_lldp_neighbors_detail(
        &mut self,
        interface: Option<&str>,
    ) -> Result<IndexMap<String, Vec<LldpNeighborDetail>>, CoreError> {
        let wanted = interface.map(|i| self.canonical(i));
        let summary = self
            .fetch::<LldpSummaryRecord>("show lldp remote-device all")
            .await?;

        let mut neighbors: IndexMap<String, Vec<LldpNeighborDetail>> = IndexMap::new();
        for r in summary {
            let local = self.canonical(&r.interface);
            if wanted.as_ref().is_some_and(|w| *w != local) {
                continue;
            }
            let Some(d) = self.lldp_detail(&r.interface).await? else {
                warn!(interface = %r.interface, "no LLDP detail for neighbor");
                continue;
            };
            neighbors.entry(local).or_default().push(LldpNeighborDetail {
                parent_interface: String::new(),
                remote_port: non_empty_or(d.port_id, r.port_id),
                remote_port_description: d.port_description,
                remote_chassis_id: non_empty_or(d.chassis_id, r.chassis_id),
                remote_system_name: d.host_name,
                remote_system_description: d.system_description,
                remote_system_capab: decode_capabilities(&d.capabilities_supported),
                remote_system_enable_capab: decode_capabilities(&d.capabilities_enabled),
            });
        }
        Ok(neighbors)
    }

    async fn lldp_detail(&mut self, interface: &str) -> Result<Option<LldpDetailRecord>, CoreError> {
        let command = format!("show lldp remote-device detail {interface}");
        Ok(self.fetch::<LldpDetailRecord>(&command).await?.into_iter().next())
    }

    /// IPv4 ARP cache of the default table or of `vrf`.
    pub async fn get_arp_table(&mut self, vrf: Option<&str>) -> Result<Vec<ArpEntry>, CoreError> {
        let command = match vrf {
            Some(name) => format!("show arp vrf {name}"),
            None => "show arp".to_owned(),
        };
        let records = self.fetch::<ArpRecord>(&command).await?;

        Ok(records
            .iter()
            .map(|r| ArpEntry {
                interface: self.canonical(&r.interface),
                mac: MacAddress::new(&r.mac_address),
                ip: r.ip_address.clone(),
                age: if r.entry_type.eq_ignore_ascii_case("static") {
                    FLOAT_UNKNOWN
                } else {
                    try_parse_arp_age(&r.age).map_or(FLOAT_UNKNOWN, seconds)
                },
            })
            .collect())
    }

    pub async fn get_ipv6_neighbors_table(&mut self) -> Result<Vec<Ipv6Neighbor>, CoreError> {
        let records = self
            .fetch::<Ipv6NeighborRecord>("show ipv6 neighbors")
            .await?;

        Ok(records
            .iter()
            .map(|r| Ipv6Neighbor {
                interface: self.canonical(&r.interface),
                mac: MacAddress::new(&r.mac_address),
                ip: r.ip_address.clone(),
                age: parse_optional_float(&r.age, FLOAT_UNKNOWN),
                state: r.state.clone(),
                is_router: r.is_router.eq_ignore_ascii_case("true"),
            })
            .collect())
    }

    pub async fn get_mac_address_table(&mut self) -> Result<Vec<MacTableEntry>, CoreError> {
        let records = self
            .fetch::<MacTableRecord>("show mac address-table")
            .await?;

        Ok(records
            .iter()
            .map(|r| MacTableEntry {
                mac: MacAddress::new(&r.mac_address),
                interface: self.canonical(&r.interface),
                vlan: parse_optional_int(&r.vlan),
                is_static: r.entry_type.eq_ignore_ascii_case("static"),
                active: true,
                moves: INT_UNKNOWN,
                last_move: FLOAT_UNKNOWN,
            })
            .collect())
    }
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() { fallback } else { value }
}

fn seconds(value: u64) -> f64 {
    f64::from(u32::try_from(value).unwrap_or(u32::MAX))
}
