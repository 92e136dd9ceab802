use std::net::Ipv4Addr;

use dellos6_api::CommandChannel;
use indexmap::IndexMap;

use super::Driver;
use crate::error::CoreError;
use crate::merge::{EntityMap, KeyPolicy, derive_state};
use crate::model::{
    Interface, InterfaceCounters, InterfaceIp, MacAddress, Optic, OpticChannel, OpticReading,
    PrefixLength,
};
use crate::normalize::{
    DBM_UNKNOWN, FLOAT_UNKNOWN, INT_UNKNOWN, parse_optional_float, parse_optional_int,
};
use crate::records::{
    CounterErrorsRecord, InterfaceConfigRecord, InterfaceDescriptionRecord, InterfaceDetailRecord,
    InterfaceStatusRecord, IpInterfaceRecord, Ipv6InterfaceRecord, OpticsRecord, RxCountersRecord,
    StackPortRecord, TxCountersRecord,
};

/// Stack port speeds are reported in Gbit/s.
const MBIT_PER_GBIT: i64 = 1000;

impl<C: CommandChannel + Send> Driver<C> {
    /// Link, admin and configuration state per interface.
    ///
    /// Front-panel ports, routed interfaces and stack ports create entries;
    /// configuration, description and hardware details only refine
    /// interfaces already known.
    pub async fn get_interfaces(&mut self) -> Result<IndexMap<String, Interface>, CoreError> {
        let status = self
            .fetch::<InterfaceStatusRecord>("show interfaces status")
            .await?;
        let routed = self.fetch::<IpInterfaceRecord>("show ip interface").await?;
        let stack = self.fetch::<StackPortRecord>("show switch stack-ports").await?;
        let config = self
            .fetch::<InterfaceConfigRecord>("show interfaces configuration")
            .await?;
        let descriptions = self
            .fetch::<InterfaceDescriptionRecord>("show interfaces description")
            .await?;
        let details = self.fetch::<InterfaceDetailRecord>("show interfaces").await?;

        let names = &self.names;
        let mut interfaces: EntityMap<Interface> = EntityMap::with_defaults();

        interfaces.overlay(
            &status,
            KeyPolicy::Insert,
            |r| names.canonicalize(&r.interface),
            |i, r| {
                i.is_up = derive_state(&r.link_state, "down", "up", i.is_up);
                set_if_known(&mut i.speed, parse_optional_int(&r.speed));
            },
        );
        interfaces.overlay(
            &routed,
            KeyPolicy::Insert,
            |r| names.canonicalize(&r.interface),
            |i, r| {
                i.is_up = derive_state(&r.link_state, "down", "up", i.is_up);
                i.is_enabled = true;
            },
        );
        interfaces.overlay(
            &stack,
            KeyPolicy::Insert,
            |r| names.canonicalize(&r.interface),
            |i, r| {
                i.is_up = derive_state(&r.link_state, "link down", "link up", i.is_up);
                i.speed = match parse_optional_int(&r.speed) {
                    INT_UNKNOWN => INT_UNKNOWN,
                    gbit => gbit.saturating_mul(MBIT_PER_GBIT),
                };
            },
        );
        interfaces.overlay(
            &config,
            KeyPolicy::ExistingOnly,
            |r| names.canonicalize(&r.interface),
            |i, r| {
                i.is_enabled = derive_state(&r.admin_state, "down", "up", i.is_enabled);
                i.mtu = parse_optional_int(&r.mtu);
                set_if_known(&mut i.speed, parse_optional_int(&r.speed));
            },
        );
        interfaces.overlay(
            &descriptions,
            KeyPolicy::ExistingOnly,
            |r| names.canonicalize(&r.interface),
            |i, r| i.description.clone_from(&r.desc),
        );
        interfaces.overlay(
            &details,
            KeyPolicy::ExistingOnly,
            |r| names.canonicalize(&r.interface),
            |i, r| i.mac_address = MacAddress::new(&r.mac_address),
        );

        Ok(interfaces.into_inner())
    }

    /// Packet and error counters per interface. OS6 reports no octet
    /// counters or receive discards; those stay `-1`.
    pub async fn get_interfaces_counters(
        &mut self,
    ) -> Result<IndexMap<String, InterfaceCounters>, CoreError> {
        let raw = self.send_command("show interfaces counters").await?;
        let rx = self.parse::<RxCountersRecord>(&raw)?;
        let tx = self.parse::<TxCountersRecord>(&raw)?;
        let errors = self
            .fetch::<CounterErrorsRecord>("show interfaces counters errors")
            .await?;

        let names = &self.names;
        let mut counters: EntityMap<InterfaceCounters> = EntityMap::with_defaults();

        counters.overlay(
            &rx,
            KeyPolicy::Insert,
            |r| names.canonicalize(&r.0.interface),
            |c, r| {
                c.rx_unicast_packets = parse_optional_int(&r.0.unicast);
                c.rx_multicast_packets = parse_optional_int(&r.0.multicast);
                c.rx_broadcast_packets = parse_optional_int(&r.0.broadcast);
            },
        );
        counters.overlay(
            &tx,
            KeyPolicy::Insert,
            |r| names.canonicalize(&r.0.interface),
            |c, r| {
                c.tx_unicast_packets = parse_optional_int(&r.0.unicast);
                c.tx_multicast_packets = parse_optional_int(&r.0.multicast);
                c.tx_broadcast_packets = parse_optional_int(&r.0.broadcast);
            },
        );
        counters.overlay(
            &errors,
            KeyPolicy::Insert,
            |r| names.canonicalize(&r.interface),
            |c, r| {
                c.rx_errors = parse_optional_int(&r.rx_errors);
                c.tx_errors = parse_optional_int(&r.tx_errors);
                c.tx_discards = parse_optional_int(&r.tx_discards);
            },
        );

        Ok(counters.into_inner())
    }

    /// IPv4 and IPv6 addresses per routed interface.
    pub async fn get_interfaces_ip(&mut self) -> Result<IndexMap<String, InterfaceIp>, CoreError> {
        let v4 = self.fetch::<IpInterfaceRecord>("show ip interface").await?;
        let v6 = self
            .fetch::<Ipv6InterfaceRecord>("show ipv6 interface brief")
            .await?;

        let names = &self.names;
        let mut addresses: EntityMap<InterfaceIp> = EntityMap::with_defaults();

        addresses.overlay(
            &v4,
            KeyPolicy::Insert,
            |r| names.canonicalize(&r.interface),
            |a, r| {
                a.ipv4.insert(
                    r.ip_address.clone(),
                    PrefixLength {
                        prefix_length: mask_to_prefix(&r.ip_mask),
                    },
                );
            },
        );
        addresses.overlay(
            &v6,
            KeyPolicy::Insert,
            |r| names.canonicalize(&r.interface),
            |a, r| {
                a.ipv6.insert(
                    r.ipv6_address.clone(),
                    PrefixLength {
                        prefix_length: parse_optional_int(&r.prefix_length),
                    },
                );
            },
        );

        Ok(addresses.into_inner())
    }

    /// Transceiver diagnostics per optical port, one channel each.
    pub async fn get_optics(&mut self) -> Result<IndexMap<String, Optic>, CoreError> {
        let records = self
            .fetch::<OpticsRecord>("show fiber-ports optical-transceiver")
            .await?;

        Ok(records
            .iter()
            .map(|r| {
                let channel = OpticChannel {
                    index: 0,
                    input_power: OpticReading::instant(
                        parse_optional_float(&r.input_power, DBM_UNKNOWN),
                        DBM_UNKNOWN,
                    ),
                    output_power: OpticReading::instant(
                        parse_optional_float(&r.output_power, DBM_UNKNOWN),
                        DBM_UNKNOWN,
                    ),
                    laser_bias_current: OpticReading::instant(
                        parse_optional_float(&r.current, FLOAT_UNKNOWN),
                        FLOAT_UNKNOWN,
                    ),
                };
                (
                    self.canonical(&r.interface),
                    Optic {
                        physical_channels: vec![channel],
                    },
                )
            })
            .collect())
    }
}

fn set_if_known(field: &mut i64, value: i64) {
    if value != INT_UNKNOWN {
        *field = value;
    }
}

/// Dotted IPv4 mask → prefix length, `-1` when unreadable.
fn mask_to_prefix(mask: &str) -> i64 {
    mask.trim()
        .parse::<Ipv4Addr>()
        .map_or(INT_UNKNOWN, |m| i64::from(u32::from(m).count_ones()))
}
