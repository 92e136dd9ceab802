//! LLDP, ARP, IPv6 neighbor and MAC address tables.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tabled::Tabled;

use dellos6_core::normalize::CapabilityTag;
use dellos6_core::{ArpEntry, Ipv6Neighbor, LldpNeighbor, LldpNeighborDetail, MacTableEntry};

use crate::cli::{ArpArgs, GlobalOpts, LldpArgs};
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

// ── LLDP ────────────────────────────────────────────────────────────

#[derive(Tabled)]
struct LldpRow {
    #[tabled(rename = "Local")]
    local: String,
    #[tabled(rename = "Neighbor")]
    hostname: String,
    #[tabled(rename = "Port")]
    port: String,
}

fn lldp_rows(neighbors: &IndexMap<String, Vec<LldpNeighbor>>) -> Vec<LldpRow> {
    neighbors
        .iter()
        .flat_map(|(local, list)| {
            list.iter().map(move |n| LldpRow {
                local: local.clone(),
                hostname: n.hostname.clone(),
                port: n.port.clone(),
            })
        })
        .collect()
}

#[derive(Tabled)]
struct LldpDetailRow {
    #[tabled(rename = "Local")]
    local: String,
    #[tabled(rename = "System")]
    system: String,
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "Port description")]
    port_description: String,
    #[tabled(rename = "Chassis")]
    chassis: String,
    #[tabled(rename = "Capabilities")]
    capabilities: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
}

fn tags(set: &BTreeSet<CapabilityTag>) -> String {
    set.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn lldp_detail_rows(neighbors: &IndexMap<String, Vec<LldpNeighborDetail>>) -> Vec<LldpDetailRow> {
    neighbors
        .iter()
        .flat_map(|(local, list)| {
            list.iter().map(move |n| LldpDetailRow {
                local: local.clone(),
                system: n.remote_system_name.clone(),
                port: n.remote_port.clone(),
                port_description: n.remote_port_description.clone(),
                chassis: n.remote_chassis_id.clone(),
                capabilities: tags(&n.remote_system_capab),
                enabled: tags(&n.remote_system_enable_capab),
            })
        })
        .collect()
}

pub async fn handle_lldp(
    driver: &mut SwitchDriver,
    args: LldpArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = if args.detail || args.interface.is_some() {
        let neighbors = driver
            .get_lldp_neighbors_detail(args.interface.as_deref())
            .await?;
        output::render_rows(
            &global.output,
            &neighbors,
            lldp_detail_rows,
            output::plain_keys,
        )?
    } else {
        let neighbors = driver.get_lldp_neighbors().await?;
        output::render_rows(&global.output, &neighbors, lldp_rows, output::plain_keys)?
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── ARP / IPv6 neighbors ────────────────────────────────────────────

#[derive(Tabled)]
struct ArpRow {
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Age (s)")]
    age: String,
}

impl From<&ArpEntry> for ArpRow {
    fn from(e: &ArpEntry) -> Self {
        Self {
            interface: e.interface.clone(),
            ip: e.ip.clone(),
            mac: e.mac.to_string(),
            age: output::float(e.age, 0),
        }
    }
}

pub async fn handle_arp(
    driver: &mut SwitchDriver,
    args: ArpArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let entries = driver.get_arp_table(args.vrf.as_deref()).await?;
    let out = output::render_list(
        &global.output,
        &entries,
        |e| ArpRow::from(e),
        |e| e.ip.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[derive(Tabled)]
struct Ipv6NeighborRow {
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Age (s)")]
    age: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Router")]
    router: String,
}

impl From<&Ipv6Neighbor> for Ipv6NeighborRow {
    fn from(n: &Ipv6Neighbor) -> Self {
        Self {
            interface: n.interface.clone(),
            ip: n.ip.clone(),
            mac: n.mac.to_string(),
            age: output::float(n.age, 0),
            state: n.state.clone(),
            router: if n.is_router { "yes" } else { "no" }.into(),
        }
    }
}

pub async fn handle_ipv6(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let neighbors = driver.get_ipv6_neighbors_table().await?;
    let out = output::render_list(
        &global.output,
        &neighbors,
        |n| Ipv6NeighborRow::from(n),
        |n| n.ip.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── MAC address table ───────────────────────────────────────────────

#[derive(Tabled)]
struct MacRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "VLAN")]
    vlan: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
}

impl From<&MacTableEntry> for MacRow {
    fn from(e: &MacTableEntry) -> Self {
        Self {
            mac: e.mac.to_string(),
            interface: e.interface.clone(),
            vlan: output::num(e.vlan),
            kind: if e.is_static { "static" } else { "dynamic" },
        }
    }
}

pub async fn handle_mac_table(
    driver: &mut SwitchDriver,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let entries = driver.get_mac_address_table().await?;
    let out = output::render_list(
        &global.output,
        &entries,
        |e| MacRow::from(e),
        |e| e.mac.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
