//! Interface state, counters, addresses and optics.

use indexmap::IndexMap;
use tabled::Tabled;

use dellos6_core::normalize::numeric::DBM_UNKNOWN;
use dellos6_core::{Interface, InterfaceCounters, InterfaceIp, Optic};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Interface")]
    name: String,
    #[tabled(rename = "Link")]
    link: String,
    #[tabled(rename = "Admin")]
    admin: String,
    #[tabled(rename = "Speed")]
    speed: String,
    #[tabled(rename = "MTU")]
    mtu: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl InterfaceRow {
    fn new(name: &str, i: &Interface, color: bool) -> Self {
        Self {
            name: name.to_owned(),
            link: output::flag(i.is_up, "up", "down", color),
            admin: output::flag(i.is_enabled, "enabled", "disabled", color),
            speed: output::num(i.speed),
            mtu: output::num(i.mtu),
            mac: i.mac_address.to_string(),
            description: i.description.clone(),
        }
    }
}

#[derive(Tabled)]
struct CountersRow {
    #[tabled(rename = "Interface")]
    name: String,
    #[tabled(rename = "RX ucast")]
    rx_unicast: String,
    #[tabled(rename = "RX mcast")]
    rx_multicast: String,
    #[tabled(rename = "RX bcast")]
    rx_broadcast: String,
    #[tabled(rename = "TX ucast")]
    tx_unicast: String,
    #[tabled(rename = "TX mcast")]
    tx_multicast: String,
    #[tabled(rename = "TX bcast")]
    tx_broadcast: String,
    #[tabled(rename = "RX err")]
    rx_errors: String,
    #[tabled(rename = "TX err")]
    tx_errors: String,
    #[tabled(rename = "RX drop")]
    rx_discards: String,
    #[tabled(rename = "TX drop")]
    tx_discards: String,
}

impl CountersRow {
    fn new(name: &str, c: &InterfaceCounters) -> Self {
        Self {
            name: name.to_owned(),
            rx_unicast: output::num(c.rx_unicast_packets),
            rx_multicast: output::num(c.rx_multicast_packets),
            rx_broadcast: output::num(c.rx_broadcast_packets),
            tx_unicast: output::num(c.tx_unicast_packets),
            tx_multicast: output::num(c.tx_multicast_packets),
            tx_broadcast: output::num(c.tx_broadcast_packets),
            rx_errors: output::num(c.rx_errors),
            tx_errors: output::num(c.tx_errors),
            rx_discards: output::num(c.rx_discards),
            tx_discards: output::num(c.tx_discards),
        }
    }
}

#[derive(Tabled)]
struct AddressRow {
    #[tabled(rename = "Interface")]
    name: String,
    #[tabled(rename = "Family")]
    family: &'static str,
    #[tabled(rename = "Address")]
    address: String,
}

fn address_rows(ips: &IndexMap<String, InterfaceIp>) -> Vec<AddressRow> {
    let mut rows = Vec::new();
    for (name, ip) in ips {
        for (family, table) in [("ipv4", &ip.ipv4), ("ipv6", &ip.ipv6)] {
            for (address, prefix) in table {
                rows.push(AddressRow {
                    name: name.clone(),
                    family,
                    address: format!("{address}/{}", output::num(prefix.prefix_length)),
                });
            }
        }
    }
    rows
}

#[derive(Tabled)]
struct OpticRow {
    #[tabled(rename = "Interface")]
    name: String,
    #[tabled(rename = "RX (dBm)")]
    input: String,
    #[tabled(rename = "TX (dBm)")]
    output: String,
    #[tabled(rename = "Bias (mA)")]
    bias: String,
}

fn dbm(value: f64) -> String {
    if value.to_bits() == DBM_UNKNOWN.to_bits() {
        "-".into()
    } else {
        format!("{value:.2}")
    }
}

impl OpticRow {
    fn new(name: &str, optic: &Optic) -> Self {
        let channel = optic.physical_channels.first();
        Self {
            name: name.to_owned(),
            input: channel.map_or_else(|| "-".into(), |c| dbm(c.input_power.instant)),
            output: channel.map_or_else(|| "-".into(), |c| dbm(c.output_power.instant)),
            bias: channel.map_or_else(
                || "-".into(),
                |c| output::float(c.laser_bias_current.instant, 1),
            ),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let interfaces = driver.get_interfaces().await?;
    let color = output::should_color(&global.color);
    let out = output::render_map(&global.output, &interfaces, |name, i| {
        InterfaceRow::new(name, i, color)
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_counters(
    driver: &mut SwitchDriver,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let counters = driver.get_interfaces_counters().await?;
    let out = output::render_map(&global.output, &counters, |name, c| {
        CountersRow::new(name, c)
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_ip(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let ips = driver.get_interfaces_ip().await?;
    let out = output::render_rows(&global.output, &ips, address_rows, |ips| {
        address_rows(ips)
            .into_iter()
            .map(|r| r.address)
            .collect::<Vec<_>>()
            .join("\n")
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_optics(
    driver: &mut SwitchDriver,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let optics = driver.get_optics().await?;
    let out = output::render_map(&global.output, &optics, |name, o| OpticRow::new(name, o))?;
    output::print_output(&out, global.quiet);
    Ok(())
}
