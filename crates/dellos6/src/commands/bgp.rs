//! BGP peers.

use indexmap::IndexMap;
use tabled::Tabled;

use dellos6_core::{AddressFamily, BgpInstance};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

#[derive(Tabled)]
struct PeerRow {
    #[tabled(rename = "Instance")]
    instance: String,
    #[tabled(rename = "Peer")]
    peer: String,
    #[tabled(rename = "Remote AS")]
    remote_as: String,
    #[tabled(rename = "Remote ID")]
    remote_id: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Admin")]
    admin: String,
    #[tabled(rename = "Uptime (s)")]
    uptime: String,
    #[tabled(rename = "Rcvd/Acc/Sent")]
    prefixes: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn prefixes(families: &IndexMap<String, AddressFamily>) -> String {
    families
        .values()
        .map(|af| {
            format!(
                "{}/{}/{}",
                output::num(af.received_prefixes),
                output::num(af.accepted_prefixes),
                output::num(af.sent_prefixes)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn peer_rows(instances: &IndexMap<String, BgpInstance>, color: bool) -> Vec<PeerRow> {
    let mut rows = Vec::new();
    for (name, instance) in instances {
        for (address, peer) in &instance.peers {
            rows.push(PeerRow {
                instance: name.clone(),
                peer: address.clone(),
                remote_as: output::num(peer.remote_as),
                remote_id: peer.remote_id.clone(),
                state: output::flag(peer.is_up, "up", "down", color),
                admin: output::flag(peer.is_enabled, "enabled", "disabled", color),
                uptime: output::num(peer.uptime),
                prefixes: prefixes(&peer.address_family),
                description: peer.description.clone(),
            });
        }
    }
    rows
}

fn plain(instances: &IndexMap<String, BgpInstance>) -> String {
    instances
        .values()
        .flat_map(|i| i.peers.keys().cloned())
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn handle(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let instances = driver.get_bgp_neighbors().await?;
    if instances.is_empty() && !global.quiet {
        eprintln!("BGP is not configured");
    }
    let color = output::should_color(&global.color);
    let out = output::render_rows(&global.output, &instances, |i| peer_rows(i, color), plain)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
