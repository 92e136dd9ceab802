use dellos6_api::CommandChannel;
use indexmap::IndexMap;
use tracing::debug;

use super::Driver;
use crate::error::CoreError;
use crate::merge::{EntityMap, KeyPolicy, derive_state};
use crate::model::{BgpInstance, BgpPeer};
use crate::normalize::{INT_UNKNOWN, parse_optional_int, parse_uptime, text_or_unknown};
use crate::records::{BgpNeighborRecord, BgpSummaryPeerRecord, BgpSummaryRecord};

/// OS6 runs a single BGP instance.
const GLOBAL_INSTANCE: &str = "global";
const IPV4_UNICAST: &str = "ipv4";

impl<C: CommandChannel + Send> Driver<C> {
    /// BGP peers keyed by instance and peer address. Empty when BGP is
    /// not configured.
    pub async fn get_bgp_neighbors(&mut self) -> Result<IndexMap<String, BgpInstance>, CoreError> {
        let raw = self.send_command("show ip bgp summary").await?;
        let Some(global) = self.parse::<BgpSummaryRecord>(&raw)?.into_iter().next() else {
            debug!("no BGP router configured");
            return Ok(IndexMap::new());
        };
        let summary = self.parse::<BgpSummaryPeerRecord>(&raw)?;
        let details = self.fetch::<BgpNeighborRecord>("show ip bgp neighbors").await?;

        let local_as = parse_optional_int(&global.local_as);
        let mut peers: EntityMap<BgpPeer> = EntityMap::with_defaults();

        peers.overlay(
            &summary,
            KeyPolicy::Insert,
            |r| r.neighbor.clone(),
            |p, r| {
                p.local_as = local_as;
                p.remote_as = parse_optional_int(&r.remote_as);
                p.is_up = r.state.to_ascii_lowercase().contains("established");
                p.uptime = i64::try_from(parse_uptime(&r.up_down)).unwrap_or(i64::MAX);
                p.address_family
                    .entry(IPV4_UNICAST.to_owned())
                    .or_default()
                    .received_prefixes = parse_optional_int(&r.received_prefixes);
            },
        );
        peers.overlay(
            &details,
            KeyPolicy::Insert,
            |r| r.remote_address.clone(),
            |p, r| {
                p.local_as = local_as;
                let remote_as = parse_optional_int(&r.remote_as);
                if remote_as != INT_UNKNOWN {
                    p.remote_as = remote_as;
                }
                p.remote_id = text_or_unknown(&r.peer_id);
                p.is_enabled = derive_state(&r.admin_status, "stop", "start", p.is_enabled);
                if !r.state.is_empty() {
                    p.is_up = r.state.to_ascii_lowercase().contains("established");
                }
                p.description.clone_from(&r.description);

                let family = p.address_family.entry(IPV4_UNICAST.to_owned()).or_default();
                family.received_prefixes = parse_optional_int(&r.received_prefixes);
                family.accepted_prefixes = parse_optional_int(&r.accepted_prefixes);
                family.sent_prefixes = parse_optional_int(&r.sent_prefixes);
            },
        );

        let mut instances = IndexMap::new();
        instances.insert(
            GLOBAL_INSTANCE.to_owned(),
            BgpInstance {
                router_id: global.router_id,
                peers: peers.into_inner(),
            },
        );
        Ok(instances)
    }
}
