use std::collections::HashSet;

use dellos6_api::CommandChannel;
use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use super::Driver;
use crate::error::CoreError;
use crate::model::{InstanceType, NetworkInstance, Vlan};
use crate::normalize::{expand_ranges, split_compound_ports};
use crate::records::{InterfaceStatusRecord, IpInterfaceRecord, VlanRecord, VrfRecord};

const DEFAULT_INSTANCE: &str = "default";

impl<C: CommandChannel + Send> Driver<C> {
    /// Routing instances: `default` plus one per VRF. Interfaces not bound
    /// to a VRF belong to `default`.
    pub async fn get_network_instances(
        &mut self,
        name: Option<&str>,
    ) -> Result<IndexMap<String, NetworkInstance>, CoreError> {
        let vrfs = self.fetch::<VrfRecord>("show ip vrf").await?;
        let status = self
            .fetch::<InterfaceStatusRecord>("show interfaces status")
            .await?;
        let routed = self.fetch::<IpInterfaceRecord>("show ip interface").await?;

        let vrf_instances: Vec<NetworkInstance> = vrfs
            .iter()
            .map(|r| NetworkInstance {
                name: r.name.clone(),
                instance_type: InstanceType::L3Vrf,
                route_distinguisher: String::new(),
                interfaces: self.port_list(&r.interfaces),
            })
            .collect();
        let bound: HashSet<&str> = vrf_instances
            .iter()
            .flat_map(|vrf| vrf.interfaces.iter().map(String::as_str))
            .collect();

        let all: IndexSet<String> = status
            .iter()
            .map(|r| r.interface.as_str())
            .chain(routed.iter().map(|r| r.interface.as_str()))
            .map(|i| self.canonical(i))
            .collect();
        let default = NetworkInstance {
            name: DEFAULT_INSTANCE.to_owned(),
            instance_type: InstanceType::Default,
            route_distinguisher: String::new(),
            interfaces: all
                .into_iter()
                .filter(|i| !bound.contains(i.as_str()))
                .collect(),
        };

        let mut instances: IndexMap<String, NetworkInstance> = std::iter::once(default)
            .chain(vrf_instances.iter().cloned())
            .map(|i| (i.name.clone(), i))
            .collect();
        if let Some(wanted) = name {
            instances.retain(|k, _| k == wanted);
        }
        Ok(instances)
    }

    /// VLANs by id with their canonical member ports.
    pub async fn get_vlans(&mut self) -> Result<IndexMap<u16, Vlan>, CoreError> {
        let records = self.fetch::<VlanRecord>("show vlan").await?;

        let mut vlans: IndexMap<u16, Vlan> = IndexMap::new();
        let mut current: Option<u16> = None;
        for r in &records {
            if r.vlan_id.is_empty() {
                // Port list wrapped onto the next line.
                match current.and_then(|id| vlans.get_mut(&id)) {
                    Some(vlan) => vlan.interfaces.extend(self.port_list(&r.ports)),
                    None => warn!(ports = %r.ports, "port continuation without a VLAN"),
                }
                continue;
            }
            let Ok(id) = r.vlan_id.parse::<u16>() else {
                warn!(vlan = %r.vlan_id, "unreadable VLAN id");
                current = None;
                continue;
            };
            current = Some(id);
            vlans.insert(
                id,
                Vlan {
                    name: r.name.clone(),
                    interfaces: self.port_list(&r.ports),
                },
            );
        }
        Ok(vlans)
    }

    /// Compact port list (`Po1-2,Te1/0/1`) → canonical port names.
    fn port_list(&self, compact: &str) -> Vec<String> {
        expand_ranges(&split_compound_ports(&[compact]))
            .iter()
            .map(|p| self.canonical(p))
            .collect()
    }
}
