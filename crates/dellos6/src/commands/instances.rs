//! Routing instances and VLANs.

use tabled::Tabled;

use dellos6_core::{NetworkInstance, Vlan};

use crate::cli::{GlobalOpts, InstancesArgs};
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

#[derive(Tabled)]
struct InstanceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "RD")]
    route_distinguisher: String,
    #[tabled(rename = "Interfaces")]
    interfaces: String,
}

impl From<&NetworkInstance> for InstanceRow {
    fn from(i: &NetworkInstance) -> Self {
        Self {
            name: i.name.clone(),
            kind: i.instance_type.to_string(),
            route_distinguisher: i.route_distinguisher.clone(),
            interfaces: i.interfaces.join(", "),
        }
    }
}

pub async fn handle(
    driver: &mut SwitchDriver,
    args: InstancesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let instances = driver.get_network_instances(args.name.as_deref()).await?;
    let out = output::render_map(&global.output, &instances, |_, i| InstanceRow::from(i))?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "VLAN")]
    id: u16,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Ports")]
    ports: String,
}

pub async fn handle_vlans(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let vlans = driver.get_vlans().await?;
    let out = output::render_map(&global.output, &vlans, |id, v: &Vlan| VlanRow {
        id: *id,
        name: v.name.clone(),
        ports: v.interfaces.join(", "),
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
