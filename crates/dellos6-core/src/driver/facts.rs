use dellos6_api::CommandChannel;
use indexmap::IndexSet;

use super::{Driver, require_one};
use crate::error::CoreError;
use crate::model::Facts;
use crate::normalize::{TEXT_UNKNOWN, parse_uptime};
use crate::records::{
    HostsRecord, InterfaceStatusRecord, IpInterfaceRecord, SwitchRecord, SystemRecord,
    VersionRecord,
};

const VENDOR: &str = "Dell";

/// Domain values that mean "no domain configured".
const NO_DOMAIN: &[&str] = &["", "unknown", "not configured"];

impl<C: CommandChannel + Send> Driver<C> {
    /// Device identity, uptime and the list of known interfaces.
    pub async fn get_facts(&mut self) -> Result<Facts, CoreError> {
        let version = require_one(self.fetch::<VersionRecord>("show version").await?, "version")?;
        let switch = require_one(self.fetch::<SwitchRecord>("show switch").await?, "stack unit")?;
        let system = require_one(self.fetch::<SystemRecord>("show system").await?, "system")?;
        let hosts = self.fetch::<HostsRecord>("show hosts").await?.into_iter().next();
        let status = self
            .fetch::<InterfaceStatusRecord>("show interfaces status")
            .await?;
        let routed = self.fetch::<IpInterfaceRecord>("show ip interface").await?;

        let interface_list: IndexSet<String> = status
            .iter()
            .map(|r| r.interface.as_str())
            .chain(routed.iter().map(|r| r.interface.as_str()))
            .map(|name| self.canonical(name))
            .collect();

        let hostname = system.sys_name;
        let fqdn = match hosts {
            Some(h) if !NO_DOMAIN.contains(&h.domain.to_ascii_lowercase().as_str()) => {
                format!("{hostname}.{}", h.domain)
            }
            _ => TEXT_UNKNOWN.to_owned(),
        };

        Ok(Facts {
            uptime: parse_uptime(&system.uptime),
            vendor: VENDOR.to_owned(),
            model: version.model,
            hostname,
            fqdn,
            os_version: switch.version,
            serial_number: version.serial_num,
            interface_list: interface_list.into_iter().collect(),
        })
    }
}
