use dellos6_api::CommandChannel;
use indexmap::IndexMap;

use super::Driver;
use crate::error::CoreError;
use crate::merge::{EntityMap, KeyPolicy};
use crate::model::{ConfigSelector, DeviceConfig, SnmpCommunity, SnmpInformation, User};
use crate::normalize::text_or_unknown;
use crate::records::{
    SnmpCommunityRecord, SnmpEngineRecord, SnmpSystemRecord, SystemRecord, UserKeyRecord,
    UserRecord,
};

const DEFAULT_COMMUNITY_MODE: &str = "ro";

impl<C: CommandChannel + Send> Driver<C> {
    /// Stored configuration text.
    ///
    /// `full` includes default values in the running configuration;
    /// `sanitized` removes passwords, keys and SNMP secrets.
    pub async fn get_config(
        &mut self,
        retrieve: ConfigSelector,
        full: bool,
        sanitized: bool,
    ) -> Result<DeviceConfig, CoreError> {
        let mut config = DeviceConfig::default();

        if matches!(retrieve, ConfigSelector::All | ConfigSelector::Running) {
            let command = if full {
                "show running-config all"
            } else {
                "show running-config"
            };
            config.running = self.send_command(command).await?;
        }
        if matches!(retrieve, ConfigSelector::All | ConfigSelector::Startup) {
            config.startup = self.send_command("show startup-config").await?;
        }

        if sanitized {
            config.running = self.sanitize.apply(&config.running);
            config.startup = self.sanitize.apply(&config.startup);
        }
        Ok(config)
    }

    /// SNMP engine id, contact, location and communities. Contact and
    /// location set in the running configuration win over `show system`.
    pub async fn get_snmp_information(&mut self) -> Result<SnmpInformation, CoreError> {
        let system = self.fetch::<SystemRecord>("show system").await?.into_iter().next();
        let engine = self
            .fetch::<SnmpEngineRecord>("show snmp engineID")
            .await?
            .into_iter()
            .next();
        let running = self.send_command("show running-config").await?;
        let communities = self.parse::<SnmpCommunityRecord>(&running)?;
        let configured = self.parse::<SnmpSystemRecord>(&running)?.into_iter().next();

        let (mut contact, mut location) = system
            .map(|s| (s.contact, s.location))
            .unwrap_or_default();
        if let Some(c) = configured {
            if !c.contact.is_empty() {
                contact = c.contact;
            }
            if !c.location.is_empty() {
                location = c.location;
            }
        }

        let community = communities
            .into_iter()
            .map(|r| {
                let mode = if r.mode.is_empty() {
                    DEFAULT_COMMUNITY_MODE.to_owned()
                } else {
                    r.mode
                };
                (
                    r.community,
                    SnmpCommunity {
                        acl: text_or_unknown(&r.acl),
                        mode,
                    },
                )
            })
            .collect();

        Ok(SnmpInformation {
            chassis_id: text_or_unknown(&engine.map(|e| e.engine_id).unwrap_or_default()),
            contact,
            location,
            community,
        })
    }

    /// Local accounts with privilege level, password hash and SSH keys.
    pub async fn get_users(&mut self) -> Result<IndexMap<String, User>, CoreError> {
        let running = self.send_command("show running-config").await?;
        let accounts = self.parse::<UserRecord>(&running)?;
        let keys = self.parse::<UserKeyRecord>(&running)?;

        let mut users: EntityMap<User> = EntityMap::with_defaults();
        users.overlay(
            &accounts,
            KeyPolicy::Insert,
            |r| r.username.clone(),
            |u, r| {
                if let Ok(level) = r.level.parse() {
                    u.level = level;
                }
                u.password.clone_from(&r.password);
            },
        );
        users.overlay(
            &keys,
            KeyPolicy::ExistingOnly,
            |r| r.username.clone(),
            |u, r| {
                if !r.key.is_empty() {
                    u.sshkeys.push(r.key.clone());
                }
            },
        );
        Ok(users.into_inner())
    }
}
