//! Command dispatch: bridges CLI args -> driver operations -> output formatting.

pub mod bgp;
pub mod device_config;
pub mod environment;
pub mod facts;
pub mod instances;
pub mod interfaces;
pub mod neighbors;
pub mod ping;
pub mod profile;
pub mod snmp;
pub mod users;

use dellos6_core::Driver;

use crate::channel::SwitchChannel;
use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

pub type SwitchDriver = Driver<SwitchChannel>;

/// Dispatch a device-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    driver: &mut SwitchDriver,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Facts => facts::handle(driver, global).await,
        Command::Interfaces => interfaces::handle(driver, global).await,
        Command::Counters => interfaces::handle_counters(driver, global).await,
        Command::Ip => interfaces::handle_ip(driver, global).await,
        Command::Optics => interfaces::handle_optics(driver, global).await,
        Command::Environment => environment::handle(driver, global).await,
        Command::Lldp(args) => neighbors::handle_lldp(driver, args, global).await,
        Command::Arp(args) => neighbors::handle_arp(driver, args, global).await,
        Command::Ipv6Neighbors => neighbors::handle_ipv6(driver, global).await,
        Command::MacTable => neighbors::handle_mac_table(driver, global).await,
        Command::Bgp => bgp::handle(driver, global).await,
        Command::Snmp => snmp::handle(driver, global).await,
        Command::Users => users::handle(driver, global).await,
        Command::Instances(args) => instances::handle(driver, args, global).await,
        Command::Vlans => instances::handle_vlans(driver, global).await,
        Command::Config(args) => device_config::handle(driver, args, global).await,
        Command::Ping(args) => ping::handle(driver, args, global).await,
        // Profile and Completions are handled before dispatch
        Command::Profile(_) | Command::Completions(_) => unreachable!(),
    }
}
