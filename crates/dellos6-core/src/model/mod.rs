// ── Domain model ──
//
// Typed facts returned by the driver, one module per fact domain. Maps are
// keyed by canonical identity (interface name, peer address, VLAN id).

pub mod bgp;
pub mod config;
pub mod environment;
pub mod facts;
pub mod instances;
pub mod interface;
pub mod mac;
pub mod neighbors;
pub mod optics;
pub mod snmp;
pub mod users;
pub mod vlan;

pub use bgp::{AddressFamily, BgpInstance, BgpPeer};
pub use config::{ConfigSelector, DeviceConfig};
pub use environment::{Cpu, Environment, Fan, Memory, PowerSupply, Temperature};
pub use facts::Facts;
pub use instances::{InstanceType, NetworkInstance};
pub use interface::{DEFAULT_MTU, Interface, InterfaceCounters, InterfaceIp, PrefixLength};
pub use mac::MacAddress;
pub use neighbors::{ArpEntry, Ipv6Neighbor, LldpNeighbor, LldpNeighborDetail, MacTableEntry};
pub use optics::{Optic, OpticChannel, OpticReading};
pub use snmp::{SnmpCommunity, SnmpInformation};
pub use users::User;
pub use vlan::Vlan;
