// dellos6-core: Facts normalization engine between dellos6-api and consumers.

pub mod driver;
pub mod error;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod ping;
pub mod records;
pub mod sanitize;

// ── Primary re-exports ──────────────────────────────────────────────
pub use driver::{DEFAULT_ERROR_MARKERS, Driver, DriverConfig};
pub use error::CoreError;
pub use merge::{EntityMap, KeyPolicy, derive_state};
pub use normalize::{AliasTable, NameCanonicalizer};
pub use ping::{PingOutcome, PingRequest, PingSuccess, ProbeResult};
pub use sanitize::SanitizeFilters;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Identity and interfaces
    Facts, Interface, InterfaceCounters, InterfaceIp, MacAddress, PrefixLength,
    // Environment
    Cpu, Environment, Fan, Memory, PowerSupply, Temperature,
    // Neighbor tables
    ArpEntry, Ipv6Neighbor, LldpNeighbor, LldpNeighborDetail, MacTableEntry,
    // Routing and switching
    AddressFamily, BgpInstance, BgpPeer, InstanceType, NetworkInstance, Vlan,
    // Configuration
    ConfigSelector, DeviceConfig, Optic, OpticChannel, OpticReading, SnmpCommunity,
    SnmpInformation, User,
};
