// ── Normalization primitives ──
//
// Pure, stateless transforms applied to every extracted field before it is
// merged: names, durations, sentinel numerics, port ranges, capabilities.

pub mod capability;
pub mod duration;
pub mod names;
pub mod numeric;
pub mod ports;

pub use capability::{CapabilityTag, decode_capabilities};
pub use duration::{parse_arp_age, parse_uptime, try_parse_arp_age};
pub use names::{AliasTable, NameCanonicalizer};
pub use numeric::{
    DBM_UNKNOWN, FLOAT_UNKNOWN, INT_UNKNOWN, TEXT_UNKNOWN, is_dbm_unknown, is_float_unknown,
    parse_optional_float, parse_optional_int, text_or_unknown,
};
pub use ports::{expand_ranges, split_compound_ports};
