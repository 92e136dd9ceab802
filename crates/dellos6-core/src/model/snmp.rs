use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnmpInformation {
    /// Local SNMP engine id.
    pub chassis_id: String,
    pub contact: String,
    pub location: String,
    pub community: IndexMap<String, SnmpCommunity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnmpCommunity {
    /// Source address restriction, `N/A` when unrestricted.
    pub acl: String,
    /// `ro` or `rw`.
    pub mode: String,
}
