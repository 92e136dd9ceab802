use serde::{Deserialize, Serialize};

/// A routing instance: the default table or a VRF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInstance {
    pub name: String,
    #[serde(rename = "type")]
    pub instance_type: InstanceType,
    pub route_distinguisher: String,
    /// Canonical names of member interfaces.
    pub interfaces: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum InstanceType {
    #[serde(rename = "DEFAULT_INSTANCE")]
    #[strum(serialize = "DEFAULT_INSTANCE")]
    Default,
    #[serde(rename = "L3VRF")]
    #[strum(serialize = "L3VRF")]
    L3Vrf,
}
