use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vlan {
    pub name: String,
    /// Canonical member port names.
    pub interfaces: Vec<String>,
}
