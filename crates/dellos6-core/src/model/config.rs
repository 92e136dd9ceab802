use serde::{Deserialize, Serialize};

/// Which stored configuration to retrieve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConfigSelector {
    #[default]
    All,
    Running,
    Startup,
    Candidate,
}

/// Device configuration text. Sections not requested are empty; OS6 has
/// no candidate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub running: String,
    pub startup: String,
    pub candidate: String,
}
