use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::normalize::INT_UNKNOWN;

/// Sensors, fans, power supplies, CPU and memory.
///
/// Sensor, fan and supply maps are keyed `<unit>/<description>`
/// (e.g. `1/PS-1`) so stacked units never collide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub fans: IndexMap<String, Fan>,
    pub temperature: IndexMap<String, Temperature>,
    pub power: IndexMap<String, PowerSupply>,
    /// Keyed by CPU index; OS6 reports one aggregate (`"0"`).
    pub cpu: IndexMap<String, Cpu>,
    pub memory: Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fan {
    pub status: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    /// Celsius, `-1.0` when the sensor is absent.
    pub temperature: f64,
    pub is_alert: bool,
    pub is_critical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerSupply {
    pub status: bool,
    /// Watts; OS6 does not report rated capacity (`-1.0`).
    pub capacity: f64,
    /// Current draw in watts.
    pub output: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    /// Percent busy over the last five seconds.
    #[serde(rename = "%usage")]
    pub usage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub available_ram: i64,
    pub used_ram: i64,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            available_ram: INT_UNKNOWN,
            used_ram: INT_UNKNOWN,
        }
    }
}
