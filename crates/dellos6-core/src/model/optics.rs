use serde::{Deserialize, Serialize};

/// Transceiver diagnostics of one port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optic {
    pub physical_channels: Vec<OpticChannel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticChannel {
    pub index: u32,
    /// dBm; `-0.0` when not reported.
    pub input_power: OpticReading,
    /// dBm; `-0.0` when not reported.
    pub output_power: OpticReading,
    /// mA; `-1.0` when not reported.
    pub laser_bias_current: OpticReading,
}

/// OS6 reports instantaneous values only; the aggregates carry the same
/// sentinel as a missing instant reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticReading {
    pub instant: f64,
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

impl OpticReading {
    pub fn instant(value: f64, sentinel: f64) -> Self {
        Self {
            instant: value,
            avg: sentinel,
            min: sentinel,
            max: sentinel,
        }
    }
}
