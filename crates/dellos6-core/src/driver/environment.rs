use dellos6_api::CommandChannel;

use super::Driver;
use crate::error::CoreError;
use crate::model::{Cpu, Environment, Fan, Memory, PowerSupply, Temperature};
use crate::normalize::{FLOAT_UNKNOWN, parse_optional_float, parse_optional_int};
use crate::records::{CpuRecord, FanRecord, MemoryRecord, PowerRecord, TemperatureRecord};

impl<C: CommandChannel + Send> Driver<C> {
    /// Sensors, fans and power supplies of every stack unit, plus CPU and
    /// memory utilization.
    pub async fn get_environment(&mut self) -> Result<Environment, CoreError> {
        let system = self.send_command("show system").await?;
        let temperatures = self.parse::<TemperatureRecord>(&system)?;
        let fans = self.parse::<FanRecord>(&system)?;
        let supplies = self.parse::<PowerRecord>(&system)?;
        let memory = self.fetch::<MemoryRecord>("show memory cpu").await?;
        let cpu = self.fetch::<CpuRecord>("show process cpu").await?;

        let mut env = Environment::default();

        for r in temperatures {
            let status = r.status.to_ascii_lowercase();
            let is_critical = status.contains("crit") || status.contains("shutdown");
            env.temperature.insert(
                unit_key(&r.unit, &r.sensor),
                Temperature {
                    temperature: parse_optional_float(&r.temperature, FLOAT_UNKNOWN),
                    is_alert: is_critical || status.contains("warn"),
                    is_critical,
                },
            );
        }

        for r in fans {
            env.fans.insert(
                unit_key(&r.unit, &r.fan),
                Fan {
                    status: r.status.eq_ignore_ascii_case("ok"),
                },
            );
        }

        for r in supplies {
            env.power.insert(
                unit_key(&r.unit, &r.supply),
                PowerSupply {
                    status: r.status.eq_ignore_ascii_case("ok"),
                    capacity: FLOAT_UNKNOWN,
                    output: parse_optional_float(&r.current_power, FLOAT_UNKNOWN),
                },
            );
        }

        if let Some(r) = cpu.into_iter().next() {
            env.cpu.insert(
                "0".to_owned(),
                Cpu {
                    usage: parse_optional_float(&r.five_seconds, FLOAT_UNKNOWN),
                },
            );
        }

        if let Some(r) = memory.into_iter().next() {
            env.memory = Memory {
                available_ram: parse_optional_int(&r.available),
                used_ram: parse_optional_int(&r.used),
            };
        }

        Ok(env)
    }
}

fn unit_key(unit: &str, name: &str) -> String {
    format!("{unit}/{name}")
}
