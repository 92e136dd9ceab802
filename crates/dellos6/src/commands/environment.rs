//! Environment sensors and resource usage.

use tabled::Tabled;

use dellos6_core::Environment;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

#[derive(Tabled)]
struct SensorRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Reading")]
    reading: String,
}

fn sensor_rows(env: &Environment, color: bool) -> Vec<SensorRow> {
    let mut rows = Vec::new();
    for (name, t) in &env.temperature {
        let status = if t.is_critical {
            output::flag(false, "", "critical", color)
        } else {
            output::flag(!t.is_alert, "ok", "alert", color)
        };
        rows.push(SensorRow {
            kind: "temperature",
            name: name.clone(),
            status,
            reading: format!("{} C", output::float(t.temperature, 1)),
        });
    }
    for (name, fan) in &env.fans {
        rows.push(SensorRow {
            kind: "fan",
            name: name.clone(),
            status: output::flag(fan.status, "ok", "failed", color),
            reading: String::new(),
        });
    }
    for (name, psu) in &env.power {
        rows.push(SensorRow {
            kind: "power",
            name: name.clone(),
            status: output::flag(psu.status, "ok", "failed", color),
            reading: format!("{} W", output::float(psu.output, 1)),
        });
    }
    for (name, cpu) in &env.cpu {
        rows.push(SensorRow {
            kind: "cpu",
            name: name.clone(),
            status: String::new(),
            reading: format!("{}%", output::float(cpu.usage, 1)),
        });
    }
    rows.push(SensorRow {
        kind: "memory",
        name: "ram".into(),
        status: String::new(),
        reading: format!(
            "{} used / {} available",
            output::num(env.memory.used_ram),
            output::num(env.memory.available_ram)
        ),
    });
    rows
}

fn plain(env: &Environment) -> String {
    sensor_rows(env, false)
        .into_iter()
        .map(|r| format!("{} {} {}", r.kind, r.name, r.status).trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn handle(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let env = driver.get_environment().await?;
    let color = output::should_color(&global.color);
    let out = output::render_rows(&global.output, &env, |e| sensor_rows(e, color), plain)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
