//! Device identity.

use dellos6_core::Facts;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

fn uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = secs % 86_400 / 3_600;
    let minutes = secs % 3_600 / 60;
    let seconds = secs % 60;
    format!("{days}d {hours:02}:{minutes:02}:{seconds:02} ({secs}s)")
}

fn detail(f: &Facts) -> String {
    [
        format!("Hostname:   {}", f.hostname),
        format!("FQDN:       {}", f.fqdn),
        format!("Vendor:     {}", f.vendor),
        format!("Model:      {}", f.model),
        format!("OS version: {}", f.os_version),
        format!("Serial:     {}", f.serial_number),
        format!("Uptime:     {}", uptime(f.uptime)),
        format!("Interfaces: {}", f.interface_list.len()),
    ]
    .join("\n")
}

pub async fn handle(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let facts = driver.get_facts().await?;
    let out = output::render_single(&global.output, &facts, detail, |f| f.hostname.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
