//! SNMP information.

use dellos6_core::SnmpInformation;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

fn detail(s: &SnmpInformation) -> String {
    let mut lines = vec![
        format!("Chassis ID: {}", s.chassis_id),
        format!("Contact:    {}", s.contact),
        format!("Location:   {}", s.location),
    ];
    if s.community.is_empty() {
        lines.push("Communities: none".into());
    } else {
        lines.push("Communities:".into());
        for (name, c) in &s.community {
            lines.push(format!("  {name}  mode={} acl={}", c.mode, c.acl));
        }
    }
    lines.join("\n")
}

pub async fn handle(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let info = driver.get_snmp_information().await?;
    let out = output::render_single(&global.output, &info, detail, |s| s.chassis_id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
