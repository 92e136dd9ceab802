//! Running and startup configuration.

use dellos6_core::{ConfigSelector, DeviceConfig};

use crate::cli::{ConfigArgs, GlobalOpts, Retrieve};
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

impl From<Retrieve> for ConfigSelector {
    fn from(r: Retrieve) -> Self {
        match r {
            Retrieve::All => Self::All,
            Retrieve::Running => Self::Running,
            Retrieve::Startup => Self::Startup,
            Retrieve::Candidate => Self::Candidate,
        }
    }
}

/// Requested sections, headed by name when more than one has content.
fn text(config: &DeviceConfig) -> String {
    let sections: Vec<(&str, &str)> = [
        ("running", config.running.as_str()),
        ("startup", config.startup.as_str()),
        ("candidate", config.candidate.as_str()),
    ]
    .into_iter()
    .filter(|(_, body)| !body.is_empty())
    .collect();

    match sections.as_slice() {
        [(_, body)] => body.trim_end().to_owned(),
        _ => sections
            .iter()
            .map(|(name, body)| format!("!-- {name} --\n{}", body.trim_end()))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

pub async fn handle(
    driver: &mut SwitchDriver,
    args: ConfigArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let config = driver
        .get_config(args.retrieve.into(), args.full, args.sanitized)
        .await?;
    let out = output::render_single(&global.output, &config, text, text)?;
    output::print_output(&out, global.quiet);
    Ok(())
}
