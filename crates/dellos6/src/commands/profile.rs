//! Profile subcommand handlers. None of these touch a switch.

use tabled::Tabled;

use dellos6_config::{Config, Profile};

use crate::cli::{GlobalOpts, ProfileArgs, ProfileCommand};
use crate::config::active_profile_name;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "")]
    active: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "User")]
    user: String,
}

fn target(p: &Profile) -> String {
    match (&p.replay_dir, p.port) {
        (Some(dir), _) => format!("replay:{}", dir.display()),
        (None, Some(port)) => format!("{}:{port}", p.host),
        (None, None) => p.host.clone(),
    }
}

/// Profiles sorted by name.
fn sorted(cfg: &Config) -> Vec<(&String, &Profile)> {
    let mut profiles: Vec<_> = cfg.profiles.iter().collect();
    profiles.sort_by(|a, b| a.0.cmp(b.0));
    profiles
}

pub fn handle(args: ProfileArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ProfileCommand::Path => {
            output::print_output(
                &dellos6_config::config_path().display().to_string(),
                global.quiet,
            );
            Ok(())
        }

        ProfileCommand::List => {
            let cfg = dellos6_config::load_config()?;
            let active = active_profile_name(global, &cfg);
            let profiles = sorted(&cfg);
            let out = output::render_rows(
                &global.output,
                &cfg.profiles,
                |_| {
                    profiles
                        .iter()
                        .map(|(name, p)| ProfileRow {
                            active: if **name == active { "*" } else { "" },
                            name: (*name).clone(),
                            target: target(p),
                            user: p.username.clone().unwrap_or_default(),
                        })
                        .collect()
                },
                |_| {
                    profiles
                        .iter()
                        .map(|(name, _)| (*name).clone())
                        .collect::<Vec<_>>()
                        .join("\n")
                },
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProfileCommand::Show => {
            let cfg = dellos6_config::load_config()?;
            let out = dellos6_config::to_toml(&cfg)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
