//! Profile resolution: config file profile + global flags -> channel.
//!
//! Flags win over the profile; the profile wins over `[defaults]`.

use dellos6_api::{ReplayChannel, SshChannel};
use dellos6_config::{Config, Profile};

use crate::channel::SwitchChannel;
use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// The profile for this invocation with flag overrides applied.
///
/// An explicitly requested profile must exist; a missing default profile
/// just means everything comes from flags.
pub fn effective_profile(global: &GlobalOpts, config: &Config) -> Result<Profile, CliError> {
    let name = active_profile_name(global, config);
    let mut profile = match config.profiles.get(&name) {
        Some(found) => found.clone(),
        None if global.profile.is_some() => {
            let mut available: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            available.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => Profile::default(),
    };

    if let Some(ref host) = global.host {
        profile.host.clone_from(host);
    }
    if global.port.is_some() {
        profile.port = global.port;
    }
    if global.user.is_some() {
        profile.username.clone_from(&global.user);
    }
    if global.identity_file.is_some() {
        profile.identity_file.clone_from(&global.identity_file);
    }
    if global.replay.is_some() {
        profile.replay_dir.clone_from(&global.replay);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }
    Ok(profile)
}

/// Build the channel for device-bound commands.
pub fn resolve_channel(global: &GlobalOpts, config: &Config) -> Result<SwitchChannel, CliError> {
    let profile = effective_profile(global, config)?;

    if let Some(dir) = profile.replay_dir {
        if !dir.is_dir() {
            return Err(CliError::Validation {
                field: "replay".into(),
                reason: format!("{} is not a directory", dir.display()),
            });
        }
        return Ok(SwitchChannel::Replay(ReplayChannel::from_dir(dir)));
    }

    if profile.host.trim().is_empty() {
        return Err(CliError::NoTarget {
            path: dellos6_config::config_path().display().to_string(),
        });
    }

    let session = dellos6_config::profile_to_session_config(&profile, &config.defaults)?;
    Ok(SwitchChannel::Ssh(SshChannel::new(session)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["dellos6"];
        argv.extend_from_slice(args);
        argv.push("facts");
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with_core() -> Config {
        let mut config = Config::default();
        config.profiles.insert(
            "core".into(),
            Profile {
                host: "10.0.0.10".into(),
                username: Some("admin".into()),
                timeout: Some(20),
                ..Profile::default()
            },
        );
        config.default_profile = Some("core".into());
        config
    }

    #[test]
    fn flags_override_profile() {
        let config = config_with_core();
        let opts = global(&["--host", "sw2", "--port", "2222", "--timeout", "5"]);
        let profile = effective_profile(&opts, &config).unwrap();
        assert_eq!(profile.host, "sw2");
        assert_eq!(profile.port, Some(2222));
        assert_eq!(profile.username.as_deref(), Some("admin"));
        assert_eq!(profile.timeout, Some(5));

        match resolve_channel(&opts, &config).unwrap() {
            SwitchChannel::Ssh(ssh) => {
                assert_eq!(ssh.config().host, "sw2");
                assert_eq!(ssh.config().timeout, Duration::from_secs(5));
            }
            SwitchChannel::Replay(_) => panic!("expected ssh"),
        }
    }

    #[test]
    fn explicit_unknown_profile_fails() {
        let config = config_with_core();
        let err = effective_profile(&global(&["--profile", "edge"]), &config).unwrap_err();
        assert!(matches!(
            err,
            CliError::ProfileNotFound { ref name, ref available } if name == "edge" && available == "core"
        ));
    }

    #[test]
    fn missing_default_profile_needs_a_target() {
        let err = resolve_channel(&global(&[]), &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::NoTarget { .. }));
    }

    #[test]
    fn replay_flag_selects_replay_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        let channel = resolve_channel(&global(&["--replay", path]), &Config::default()).unwrap();
        assert!(matches!(channel, SwitchChannel::Replay(_)));
    }

    #[test]
    fn replay_dir_must_exist() {
        let missing = PathBuf::from("/nonexistent/dellos6-captures");
        let opts = global(&["--replay", missing.to_str().unwrap()]);
        let err = resolve_channel(&opts, &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "replay"));
    }
}
