//! Shared configuration for dellos6 tools.
//!
//! TOML profiles layered with `DELLOS6_*` environment variables, and
//! translation into `SessionConfig` (how to reach a switch), `DriverConfig`
//! (alias table, error markers, sanitize filters) and the template set.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use dellos6_api::{SessionConfig, TemplateSet};
use dellos6_core::{AliasTable, DriverConfig, SanitizeFilters};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{profile}' not found")]
    UnknownProfile { profile: String },

    #[error("failed to load templates: {0}")]
    Templates(#[from] dellos6_api::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named switch profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,

    /// Extra interface aliases (short prefix → long form), applied on top
    /// of the built-in OS6 table.
    #[serde(default)]
    pub aliases: IndexMap<String, String>,

    /// Template file merged over the bundled templates.
    pub templates: Option<PathBuf>,

    /// Replaces the built-in command error markers.
    pub error_markers: Option<Vec<String>>,

    /// Extra sanitize filters, applied after the built-in ones.
    #[serde(default)]
    pub sanitize: Vec<SanitizeRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
            aliases: IndexMap::new(),
            templates: None,
            error_markers: None,
            sanitize: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Seconds per command.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    60
}

/// A named switch profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Hostname or address of the switch.
    #[serde(default)]
    pub host: String,

    /// SSH port (22 when unset).
    pub port: Option<u16>,

    /// Login name; unset leaves it to ssh.
    pub username: Option<String>,

    /// Private key for ssh.
    pub identity_file: Option<PathBuf>,

    /// Extra ssh `-o` options.
    #[serde(default)]
    pub ssh_options: Vec<String>,

    /// Serve commands from saved captures in this directory instead of ssh.
    pub replay_dir: Option<PathBuf>,

    /// Override the default timeout.
    pub timeout: Option<u64>,
}

/// One extra `(pattern, replacement)` sanitize filter.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SanitizeRule {
    pub pattern: String,
    pub replacement: String,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "dellos6", "dellos6").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("dellos6");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the platform config file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment. A missing file is not
/// an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DELLOS6_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it cannot be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Render config as TOML.
pub fn to_toml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

// ── Resolution ──────────────────────────────────────────────────────

/// Look up a profile by name.
pub fn find_profile<'a>(cfg: &'a Config, name: &str) -> Result<&'a Profile, ConfigError> {
    cfg.profiles
        .get(name)
        .ok_or_else(|| ConfigError::UnknownProfile {
            profile: name.into(),
        })
}

/// Build a `SessionConfig` from a profile. CLI flags are applied by the caller.
pub fn profile_to_session_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<SessionConfig, ConfigError> {
    let host = profile.host.trim();
    if host.is_empty() {
        return Err(ConfigError::Validation {
            field: "host".into(),
            reason: "a switch hostname or address is required".into(),
        });
    }

    let mut session = SessionConfig::new(host);
    if let Some(port) = profile.port {
        session.port = port;
    }
    session.username.clone_from(&profile.username);
    session.identity_file.clone_from(&profile.identity_file);
    session.ssh_options.clone_from(&profile.ssh_options);
    session.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    Ok(session)
}

/// Driver settings: built-in OS6 aliases and filters plus config extras.
pub fn driver_config(cfg: &Config) -> Result<DriverConfig, ConfigError> {
    let mut aliases = AliasTable::dellos6();
    for (alias, long) in &cfg.aliases {
        aliases.insert(alias.as_str(), long.as_str());
    }

    let mut sanitize = SanitizeFilters::dellos6();
    for rule in &cfg.sanitize {
        sanitize
            .push(&rule.pattern, rule.replacement.as_str())
            .map_err(|e| ConfigError::Validation {
                field: "sanitize".into(),
                reason: e.to_string(),
            })?;
    }

    let mut config = DriverConfig {
        aliases,
        sanitize,
        ..DriverConfig::default()
    };
    if let Some(ref markers) = cfg.error_markers {
        config.error_markers.clone_from(markers);
    }
    Ok(config)
}

/// Bundled templates, overlaid with the configured template file.
pub fn load_templates(cfg: &Config) -> Result<TemplateSet, ConfigError> {
    let mut templates = TemplateSet::bundled()?;
    if let Some(ref path) = cfg.templates {
        templates.merge(TemplateSet::from_file(path)?);
    }
    Ok(templates)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.timeout, 60);
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn loads_profiles_and_extras() {
        let file = write_config(
            r#"
default_profile = "core"
error_markers = ["% Invalid", "% Incomplete"]

[defaults]
output = "json"
timeout = 30

[profiles.core]
host = "10.0.0.10"
port = 2222
username = "admin"
ssh_options = ["StrictHostKeyChecking=accept-new"]

[profiles.lab]
host = "lab-sw"
replay_dir = "/tmp/captures"
timeout = 5

[aliases]
Tw = "Twentyfivegigabitethernet"

[[sanitize]]
pattern = '^(radius-server key)\s+\S+$'
replacement = "${1} <removed>"
"#,
        );
        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("core"));
        assert_eq!(cfg.defaults.output, "json");

        let core = find_profile(&cfg, "core").unwrap();
        let session = profile_to_session_config(core, &cfg.defaults).unwrap();
        assert_eq!(session.host, "10.0.0.10");
        assert_eq!(session.port, 2222);
        assert_eq!(session.username.as_deref(), Some("admin"));
        assert_eq!(session.timeout, Duration::from_secs(30));
        assert_eq!(session.ssh_options, ["StrictHostKeyChecking=accept-new"]);

        let lab = find_profile(&cfg, "lab").unwrap();
        assert_eq!(lab.replay_dir.as_deref(), Some(Path::new("/tmp/captures")));
        let session = profile_to_session_config(lab, &cfg.defaults).unwrap();
        assert_eq!(session.port, 22);
        assert_eq!(session.timeout, Duration::from_secs(5));

        let driver = driver_config(&cfg).unwrap();
        assert_eq!(driver.error_markers, ["% Invalid", "% Incomplete"]);
        assert_eq!(driver.aliases.len(), AliasTable::dellos6().len() + 1);
        assert_eq!(driver.sanitize.len(), SanitizeFilters::dellos6().len() + 1);
        assert_eq!(
            driver.sanitize.apply("radius-server key s3cret"),
            "radius-server key <removed>"
        );
    }

    #[test]
    fn unknown_profile_is_reported() {
        let cfg = Config::default();
        assert!(matches!(
            find_profile(&cfg, "nope"),
            Err(ConfigError::UnknownProfile { profile }) if profile == "nope"
        ));
    }

    #[test]
    fn profile_without_host_is_invalid() {
        let err = profile_to_session_config(&Profile::default(), &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "host"));
    }

    #[test]
    fn invalid_sanitize_rule_is_rejected() {
        let cfg = Config {
            sanitize: vec![SanitizeRule {
                pattern: "(unclosed".into(),
                replacement: String::new(),
            }],
            ..Config::default()
        };
        assert!(matches!(
            driver_config(&cfg),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn template_file_overrides_bundled() {
        let file = write_config(
            r#"
[[template]]
id = "show_clock"
mode = "single"
values = ["time"]
rules = ['^(?P<time>\d+:\d+:\d+)']
"#,
        );
        let cfg = Config {
            templates: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let templates = load_templates(&cfg).unwrap();
        assert!(templates.get("show_clock").is_some());
        assert!(templates.get("show_version").is_some());
    }

    #[test]
    fn config_renders_as_toml() {
        let text = to_toml(&Config::default()).unwrap();
        assert!(text.contains("default_profile = \"default\""));
    }
}
