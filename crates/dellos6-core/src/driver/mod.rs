// ── Fact-domain driver ──
//
// One async operation per fact domain. Each operation issues its commands
// serially on the owned channel, converts extracted rows into typed records
// and folds them through the merge pipeline. Nothing is cached between
// calls.

mod bgp;
mod config;
mod environment;
mod facts;
mod instances;
mod interfaces;
mod neighbors;
mod ping;

use std::sync::Arc;

use dellos6_api::{CommandChannel, RecordExtractor, TemplateSet};
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::normalize::{AliasTable, NameCanonicalizer};
use crate::records::TemplateRecord;
use crate::sanitize::SanitizeFilters;

/// Output fragments that mark a rejected command.
pub const DEFAULT_ERROR_MARKERS: &[&str] = &["% Invalid"];

/// Construction-time settings of a [`Driver`].
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub aliases: AliasTable,
    pub error_markers: Vec<String>,
    pub sanitize: SanitizeFilters,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            aliases: AliasTable::dellos6(),
            error_markers: DEFAULT_ERROR_MARKERS
                .iter()
                .map(|m| (*m).to_owned())
                .collect(),
            sanitize: SanitizeFilters::dellos6(),
        }
    }
}

/// Dell OS6 facts driver over a command channel.
///
/// Every operation takes `&mut self`: one command is in flight at a time
/// and each call sees fresh device output.
pub struct Driver<C> {
    channel: C,
    extractor: Arc<dyn RecordExtractor + Send + Sync>,
    names: NameCanonicalizer,
    error_markers: Vec<String>,
    sanitize: SanitizeFilters,
}

impl<C: CommandChannel + Send> Driver<C> {
    pub fn new(
        channel: C,
        extractor: Arc<dyn RecordExtractor + Send + Sync>,
        config: DriverConfig,
    ) -> Self {
        Self {
            channel,
            extractor,
            names: NameCanonicalizer::new(config.aliases),
            error_markers: config.error_markers,
            sanitize: config.sanitize,
        }
    }

    /// Driver with the bundled templates and default settings.
    pub fn bundled(channel: C) -> Result<Self, CoreError> {
        let templates = TemplateSet::bundled()?;
        Ok(Self::new(
            channel,
            Arc::new(templates),
            DriverConfig::default(),
        ))
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }

    pub fn canonicalizer(&self) -> &NameCanonicalizer {
        &self.names
    }

    // ── Pipeline plumbing ────────────────────────────────────────

    /// Run `command` and fail with [`CoreError::Command`] when the output
    /// carries an error marker.
    pub async fn send_command(&mut self, command: &str) -> Result<String, CoreError> {
        let output = self.execute(command).await?;
        if self.is_rejected(&output) {
            return Err(CoreError::Command {
                command: command.to_owned(),
                output,
            });
        }
        Ok(output)
    }

    /// Run `command` and convert its records with `R`'s template.
    pub async fn fetch<R: TemplateRecord>(&mut self, command: &str) -> Result<Vec<R>, CoreError> {
        let raw = self.send_command(command).await?;
        self.parse(&raw)
    }

    /// Convert already fetched output with `R`'s template.
    pub fn parse<R: TemplateRecord>(&self, raw: &str) -> Result<Vec<R>, CoreError> {
        let rows = self.extractor.extract(R::TEMPLATE, raw)?;
        debug!(template = R::TEMPLATE, records = rows.len(), "extracted records");
        rows.into_iter().map(R::from_record).collect()
    }

    async fn execute(&mut self, command: &str) -> Result<String, CoreError> {
        debug!(command, "sending command");
        Ok(self.channel.execute(command).await?)
    }

    fn is_rejected(&self, output: &str) -> bool {
        self.error_markers
            .iter()
            .any(|marker| !marker.is_empty() && output.contains(marker.as_str()))
    }

    fn canonical(&self, token: &str) -> String {
        self.names.canonicalize(token)
    }
}

/// The first record of an authoritative source.
fn require_one<R: TemplateRecord>(records: Vec<R>, what: &str) -> Result<R, CoreError> {
    match records.into_iter().next() {
        Some(record) => Ok(record),
        None => {
            warn!(template = R::TEMPLATE, what, "authoritative source returned nothing");
            Err(CoreError::MissingData {
                template: R::TEMPLATE.to_owned(),
                what: what.to_owned(),
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dellos6_api::ReplayChannel;

    use super::*;
    use crate::records::VersionRecord;

    #[tokio::test]
    async fn error_marker_rejects_command() {
        let channel = ReplayChannel::from_pairs([(
            "show version",
            "\n% Invalid input detected at '^' marker.\n",
        )]);
        let mut driver = Driver::bundled(channel).unwrap();
        match driver.fetch::<VersionRecord>("show version").await.unwrap_err() {
            CoreError::Command { command, output } => {
                assert_eq!(command, "show version");
                assert!(output.contains("% Invalid input"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn custom_markers_replace_defaults() {
        let channel = ReplayChannel::from_pairs([("show version", "ERROR: not allowed")]);
        let config = DriverConfig {
            error_markers: vec!["ERROR:".into()],
            ..DriverConfig::default()
        };
        let mut driver = Driver::new(channel, Arc::new(TemplateSet::bundled().unwrap()), config);
        assert!(matches!(
            driver.send_command("show version").await,
            Err(CoreError::Command { .. })
        ));
    }

    #[tokio::test]
    async fn missing_capture_is_a_connection_failure() {
        let mut driver = Driver::bundled(ReplayChannel::from_pairs::<_, &str, &str>([])).unwrap();
        let err = driver.send_command("show clock").await.unwrap_err();
        assert!(err.is_connection());
    }

    #[test]
    fn require_one_reports_template() {
        match require_one::<VersionRecord>(Vec::new(), "version").unwrap_err() {
            CoreError::MissingData { template, what } => {
                assert_eq!(template, "show_version");
                assert_eq!(what, "version");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
