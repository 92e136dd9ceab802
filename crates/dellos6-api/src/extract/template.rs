//! Regex template engine.
//!
//! A template is a list of line regexes with named groups. Templates are
//! declared in TOML:
//!
//! ```toml
//! [[template]]
//! id = "show_hosts"
//! mode = "single"
//! values = ["host_name", "domain"]
//! rules = ['^Default domain\.+\s*(?P<domain>.*?)\s*$']
//! ```
//!
//! Modes:
//! - `lines` (default): the first rule matching a line yields one record.
//! - `single`: every matching line fills the same record; the first
//!   non-empty value for a field wins. No match at all yields no record.
//! - `blocks`: a line matching `start` opens a new record; rule matches
//!   fill the open record, first non-empty value wins.
//!
//! `begin` skips everything up to and including the first matching line,
//! `end` stops extraction at the first matching line.

use std::collections::HashMap;
use std::path::Path;

use regex::{Captures, Regex};
use serde::Deserialize;
use tracing::trace;

use super::{Record, RecordExtractor};
use crate::error::Error;

const BUNDLED: &str = include_str!("../../templates/dellos6.toml");

// ── TOML schema ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TemplateFile {
    #[serde(default, rename = "template")]
    templates: Vec<TemplateDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateDef {
    id: String,
    #[serde(default)]
    mode: Mode,
    values: Vec<String>,
    #[serde(default)]
    rules: Vec<String>,
    start: Option<String>,
    begin: Option<String>,
    end: Option<String>,
}

/// How matching lines are folded into records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Lines,
    Single,
    Blocks,
}

// ── Compiled template ───────────────────────────────────────────────

/// A compiled template.
#[derive(Debug, Clone)]
pub struct Template {
    id: String,
    mode: Mode,
    values: Vec<String>,
    rules: Vec<Regex>,
    start: Option<Regex>,
    begin: Option<Regex>,
    end: Option<Regex>,
}

impl Template {
    fn compile(def: TemplateDef) -> Result<Self, Error> {
        let id = def.id;
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| Error::Template {
                id: id.clone(),
                message: e.to_string(),
            })
        };

        let rules = def
            .rules
            .iter()
            .map(|r| compile(r))
            .collect::<Result<Vec<_>, _>>()?;
        let start = def.start.as_deref().map(compile).transpose()?;
        let begin = def.begin.as_deref().map(compile).transpose()?;
        let end = def.end.as_deref().map(compile).transpose()?;

        if def.mode == Mode::Blocks && start.is_none() {
            return Err(Error::Template {
                id,
                message: "blocks mode requires a `start` pattern".into(),
            });
        }
        if rules.is_empty() && start.is_none() {
            return Err(Error::Template {
                id,
                message: "no rules".into(),
            });
        }

        for re in rules.iter().chain(start.iter()) {
            if let Some(name) = re
                .capture_names()
                .flatten()
                .find(|name| !def.values.iter().any(|v| v == name))
            {
                return Err(Error::Template {
                    id,
                    message: format!("group '{name}' is not a declared value"),
                });
            }
        }

        Ok(Self {
            id,
            mode: def.mode,
            values: def.values,
            rules,
            start,
            begin,
            end,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Declared value names, in record order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Run the template over `raw`.
    pub fn extract(&self, raw: &str) -> Vec<Record> {
        let mut records = Vec::new();
        let mut single = self.empty_record();
        let mut single_matched = false;
        let mut open: Option<Record> = None;
        let mut active = self.begin.is_none();

        for line in raw.lines() {
            let line = line.trim_end_matches('\r');
            if !active {
                active = self.begin.as_ref().is_some_and(|re| re.is_match(line));
                continue;
            }
            if self.end.as_ref().is_some_and(|re| re.is_match(line)) {
                break;
            }

            match self.mode {
                Mode::Lines => {
                    if let Some((re, caps)) = self.first_match(line) {
                        let mut record = self.empty_record();
                        fill(&mut record, re, &caps, false);
                        records.push(record);
                    }
                }
                Mode::Single => {
                    for re in &self.rules {
                        if let Some(caps) = re.captures(line) {
                            single_matched = true;
                            fill(&mut single, re, &caps, true);
                        }
                    }
                }
                Mode::Blocks => {
                    if let Some(start) = &self.start {
                        if let Some(caps) = start.captures(line) {
                            let mut record = self.empty_record();
                            fill(&mut record, start, &caps, false);
                            if let Some(done) = open.replace(record) {
                                records.push(done);
                            }
                            continue;
                        }
                    }
                    if let Some(record) = open.as_mut() {
                        for re in &self.rules {
                            if let Some(caps) = re.captures(line) {
                                fill(record, re, &caps, true);
                            }
                        }
                    }
                }
            }
        }

        match self.mode {
            Mode::Lines => {}
            Mode::Single => {
                if single_matched {
                    records.push(single);
                }
            }
            Mode::Blocks => records.extend(open),
        }
        trace!(template = %self.id, count = records.len(), "extracted records");
        records
    }

    fn first_match<'l>(&self, line: &'l str) -> Option<(&Regex, Captures<'l>)> {
        self.rules
            .iter()
            .find_map(|re| re.captures(line).map(|caps| (re, caps)))
    }

    fn empty_record(&self) -> Record {
        self.values
            .iter()
            .map(|v| (v.clone(), String::new()))
            .collect()
    }
}

/// Copy the named groups of `caps` into `record`, trimmed. With
/// `keep_existing`, fields that already hold a value are left alone.
fn fill(record: &mut Record, re: &Regex, caps: &Captures<'_>, keep_existing: bool) {
    for name in re.capture_names().flatten() {
        let Some(m) = caps.name(name) else {
            continue;
        };
        if let Some(slot) = record.get_mut(name) {
            if keep_existing && !slot.is_empty() {
                continue;
            }
            m.as_str().trim().clone_into(slot);
        }
    }
}

// ── Template set ────────────────────────────────────────────────────

/// A collection of templates addressable by id.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: HashMap<String, Template>,
}

impl TemplateSet {
    /// The Dell OS6 templates shipped with this crate.
    pub fn bundled() -> Result<Self, Error> {
        Self::from_toml(BUNDLED)
    }

    /// Parse and compile a TOML template document.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let file: TemplateFile = toml::from_str(text)?;
        let mut templates = HashMap::with_capacity(file.templates.len());
        for def in file.templates {
            let template = Template::compile(def)?;
            if templates.contains_key(template.id()) {
                return Err(Error::Template {
                    id: template.id,
                    message: "defined more than once".into(),
                });
            }
            templates.insert(template.id.clone(), template);
        }
        Ok(Self { templates })
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Add every template of `other`, replacing same-id templates.
    pub fn merge(&mut self, other: TemplateSet) {
        self.templates.extend(other.templates);
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Template ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl RecordExtractor for TemplateSet {
    fn extract(&self, template: &str, raw: &str) -> Result<Vec<Record>, Error> {
        self.get(template)
            .map(|t| t.extract(raw))
            .ok_or_else(|| Error::UnknownTemplate(template.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn set(toml: &str) -> TemplateSet {
        TemplateSet::from_toml(toml).unwrap()
    }

    fn rows(records: &[Record]) -> Vec<Vec<&str>> {
        records
            .iter()
            .map(|r| r.values().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn lines_mode_one_record_per_matching_line() {
        let t = set(r#"
            [[template]]
            id = "t"
            values = ["port", "state", "note"]
            rules = ['^(?P<port>Te\S+)\s+(?P<state>Up|Down)']
        "#);
        let raw = "Port    State\nTe1/0/1 Up\r\njunk\nTe1/0/2   Down  \n";
        let records = t.extract("t", raw).unwrap();
        assert_eq!(rows(&records), vec![vec!["Te1/0/1", "Up", ""], vec!["Te1/0/2", "Down", ""]]);
        // Values keep declaration order.
        assert_eq!(records[0].keys().collect::<Vec<_>>(), ["port", "state", "note"]);
    }

    #[test]
    fn lines_mode_first_rule_wins() {
        let t = set(r#"
            [[template]]
            id = "t"
            values = ["a", "b"]
            rules = ['^x(?P<a>\d+)', '^x(?P<b>\d+)']
        "#);
        assert_eq!(rows(&t.extract("t", "x1\n").unwrap()), vec![vec!["1", ""]]);
    }

    #[test]
    fn single_mode_first_non_empty_value_wins() {
        let t = set(r#"
            [[template]]
            id = "t"
            mode = "single"
            values = ["name", "uptime"]
            rules = ['^Name:\s*(?P<name>.*?)\s*$', '^Up:\s*(?P<uptime>.*)$']
        "#);
        let raw = "Name:\nName: sw1\nUp: 5 days\nName: sw2\n";
        assert_eq!(rows(&t.extract("t", raw).unwrap()), vec![vec!["sw1", "5 days"]]);
        assert!(t.extract("t", "nothing here").unwrap().is_empty());
    }

    #[test]
    fn blocks_mode_groups_lines_under_start() {
        let t = set(r#"
            [[template]]
            id = "t"
            mode = "blocks"
            values = ["peer", "state"]
            start = '^Peer\s+(?P<peer>\S+)'
            rules = ['^\s+State\s+(?P<state>\S+)']
        "#);
        let raw = "  State ignored\nPeer 10.0.0.1\n  State up\n  State later\nPeer 10.0.0.2\nPeer 10.0.0.3\n  State idle\n";
        assert_eq!(
            rows(&t.extract("t", raw).unwrap()),
            vec![
                vec!["10.0.0.1", "up"],
                vec!["10.0.0.2", ""],
                vec!["10.0.0.3", "idle"],
            ]
        );
    }

    #[test]
    fn begin_and_end_bound_the_section() {
        let t = set(r#"
            [[template]]
            id = "t"
            values = ["name"]
            begin = '^Fans:'
            end = '^Power:'
            rules = ['^(?P<name>\w+) OK']
        "#);
        let raw = "Temp OK\nFans:\nFan1 OK\nFan2 OK\nPower:\nPsu OK\n";
        assert_eq!(rows(&t.extract("t", raw).unwrap()), vec![vec!["Fan1"], vec!["Fan2"]]);
        // Section never starts.
        assert!(t.extract("t", "Fan1 OK\n").unwrap().is_empty());
    }

    #[test]
    fn unknown_template_is_an_error() {
        let t = TemplateSet::default();
        assert!(matches!(
            t.extract("show_nothing", "").unwrap_err(),
            Error::UnknownTemplate(id) if id == "show_nothing"
        ));
    }

    #[test]
    fn undeclared_group_is_rejected() {
        let err = TemplateSet::from_toml(r#"
            [[template]]
            id = "bad"
            values = ["a"]
            rules = ['(?P<b>x)']
        "#)
        .unwrap_err();
        assert!(matches!(err, Error::Template { ref id, .. } if id == "bad"), "{err}");
    }

    #[test]
    fn blocks_without_start_is_rejected() {
        let err = TemplateSet::from_toml(r#"
            [[template]]
            id = "bad"
            mode = "blocks"
            values = ["a"]
            rules = ['(?P<a>x)']
        "#)
        .unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
    }

    #[test]
    fn merge_replaces_same_id() {
        let mut base = set(r#"
            [[template]]
            id = "t"
            values = ["a"]
            rules = ['^a=(?P<a>\d+)']
        "#);
        base.merge(set(r#"
            [[template]]
            id = "t"
            values = ["a"]
            rules = ['^A=(?P<a>\d+)']
        "#));
        assert_eq!(base.len(), 1);
        assert_eq!(rows(&base.extract("t", "a=1\nA=2\n").unwrap()), vec![vec!["2"]]);
    }

    #[test]
    fn bundled_templates_compile() {
        let set = TemplateSet::bundled().unwrap();
        for id in [
            "show_version",
            "show_system",
            "show_interfaces_status",
            "show_interfaces",
            "show_lldp_remote-device_all",
            "show_ip_bgp_neighbors",
            "show_vlan",
            "show_running-config_user_keys",
        ] {
            assert!(set.get(id).is_some(), "missing template {id}");
        }
        assert_eq!(set.get("show_interfaces").unwrap().mode(), Mode::Blocks);
    }

    #[test]
    fn bundled_version_template() {
        let set = TemplateSet::bundled().unwrap();
        let raw = "System Model ID................ N4032\nSerial Number.................. CN04G4FP\n";
        let records = set.extract("show_version", raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["model"], "N4032");
        assert_eq!(records[0]["serial_num"], "CN04G4FP");
        assert_eq!(records[0]["mac"], "");
    }
}
