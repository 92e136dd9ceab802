//! Secret redaction for configuration text.
//!
//! An ordered list of `(pattern, replacement)` regex pairs applied to every
//! line. Replacements use `regex` syntax (`${1}`).

use regex::Regex;
use tracing::warn;

use crate::error::CoreError;

const DELLOS6_FILTERS: &[(&str, &str)] = &[
    (
        r"^(username\s+\S+\s+password)\s+\S+(\s+privilege\s+\d+)?(\s+encrypted)?$",
        "${1} <removed>${2}${3}",
    ),
    (r"^(key)\s+\S+$", "${1} <removed>"),
    (r"^(snmp-server engineid local).*$", "${1} <removed>"),
    (
        r"^(snmp-server community)\s+\S+(\s+(?:ro|rw))?(\s+ipaddress\s+\S+)?$",
        "${1} <removed>${2}${3}",
    ),
    (
        r"^(snmp-server host \S+ traps version (?:1|2)) \S+(\s+(?:filter \S+)?(?:udp-port \d+)?)?$",
        "${1} <removed>${2}",
    ),
    (
        r"^(snmp-server host \S+ informs\s*(?:timeout \d+)?\s*(?:retries \d+)?)\s*\S+$",
        "${1} <removed>",
    ),
    (
        r"^(enable\s+password)\s+(\S+)(\s+encrypted)?$",
        "${1} <removed>${3}",
    ),
];

/// Ordered redaction filters.
#[derive(Debug, Clone, Default)]
pub struct SanitizeFilters {
    filters: Vec<(Regex, String)>,
}

impl SanitizeFilters {
    /// Filters for passwords, keys and SNMP secrets in OS6 configuration.
    pub fn dellos6() -> Self {
        let filters = DELLOS6_FILTERS
            .iter()
            .filter_map(|(pattern, replacement)| match Regex::new(pattern) {
                Ok(re) => Some((re, (*replacement).to_owned())),
                Err(e) => {
                    warn!(pattern, error = %e, "skipping built-in sanitize filter");
                    None
                }
            })
            .collect();
        Self { filters }
    }

    /// Append a filter.
    pub fn push(&mut self, pattern: &str, replacement: impl Into<String>) -> Result<(), CoreError> {
        let re = Regex::new(pattern).map_err(|e| CoreError::Config {
            message: format!("invalid sanitize pattern '{pattern}': {e}"),
        })?;
        self.filters.push((re, replacement.into()));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply every filter, in order, to each line of `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for line in text.split_inclusive('\n') {
            let (body, newline) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            let mut current = body.to_owned();
            for (re, replacement) in &self.filters {
                current = re.replace_all(&current, replacement.as_str()).into_owned();
            }
            out.push_str(&current);
            out.push_str(newline);
        }
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_filters_compile() {
        assert_eq!(SanitizeFilters::dellos6().len(), DELLOS6_FILTERS.len());
    }

    #[test]
    fn redacts_secrets_and_keeps_other_lines() {
        let config = "\
hostname \"sw1\"
username admin password 5f4dcc3b privilege 15 encrypted
username guest password e99a18c4 encrypted
enable password 7d1f2a encrypted
snmp-server community public ro
snmp-server community private rw ipaddress 10.0.0.0
snmp-server engineid local 80001f8803
snmp-server host 10.1.1.1 traps version 2 s3cret udp-port 162
key 0123abcd
";
        let expected = "\
hostname \"sw1\"
username admin password <removed> privilege 15 encrypted
username guest password <removed> encrypted
enable password <removed> encrypted
snmp-server community <removed> ro
snmp-server community <removed> rw ipaddress 10.0.0.0
snmp-server engineid local <removed>
snmp-server host 10.1.1.1 traps version 2 <removed> udp-port 162
key <removed>
";
        assert_eq!(SanitizeFilters::dellos6().apply(config), expected);
    }

    #[test]
    fn keeps_missing_trailing_newline() {
        let out = SanitizeFilters::dellos6().apply("key abc\nexit");
        assert_eq!(out, "key <removed>\nexit");
    }

    #[test]
    fn custom_filters() {
        let mut filters = SanitizeFilters::default();
        filters.push(r"^(radius-server key)\s+\S+$", "${1} <removed>").unwrap();
        assert_eq!(filters.apply("radius-server key abc"), "radius-server key <removed>");
        assert!(filters.push("(unclosed", "").is_err());
    }
}
