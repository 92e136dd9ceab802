//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats serialize the driver's result unchanged, plain emits
//! one identifier per line.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use indexmap::IndexMap;
use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use dellos6_core::normalize::{INT_UNKNOWN, is_float_unknown};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Label a boolean state, green when good and red when not.
pub fn flag(good: bool, yes: &str, no: &str, color: bool) -> String {
    match (good, color) {
        (true, true) => yes.green().to_string(),
        (false, true) => no.red().to_string(),
        (true, false) => yes.to_owned(),
        (false, false) => no.to_owned(),
    }
}

/// Integer with the `-1` sentinel shown as `-`.
pub fn num(value: i64) -> String {
    if value == INT_UNKNOWN {
        "-".into()
    } else {
        value.to_string()
    }
}

/// Float with the `-1.0` sentinel shown as `-`.
pub fn float(value: f64, precision: usize) -> String {
    if is_float_unknown(value) {
        "-".into()
    } else {
        format!("{value:.precision$}")
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render any serializable value; `to_rows` builds the table view and
/// `plain_fn` the line-per-item view.
pub fn render_rows<T, R>(
    format: &OutputFormat,
    data: &T,
    to_rows: impl FnOnce(&T) -> Vec<R>,
    plain_fn: impl FnOnce(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
    R: Tabled,
{
    match format {
        OutputFormat::Table => Ok(render_table(&to_rows(data))),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(plain_fn(data)),
    }
}

/// Render a list of serde-serializable + tabled items in the chosen format.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    render_rows(
        format,
        data,
        |items| items.iter().map(to_row).collect(),
        |items| items.iter().map(id_fn).collect::<Vec<_>>().join("\n"),
    )
}

/// Render a keyed result. Structured formats keep the map shape, table
/// builds one row per entry and plain prints the keys.
pub fn render_map<K, V, R>(
    format: &OutputFormat,
    data: &IndexMap<K, V>,
    to_row: impl Fn(&K, &V) -> R,
) -> Result<String, CliError>
where
    K: serde::Serialize + Display,
    V: serde::Serialize,
    R: Tabled,
{
    render_rows(
        format,
        data,
        |map| map.iter().map(|(k, v)| to_row(k, v)).collect(),
        plain_keys::<K, V>,
    )
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted string,
/// since single-item detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Map keys, one per line.
pub fn plain_keys<K: Display, V>(map: &IndexMap<K, V>) -> String {
    map.keys()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let text = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(text)
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Port {
        mtu: i64,
    }

    #[derive(Tabled)]
    struct PortRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "MTU")]
        mtu: String,
    }

    fn ports() -> IndexMap<String, Port> {
        let mut map = IndexMap::new();
        map.insert("Tengigabitethernet1/0/1".to_owned(), Port { mtu: 9216 });
        map.insert("Tengigabitethernet1/0/2".to_owned(), Port { mtu: -1 });
        map
    }

    fn row(name: &str, port: &Port) -> PortRow {
        PortRow {
            name: name.to_owned(),
            mtu: num(port.mtu),
        }
    }

    #[test]
    fn map_renders_as_table_with_sentinels_dashed() {
        let out = render_map(&OutputFormat::Table, &ports(), |k: &String, v| row(k, v)).unwrap();
        assert!(out.contains("Tengigabitethernet1/0/1"));
        assert!(out.contains("9216"));
        assert!(out.contains(" - "));
        assert!(out.contains("MTU"));
    }

    #[test]
    fn map_keeps_its_shape_in_json() {
        let out = render_map(&OutputFormat::JsonCompact, &ports(), |k: &String, v| row(k, v)).unwrap();
        assert_eq!(
            out,
            r#"{"Tengigabitethernet1/0/1":{"mtu":9216},"Tengigabitethernet1/0/2":{"mtu":-1}}"#
        );
    }

    #[test]
    fn map_plain_lists_keys() {
        let out = render_map(&OutputFormat::Plain, &ports(), |k: &String, v| row(k, v)).unwrap();
        assert_eq!(out, "Tengigabitethernet1/0/1\nTengigabitethernet1/0/2");
    }

    #[test]
    fn flag_without_color_is_plain_text() {
        assert_eq!(flag(true, "up", "down", false), "up");
        assert_eq!(flag(false, "up", "down", false), "down");
        assert_ne!(flag(true, "up", "down", true), "up");
    }

    #[test]
    fn float_sentinel_is_dashed() {
        assert_eq!(float(-1.0, 1), "-");
        assert_eq!(float(42.0, 1), "42.0");
        assert_eq!(float(-5.5, 1), "-5.5");
    }
}
