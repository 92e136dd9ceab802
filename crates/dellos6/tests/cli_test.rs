//! Integration tests for the `dellos6` CLI binary.
//!
//! Device-bound commands run against the replay captures shipped with
//! dellos6-core, so no switch is needed.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../dellos6-core/tests/fixtures");

const PING_CAPTURE: &str = "\
Pinging 10.0.0.1 with 100 bytes of data:

Reply From 10.0.0.1: icmp_seq = 0. time= 1000 usec.
Reply From 10.0.0.1: icmp_seq = 1. time= 3000 usec.

----10.0.0.1 PING statistics----
2 packets transmitted, 2 packets received, 0% packet loss
round-trip (msec)  min/avg/max = 1/2/3
";

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `dellos6` binary with env isolation.
///
/// Clears all `DELLOS6_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn dellos6_cmd_in(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dellos6");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("DELLOS6_PROFILE")
        .env_remove("DELLOS6_HOST")
        .env_remove("DELLOS6_USER")
        .env_remove("DELLOS6_PORT")
        .env_remove("DELLOS6_REPLAY")
        .env_remove("DELLOS6_OUTPUT")
        .env_remove("DELLOS6_TIMEOUT");
    cmd
}

fn dellos6_cmd() -> assert_cmd::Command {
    dellos6_cmd_in(Path::new("/tmp/dellos6-cli-test-nonexistent"))
}

/// `dellos6 --replay <fixtures> <args>`.
fn replay(args: &[&str]) -> assert_cmd::Command {
    let mut cmd = dellos6_cmd();
    cmd.args(["--replay", FIXTURES]).args(args);
    cmd
}

fn stdout_json(args: &[&str]) -> serde_json::Value {
    let output = replay(args).output().unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Capture directory holding a single command's output.
fn capture_dir(command: &str, text: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(dellos6_api::capture_name(command)), text).unwrap();
    dir
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = dellos6_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    dellos6_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("OS6")
            .and(predicate::str::contains("facts"))
            .and(predicate::str::contains("interfaces"))
            .and(predicate::str::contains("lldp")),
    );
}

#[test]
fn test_version_flag() {
    dellos6_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dellos6"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    dellos6_cmd().arg("reboot").assert().code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    dellos6_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    dellos6_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dellos6"));
}

// ── Target resolution ───────────────────────────────────────────────

#[test]
fn test_no_target_is_usage_error() {
    dellos6_cmd()
        .arg("facts")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No switch to talk to"));
}

#[test]
fn test_unknown_profile_is_usage_error() {
    dellos6_cmd()
        .args(["--profile", "nope", "facts"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_replay_dir_must_exist() {
    dellos6_cmd()
        .args(["--replay", "/nonexistent/dellos6-captures", "facts"])
        .assert()
        .code(2);
}

#[test]
fn test_profile_from_config_file() {
    let home = tempfile::tempdir().unwrap();
    let path = dellos6_cmd_in(home.path())
        .args(["profile", "path"])
        .output()
        .unwrap();
    let path = PathBuf::from(String::from_utf8(path.stdout).unwrap().trim());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        format!("default_profile = \"lab\"\n\n[profiles.lab]\nreplay_dir = \"{FIXTURES}\"\n"),
    )
    .unwrap();

    dellos6_cmd_in(home.path())
        .args(["--output", "plain", "facts"])
        .assert()
        .success()
        .stdout("dellos6-switch\n");

    dellos6_cmd_in(home.path())
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lab").and(predicate::str::contains("*")));

    dellos6_cmd_in(home.path())
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[profiles.lab]"));
}

// ── Device commands over replay ─────────────────────────────────────

#[test]
fn test_facts_table() {
    replay(&["facts"]).assert().success().stdout(
        predicate::str::contains("dellos6-switch.example.net")
            .and(predicate::str::contains("N4032"))
            .and(predicate::str::contains("5d 02:03:04")),
    );
}

#[test]
fn test_facts_json() {
    let facts = stdout_json(&["--output", "json", "facts"]);
    assert_eq!(facts["hostname"], "dellos6-switch");
    assert_eq!(facts["uptime"], 439_384);
    assert_eq!(facts["interface_list"].as_array().unwrap().len(), 8);
}

#[test]
fn test_interfaces_json_keeps_canonical_keys() {
    let interfaces = stdout_json(&["--output", "json-compact", "interfaces"]);
    let te1 = &interfaces["Tengigabitethernet1/0/1"];
    assert_eq!(te1["mtu"], 9216);
    assert_eq!(interfaces["Tengigabitethernet1/0/2"]["is_enabled"], false);
    assert!(interfaces.get("Te1/0/1").is_none());
}

#[test]
fn test_interfaces_plain_lists_names() {
    replay(&["--output", "plain", "interfaces"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Tengigabitethernet1/0/1\n")
                .and(predicate::str::contains("out-of-band")),
        );
}

#[test]
fn test_counters_table() {
    replay(&["--color", "never", "counters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120000").and(predicate::str::contains("RX err")));
}

#[test]
fn test_environment_yaml() {
    replay(&["--output", "yaml", "environment"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("'%usage': 12.5")
                .or(predicate::str::contains("\"%usage\": 12.5")),
        );
}

#[test]
fn test_lldp_detail_for_one_interface() {
    let detail = stdout_json(&["--output", "json", "lldp", "--interface", "Te1/0/1"]);
    let map = detail.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("Tengigabitethernet1/0/1"));
}

#[test]
fn test_arp_plain_lists_addresses() {
    let output = replay(&["--output", "plain", "arp"]).output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(!text.trim().is_empty());
    assert!(text.lines().all(|l| l.parse::<std::net::IpAddr>().is_ok()));
}

#[test]
fn test_bgp_json() {
    let bgp = stdout_json(&["--output", "json", "bgp"]);
    let peer = &bgp["global"]["peers"]["10.0.0.2"];
    assert_eq!(peer["uptime"], 93_784);
    assert_eq!(peer["address_family"]["ipv4"]["received_prefixes"], 15);
}

#[test]
fn test_vlans_json() {
    let vlans = stdout_json(&["--output", "json", "vlans"]);
    let ids: Vec<&String> = vlans.as_object().unwrap().keys().collect();
    assert_eq!(ids, ["1", "10", "20", "30"]);
}

#[test]
fn test_instances_by_name() {
    let instances = stdout_json(&["--output", "json", "instances", "--name", "red"]);
    assert_eq!(instances["red"]["type"], "L3VRF");
    assert!(instances.get("default").is_none());
}

#[test]
fn test_startup_config_is_printed_bare() {
    replay(&["config", "--retrieve", "startup"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("hostname \"dellos6-switch\"")
                .and(predicate::str::contains("!-- startup --").not()),
        );
}

// ── Ping ────────────────────────────────────────────────────────────

#[test]
fn test_ping_success() {
    let dir = capture_dir("ping 10.0.0.1 repeat 2 timeout 2 size 100", PING_CAPTURE);
    let output = dellos6_cmd()
        .args(["--replay"])
        .arg(dir.path())
        .args(["--output", "json", "ping", "10.0.0.1", "--count", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["success"]["probes_sent"], 2);
    assert_eq!(outcome["success"]["rtt_avg"], 2.0);
    assert_eq!(outcome["success"]["rtt_stddev"], 1.0);
}

#[test]
fn test_ping_rejected_exits_with_command_code() {
    let dir = capture_dir(
        "ping vrf blue 10.0.0.1 repeat 5 timeout 2 size 100",
        "\n% Invalid input detected at '^' marker.\n",
    );
    dellos6_cmd()
        .args(["--replay"])
        .arg(dir.path())
        .args(["ping", "10.0.0.1", "--vrf", "blue"])
        .assert()
        .code(9)
        .stdout(predicate::str::contains("Error while executing"));
}

#[test]
fn test_missing_capture_is_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    dellos6_cmd()
        .args(["--replay"])
        .arg(dir.path())
        .arg("facts")
        .assert()
        .code(7);
}
