//! Ping requests and RTT statistics from free-form `ping` output.
//!
//! OS6 prints one line per probe, a summary and an aggregate:
//!
//! ```text
//! Reply From 10.0.0.1: icmp_seq = 0. time= 72000 usec.
//! 5 packets transmitted, 5 packets received, 0% packet loss
//! round-trip (msec)  min/avg/max = 72/72/72
//! ```

use serde::{Deserialize, Serialize};

/// Below-resolution RTT marker in the aggregate line.
const BELOW_RESOLUTION: &str = "<10";

/// Parameters of a ping run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingRequest {
    pub destination: String,
    /// Source address or interface.
    pub source: Option<String>,
    pub vrf: Option<String>,
    /// Probes to send.
    pub count: u32,
    /// Seconds to wait per probe.
    pub timeout: u32,
    /// Payload bytes.
    pub size: u32,
}

impl PingRequest {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            source: None,
            vrf: None,
            count: 5,
            timeout: 2,
            size: 100,
        }
    }

    /// The OS6 CLI command for this request.
    pub fn command(&self) -> String {
        let mut cmd = String::from("ping");
        if let Some(ref vrf) = self.vrf {
            cmd.push_str(" vrf ");
            cmd.push_str(vrf);
        }
        cmd.push(' ');
        cmd.push_str(&self.destination);
        cmd.push_str(&format!(
            " repeat {} timeout {} size {}",
            self.count, self.timeout, self.size
        ));
        if let Some(ref source) = self.source {
            cmd.push_str(" source ");
            cmd.push_str(source);
        }
        cmd
    }
}

/// Result of a ping run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PingOutcome {
    Success(PingSuccess),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingSuccess {
    pub probes_sent: u32,
    /// Probes without a reply.
    pub packet_loss: u32,
    /// Milliseconds.
    pub rtt_min: f64,
    pub rtt_max: f64,
    pub rtt_avg: f64,
    /// Population standard deviation of the per-probe RTTs.
    pub rtt_stddev: f64,
    pub results: Vec<ProbeResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub ip_address: String,
    /// Milliseconds.
    pub rtt: f64,
}

/// Extract statistics from the output of `command`.
///
/// A line starting with `%` (device error) yields [`PingOutcome::Error`]
/// carrying the command and raw output.
pub fn parse_statistics(command: &str, raw: &str) -> PingOutcome {
    let mut summary: Option<(u32, u32)> = None;
    let mut aggregate: Option<(f64, f64, f64)> = None;
    let mut results = Vec::new();

    for line in raw.lines().map(str::trim) {
        if line.starts_with('%') {
            return PingOutcome::Error {
                message: format!("Error while executing '{command}': {}", raw.trim()),
            };
        }
        if line.contains("packets transmitted") && line.contains("packets received") {
            summary = parse_summary(line);
        } else if line.contains("icmp_seq") {
            if let Some(probe) = parse_probe(line) {
                results.push(probe);
            }
        } else if line.contains("round-trip") {
            aggregate = parse_aggregate(line);
        }
    }

    let rtts: Vec<f64> = results.iter().map(|r| r.rtt).collect();
    let (probes_sent, received) = summary.unwrap_or_else(|| {
        let n = u32::try_from(results.len()).unwrap_or(u32::MAX);
        (n, n)
    });
    let (rtt_min, rtt_avg, rtt_max) = aggregate.unwrap_or_else(|| probe_aggregate(&rtts));

    PingOutcome::Success(PingSuccess {
        probes_sent,
        packet_loss: probes_sent.saturating_sub(received),
        rtt_min,
        rtt_max,
        rtt_avg,
        rtt_stddev: population_stddev(&rtts),
        results,
    })
}

/// `5 packets transmitted, 4 packets received, 20% packet loss` → (5, 4).
fn parse_summary(line: &str) -> Option<(u32, u32)> {
    let mut parts = line.split(',');
    let sent = leading_number(parts.next()?)?;
    let received = leading_number(parts.next()?)?;
    Some((sent, received))
}

fn leading_number(text: &str) -> Option<u32> {
    text.split_whitespace().next()?.parse().ok()
}

/// `Reply From 10.0.0.1: icmp_seq = 0. time= 72000 usec.`
fn parse_probe(line: &str) -> Option<ProbeResult> {
    let ip_address = line
        .split_once("From ")
        .and_then(|(_, rest)| rest.split(|c: char| c == ':' || c.is_whitespace()).next())
        .unwrap_or_default()
        .to_owned();
    let (_, after) = line.split_once("time=")?;
    let usec: f64 = after
        .trim_start()
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .next()?
        .parse()
        .ok()?;
    Some(ProbeResult {
        ip_address,
        rtt: usec / 1000.0,
    })
}

/// `round-trip (msec)  min/avg/max = 72/72/72` → (min, avg, max).
fn parse_aggregate(line: &str) -> Option<(f64, f64, f64)> {
    let (_, values) = line.split_once('=')?;
    let mut fields = values.trim().split('/').map(parse_rtt);
    Some((fields.next()?, fields.next()?, fields.next()?))
}

fn parse_rtt(text: &str) -> f64 {
    let text = text.trim();
    if text == BELOW_RESOLUTION {
        0.0
    } else {
        text.parse().unwrap_or(0.0)
    }
}

fn probe_aggregate(rtts: &[f64]) -> (f64, f64, f64) {
    if rtts.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let min = rtts.iter().copied().fold(f64::INFINITY, f64::min);
    let max = rtts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, mean(rtts), max)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / sample_count(values)
}

fn sample_count(values: &[f64]) -> f64 {
    f64::from(u32::try_from(values.len()).unwrap_or(u32::MAX))
}

/// Population standard deviation rounded to microseconds; `0.0` for fewer
/// than two samples.
fn population_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / sample_count(values);
    (variance.sqrt() * 1000.0).round() / 1000.0
}
