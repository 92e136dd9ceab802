//! Ping from the switch.

use dellos6_core::{PingOutcome, PingRequest};

use crate::cli::{GlobalOpts, PingArgs};
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

impl From<PingArgs> for PingRequest {
    fn from(args: PingArgs) -> Self {
        Self {
            destination: args.destination,
            source: args.source,
            vrf: args.vrf,
            count: args.count,
            timeout: args.wait,
            size: args.size,
        }
    }
}

fn detail(outcome: &PingOutcome) -> String {
    match outcome {
        PingOutcome::Success(s) => {
            let mut lines = vec![
                format!("{} sent, {} lost", s.probes_sent, s.packet_loss),
                format!(
                    "rtt min/avg/max/stddev = {:.3}/{:.3}/{:.3}/{:.3} ms",
                    s.rtt_min, s.rtt_avg, s.rtt_max, s.rtt_stddev
                ),
            ];
            for probe in &s.results {
                lines.push(format!("  {}  {:.3} ms", probe.ip_address, probe.rtt));
            }
            lines.join("\n")
        }
        PingOutcome::Error { message } => message.clone(),
    }
}

fn summary(outcome: &PingOutcome) -> String {
    match outcome {
        PingOutcome::Success(s) => format!("{:.3}", s.rtt_avg),
        PingOutcome::Error { message } => message.clone(),
    }
}

pub async fn handle(
    driver: &mut SwitchDriver,
    args: PingArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let request = PingRequest::from(args);
    let outcome = driver.ping(&request).await?;
    let out = output::render_single(&global.output, &outcome, detail, summary)?;
    output::print_output(&out, global.quiet);
    match outcome {
        PingOutcome::Success(_) => Ok(()),
        PingOutcome::Error { .. } => Err(CliError::PingFailed {
            destination: request.destination,
        }),
    }
}

#[cfg(test)]
mod tests {
    use dellos6_core::{PingSuccess, ProbeResult};

    use super::*;

    #[test]
    fn detail_lists_statistics_and_probes() {
        let outcome = PingOutcome::Success(PingSuccess {
            probes_sent: 2,
            packet_loss: 0,
            rtt_min: 1.0,
            rtt_max: 3.0,
            rtt_avg: 2.0,
            rtt_stddev: 1.0,
            results: vec![
                ProbeResult {
                    ip_address: "10.0.0.1".into(),
                    rtt: 1.0,
                },
                ProbeResult {
                    ip_address: "10.0.0.1".into(),
                    rtt: 3.0,
                },
            ],
        });
        let text = detail(&outcome);
        assert!(text.starts_with("2 sent, 0 lost\n"));
        assert!(text.contains("= 1.000/2.000/3.000/1.000 ms"));
        assert!(text.ends_with("10.0.0.1  3.000 ms"));
    }
}
