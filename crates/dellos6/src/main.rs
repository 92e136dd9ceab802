mod channel;
mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dellos6_core::Driver;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Profile commands don't need a switch
        Command::Profile(args) => commands::profile::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "dellos6", &mut std::io::stdout());
            Ok(())
        }

        // All other commands run against a switch
        cmd => {
            let cfg = dellos6_config::load_config()?;
            let channel = config::resolve_channel(&cli.global, &cfg)?;
            let templates = dellos6_config::load_templates(&cfg)?;
            let driver_config = dellos6_config::driver_config(&cfg)?;

            tracing::info!(switch = %channel.describe(), "opening channel");
            let mut driver = Driver::new(channel, Arc::new(templates), driver_config);

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &mut driver, &cli.global).await
        }
    }
}
