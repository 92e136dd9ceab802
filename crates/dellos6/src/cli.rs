//! Clap derive structures for the `dellos6` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dellos6 -- normalized facts from Dell Networking OS6 switches
#[derive(Debug, Parser)]
#[command(
    name = "dellos6",
    version,
    about = "Collect normalized facts from Dell Networking OS6 switches",
    long_about = "Runs show commands on a Dell Networking OS6 switch over ssh (or replays\n\
        saved captures) and prints the results as normalized, vendor-neutral records.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Switch profile to use
    #[arg(long, short = 'p', env = "DELLOS6_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Switch hostname or address (overrides profile)
    #[arg(long, short = 'H', env = "DELLOS6_HOST", global = true)]
    pub host: Option<String>,

    /// ssh login name
    #[arg(long, short = 'u', env = "DELLOS6_USER", global = true)]
    pub user: Option<String>,

    /// ssh port
    #[arg(long, env = "DELLOS6_PORT", global = true)]
    pub port: Option<u16>,

    /// ssh private key
    #[arg(long, short = 'i', global = true)]
    pub identity_file: Option<PathBuf>,

    /// Serve commands from captures in this directory instead of ssh
    #[arg(long, env = "DELLOS6_REPLAY", global = true, value_name = "DIR")]
    pub replay: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "DELLOS6_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Per-command timeout in seconds (overrides profile)
    #[arg(long, env = "DELLOS6_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Device identity: hostname, model, serial, OS version, uptime
    Facts,

    /// Interface state, speed, MTU and MAC
    #[command(alias = "intf")]
    Interfaces,

    /// Interface packet and error counters
    Counters,

    /// IPv4 and IPv6 addresses per interface
    Ip,

    /// Optical transceiver readings
    Optics,

    /// Temperatures, fans, power supplies, CPU and memory
    #[command(alias = "env")]
    Environment,

    /// LLDP neighbors
    Lldp(LldpArgs),

    /// ARP table
    Arp(ArpArgs),

    /// IPv6 neighbor table
    Ipv6Neighbors,

    /// MAC address table
    #[command(alias = "mac")]
    MacTable,

    /// BGP peers
    Bgp,

    /// SNMP contact, location and communities
    Snmp,

    /// Local user accounts
    Users,

    /// Routing instances (default plus VRFs)
    Instances(InstancesArgs),

    /// VLANs and their member ports
    Vlans,

    /// Running and startup configuration
    Config(ConfigArgs),

    /// Ping from the switch
    Ping(PingArgs),

    /// Inspect CLI configuration and profiles
    Profile(ProfileArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Per-command arguments ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LldpArgs {
    /// Full neighbor details (remote system, capabilities)
    #[arg(long, short = 'd')]
    pub detail: bool,

    /// Only this local interface (implies --detail)
    #[arg(long)]
    pub interface: Option<String>,
}

#[derive(Debug, Args)]
pub struct ArpArgs {
    /// Read the ARP table of this VRF
    #[arg(long)]
    pub vrf: Option<String>,
}

#[derive(Debug, Args)]
pub struct InstancesArgs {
    /// Only the named instance
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Retrieve {
    All,
    Running,
    Startup,
    Candidate,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Which configuration to retrieve
    #[arg(long, short = 'r', default_value = "all")]
    pub retrieve: Retrieve,

    /// Include default settings (`show running-config all`)
    #[arg(long)]
    pub full: bool,

    /// Mask secrets (passwords, keys, communities)
    #[arg(long, short = 's')]
    pub sanitized: bool,
}

#[derive(Debug, Args)]
pub struct PingArgs {
    /// Address or hostname to ping
    pub destination: String,

    /// Source interface or address
    #[arg(long)]
    pub source: Option<String>,

    /// VRF to ping in
    #[arg(long)]
    pub vrf: Option<String>,

    /// Number of probes
    #[arg(long, short = 'c', default_value = "5")]
    pub count: u32,

    /// Seconds to wait for each reply
    #[arg(long = "wait", short = 'w', default_value = "2")]
    pub wait: u32,

    /// Datagram size in bytes
    #[arg(long, short = 's', default_value = "100")]
    pub size: u32,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Print the config file location
    Path,

    /// List configured profiles
    List,

    /// Print the effective configuration as TOML
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
