use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fwl",
    about = "Firewall audit ledger — tamper-evident append-only event log",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path of the ledger file
    #[arg(long, global = true, default_value = "ledger.json")]
    pub ledger: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append an arbitrary JSON object payload
    Append(AppendArgs),
    /// Append a firewall event (tagged with type=firewall_event)
    LogEvent(LogEventArgs),
    /// Print the chain
    Log(LogArgs),
    /// Print the most recent block
    Last,
    /// Verify chain integrity (non-zero exit on a broken chain)
    Verify,
    /// DEV/TEST ONLY: reset the ledger to just the genesis block
    Reset(ResetArgs),
}

#[derive(Args)]
pub struct AppendArgs {
    /// JSON object payload, e.g. '{"action":"deny","source":"10.0.0.5"}'
    pub payload: String,

    /// Leading-zero proof-of-work difficulty (0 disables mining)
    #[arg(long, default_value_t = 0)]
    pub difficulty: u32,
}

#[derive(Args)]
pub struct LogEventArgs {
    /// JSON object describing the event
    pub event: String,
}

#[derive(Args)]
pub struct LogArgs {
    /// Print only the last N blocks
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Confirm the reset; the command refuses to run without it
    #[arg(long)]
    pub yes: bool,
}
