use anyhow::Context;
use colored::Colorize;
use fwl_ledger::LedgerService;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let ledger = LedgerService::new(cli.ledger);
    match cli.command {
        Command::Append(args) => cmd_append(&ledger, args),
        Command::LogEvent(args) => cmd_log_event(&ledger, args),
        Command::Log(args) => cmd_log(&ledger, args),
        Command::Last => cmd_last(&ledger),
        Command::Verify => cmd_verify(&ledger),
        Command::Reset(args) => cmd_reset(&ledger, args),
    }
}

fn parse_payload(raw: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw).context("payload is not valid JSON")
}

fn cmd_append(ledger: &LedgerService, args: AppendArgs) -> anyhow::Result<()> {
    let block = ledger.append(parse_payload(&args.payload)?, args.difficulty)?;
    println!("{} Appended block #{}", "✓".green().bold(), block.index);
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

fn cmd_log_event(ledger: &LedgerService, args: LogEventArgs) -> anyhow::Result<()> {
    let block = ledger.log_event(parse_payload(&args.event)?)?;
    println!(
        "{} Logged firewall event in block #{}",
        "✓".green().bold(),
        block.index
    );
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

fn cmd_log(ledger: &LedgerService, args: LogArgs) -> anyhow::Result<()> {
    let chain = ledger.get_chain()?;
    let skip = match args.limit {
        Some(limit) => chain.len().saturating_sub(limit),
        None => 0,
    };
    println!("{}", serde_json::to_string_pretty(&chain[skip..])?);
    Ok(())
}

fn cmd_last(ledger: &LedgerService) -> anyhow::Result<()> {
    let block = ledger.get_last_block()?;
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

fn cmd_verify(ledger: &LedgerService) -> anyhow::Result<()> {
    let report = ledger.verify_chain()?;
    if report.valid {
        let blocks = ledger.get_chain()?.len();
        println!("{} Chain valid ({blocks} blocks)", "✓".green().bold());
        Ok(())
    } else {
        let reason = report.reason().unwrap_or_else(|| "unknown".to_string());
        anyhow::bail!("chain invalid: {reason}");
    }
}

fn cmd_reset(ledger: &LedgerService, args: ResetArgs) -> anyhow::Result<()> {
    if !args.yes {
        anyhow::bail!("refusing to reset the ledger without --yes (dev/test only; this discards all history)");
    }
    ledger.reset_to_genesis()?;
    println!("{} Ledger reset to genesis", "✓".green().bold());
    Ok(())
}
