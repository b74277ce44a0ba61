//! Interest Calculator CLI
//!
//! Loads a holdings CSV and prints interest owed per person, wallet and card

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use interest_calculator::{BatchRunner, Calculator, ReportConfig};
use interest_calculator::holdings::load_holdings;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Compute simple interest owed across people, wallets and cards
#[derive(Debug, Parser)]
#[command(name = "interest-calculator", version)]
struct Args {
    /// Holdings CSV with columns person,wallet,card,balance
    holdings: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Decimal places shown in text output
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Only print wallet and person totals
    #[arg(long)]
    totals_only: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let people = load_holdings(&args.holdings)
        .with_context(|| format!("failed to load holdings from {}", args.holdings.display()))?;
    log::info!("Loaded {} people from {}", people.len(), args.holdings.display());

    let runner = BatchRunner::new(Calculator::new());
    let breakdowns = runner
        .run_breakdowns(&people)
        .context("failed to compute interest breakdowns")?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&breakdowns)
                .context("failed to serialize breakdowns")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let config = ReportConfig {
                display_scale: args.scale,
                include_cards: !args.totals_only,
            };
            for breakdown in &breakdowns {
                print!("{}", breakdown.render(&config));
            }
            let total = runner
                .grand_total(&people)
                .context("failed to compute total interest")?;
            println!("Total: {}", total.round_dp(args.scale));
        }
    }

    Ok(())
}
