//! Run the rollover engine over a CSV of months
//!
//! Outputs one row per month with the carried-in rollover and remaining funds

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use budget_planner::ledger::load_months;
use budget_planner::money::format_currency;
use budget_planner::rollover::{rollover_rows, write_rollover_csv, RolloverEngine};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Recompute rollovers for a CSV of months")]
struct Args {
    /// Input CSV with year,month,income,expenses,savings,investments columns
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "rollover_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading months from {}...", args.input.display());

    let months = load_months(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    println!("Loaded {} months in {:?}", months.len(), start.elapsed());

    let engine = RolloverEngine::new();
    let months = engine.recompute(&months);

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_rollover_csv(file, &months).context("Failed to write output")?;
    println!("Output written to {}", args.output.display());

    let rows = rollover_rows(&months);
    let deficits = rows.iter().filter(|r| r.rollover < 0.0).count();

    println!("\nRollover Summary:");
    if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
        println!("  First month: {} leftover={}", first.period, format_currency(first.leftover));
        println!("  Last month:  {} balance={}", last.period, format_currency(last.rollover));
    }
    println!("  Months ending in deficit: {}", deficits);
    println!("  Final balance: {}", format_currency(engine.final_balance(&months)));

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
