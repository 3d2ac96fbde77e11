//! Command-line front end for a budget plan file

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use budget_planner::ledger::{Category, Period};
use budget_planner::money::format_currency;
use budget_planner::plan::export_file_name;
use budget_planner::projection::{
    rate_range, rate_sweep, ContributionTiming, Horizon, ProjectionConfig, ProjectionEngine,
};
use budget_planner::{JsonFileStore, Plan, PlanStore};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "budget", about = "Monthly budget planner with rollover and projections")]
struct Cli {
    /// Plan file
    #[arg(long, global = true, env = "BUDGET_PLAN", default_value = "budget_plan.json")]
    plan: PathBuf,

    /// When monthly contributions are applied in projections
    #[arg(long, global = true, value_enum, default_value_t = Timing::End)]
    timing: Timing,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Timing {
    /// Growth, then contribution
    End,
    /// Contribution, then growth
    Start,
}

impl From<Timing> for ContributionTiming {
    fn from(t: Timing) -> Self {
        match t {
            Timing::End => ContributionTiming::EndOfMonth,
            Timing::Start => ContributionTiming::StartOfMonth,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new 12-month plan
    Init {
        /// First month, YYYY-MM (default: current month)
        #[arg(long)]
        start: Option<Period>,
        /// Overwrite an existing plan
        #[arg(long)]
        force: bool,
    },
    /// Set one category of one month
    Set {
        /// Month id, e.g. 2025-01
        id: String,
        /// income, expenses, savings or investments
        category: Category,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Set the notes of one month
    Note { id: String, notes: String },
    /// Print the month grid with rollovers
    Rollover,
    /// Project savings growth
    Project {
        /// Print a row per year
        #[arg(long)]
        yearly: bool,
        #[arg(long)]
        contribution: Option<f64>,
        /// Annual return in percent
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,
        /// Horizon in years instead of the age difference
        #[arg(long, allow_negative_numbers = true)]
        years: Option<i32>,
    },
    /// Final values across a range of annual rates
    Sweep {
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = 1.0)]
        step: f64,
    },
    /// Print plan totals
    Summary,
    /// Update projection settings
    Settings {
        #[arg(long)]
        contribution: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,
        #[arg(long)]
        current_age: Option<u32>,
        #[arg(long)]
        target_age: Option<u32>,
    },
    /// Replace the plan with a validated JSON file
    Import { file: PathBuf },
    /// Write the plan as JSON (default: dated file name)
    Export { file: Option<PathBuf> },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store = JsonFileStore::new(&cli.plan);
    let engine = ProjectionEngine::new(ProjectionConfig {
        timing: cli.timing.into(),
    });

    match cli.command {
        Command::Init { start, force } => {
            if store.exists() && !force {
                bail!("{} already exists; use --force to overwrite", store.path().display());
            }
            let mut plan = Plan::new(start.unwrap_or_else(Period::current));
            plan.recompute();
            store.save(&plan)?;
            println!("Created {} starting {}", store.path().display(), plan.months[0].period);
        }
        Command::Set { id, category, amount } => {
            let mut plan = load(&store)?;
            plan.update_month(&id, category, amount)?;
            store.save(&plan)?;
            print_grid(&plan);
        }
        Command::Note { id, notes } => {
            let mut plan = load(&store)?;
            plan.set_notes(&id, notes)?;
            store.save(&plan)?;
        }
        Command::Rollover => print_grid(&load(&store)?),
        Command::Project { yearly, contribution, rate, years } => {
            let plan = load(&store)?;
            let mut input = plan.projection_input();
            if let Some(c) = contribution {
                input.monthly_contribution = c;
            }
            if let Some(r) = rate {
                input.annual_rate_percent = r;
            }
            if let Some(y) = years {
                input.horizon = Horizon::Years(y);
            }

            println!("Starting balance:     {}", format_currency(input.principal));
            println!("Monthly contribution: {}", format_currency(input.monthly_contribution));
            println!("Annual return:        {:.2}%", input.annual_rate_percent);

            let Some(result) = engine.project(&input) else {
                println!("No projection: the horizon is not positive");
                return Ok(());
            };
            if yearly {
                println!("\n{:<6} {:>16} {:>16} {:>16}", "Year", "Balance", "Contributed", "Growth");
                for p in &result.points {
                    println!("{:<6} {:>16} {:>16} {:>16}",
                             p.year,
                             format_currency(p.balance),
                             format_currency(p.contributed),
                             format_currency(p.growth));
                }
            }
            println!("\nYears projected:      {}", result.years());
            println!("Projected value:      {}", format_currency(result.final_value));
            println!("Total contributions:  {}", format_currency(result.total_contributions));
            println!("Total growth:         {}", format_currency(result.total_growth));
        }
        Command::Sweep { from, to, step } => {
            let plan = load(&store)?;
            let rates = rate_range(from, to, step);
            if rates.is_empty() {
                bail!("empty rate range {}..{} step {}", from, to, step);
            }
            let inputs = rate_sweep(&plan.projection_input(), &rates);
            let results = engine.project_scenarios(&inputs);

            println!("{:<8} {:>18}", "Rate", "Projected");
            for (rate, result) in rates.iter().zip(results) {
                let value = result
                    .map(|r| format_currency(r.final_value))
                    .unwrap_or_else(|| "-".to_string());
                println!("{:<8.2} {:>18}", rate, value);
            }
        }
        Command::Summary => {
            let plan = load(&store)?;
            let s = plan.summary(&engine);
            println!("Total income:       {}", format_currency(s.total_income));
            println!("Total expenses:     {}", format_currency(s.total_expenses));
            println!("Total savings:      {}", format_currency(s.total_savings));
            println!("Total investments:  {}", format_currency(s.total_investments));
            println!("Net income:         {}", format_currency(s.net_income));
            println!("Savings rate:       {:.1}%", s.savings_rate_percent);
            println!("Final rollover:     {}", format_currency(s.final_rollover));
            match s.projected_value {
                Some(v) => println!(
                    "Projected at {}:    {}",
                    plan.projection_settings.target_age,
                    format_currency(v)
                ),
                None => println!("Projected value:    -"),
            }
        }
        Command::Settings { contribution, rate, current_age, target_age } => {
            let mut plan = load(&store)?;
            let settings = &mut plan.projection_settings;
            if let Some(c) = contribution {
                settings.monthly_contribution = c;
            }
            if let Some(r) = rate {
                settings.annual_roi = r;
            }
            if let Some(a) = current_age {
                settings.current_age = a;
            }
            if let Some(a) = target_age {
                settings.target_age = a;
            }
            println!("{:#?}", settings);
            store.save(&plan)?;
        }
        Command::Import { file } => {
            let plan = Plan::read_json_file(&file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            store.save(&plan)?;
            println!("Imported {} months from {}", plan.months.len(), file.display());
        }
        Command::Export { file } => {
            let plan = load(&store)?;
            let file = file.unwrap_or_else(|| {
                PathBuf::from(export_file_name(chrono::Local::now().date_naive()))
            });
            plan.write_json_file(&file)?;
            println!("Exported to {}", file.display());
        }
    }

    Ok(())
}

fn load(store: &JsonFileStore) -> Result<Plan> {
    match store.load()? {
        Some(plan) => Ok(plan),
        None => bail!(
            "no usable plan at {}; run `budget init` first",
            store.path().display()
        ),
    }
}

fn print_grid(plan: &Plan) {
    println!("{:<10} {:>12} {:>12} {:>12} {:>12} {:>14} {:>14}",
             "Month", "Income", "Expenses", "Savings", "Invest", "Rollover", "Remaining");
    for m in &plan.months {
        let t = m.totals();
        println!("{:<10} {:>12} {:>12} {:>12} {:>12} {:>14} {:>14}",
                 m.id,
                 format_currency(t.income),
                 format_currency(t.expenses),
                 format_currency(t.savings),
                 format_currency(t.investments),
                 format_currency(m.rollover_from_previous),
                 format_currency(m.remaining_funds));
    }
}
