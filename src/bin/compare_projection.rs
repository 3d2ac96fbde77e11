//! Compare the closed-form annuity value with month-by-month accumulation
//! Test case: principal=0, contribution=500/month, 7% annual, 10 years

use budget_planner::projection::{
    ContributionTiming, Horizon, ProjectionConfig, ProjectionEngine, ProjectionInput,
};

fn main() {
    env_logger::init();

    for timing in [ContributionTiming::EndOfMonth, ContributionTiming::StartOfMonth] {
        let engine = ProjectionEngine::new(ProjectionConfig { timing });

        println!("Closed form vs iterative ({:?})", engine.config().timing);
        println!("{:<6} {:<14} {:<14} {:<10}", "Year", "Closed", "Iterative", "Diff");

        for years in 1..=10 {
            let input = ProjectionInput {
                principal: 0.0,
                monthly_contribution: 500.0,
                annual_rate_percent: 7.0,
                horizon: Horizon::Years(years),
            };
            let (Some(closed), Some(result)) = (engine.final_value(&input), engine.project(&input))
            else {
                continue;
            };
            let iterative = result.final_value;

            println!("{:<6} {:<14.2} {:<14.2} {:<10.2}",
                     years, closed, iterative, closed - iterative);
        }
        println!();
    }
}
