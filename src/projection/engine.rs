//! Compound growth projection with fixed monthly contributions

use serde::{Deserialize, Serialize};

use super::cashflows::{ProjectionResult, YearPoint};
use super::state::ProjectionState;
use crate::money::round_cents;

/// When in each month the contribution lands relative to growth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContributionTiming {
    /// Growth first, then the contribution (ordinary annuity)
    #[default]
    EndOfMonth,
    /// Contribution first, then growth (annuity due)
    StartOfMonth,
}

/// Length of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Horizon {
    Years(i32),
    Ages { current: u32, target: u32 },
}

impl Horizon {
    /// Whole years to project, `None` when the horizon is not positive
    pub fn years(&self) -> Option<u32> {
        match *self {
            Horizon::Years(years) if years > 0 => Some(years as u32),
            Horizon::Ages { current, target } if target > current => Some(target - current),
            _ => None,
        }
    }
}

/// Projection parameters, assumed validated by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub principal: f64,
    pub monthly_contribution: f64,
    /// Annual return in percent, e.g. 7.0 for 7%
    pub annual_rate_percent: f64,
    pub horizon: Horizon,
}

impl ProjectionInput {
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Months to project; `u64` so any positive year count fits
    pub fn total_months(&self) -> Option<u64> {
        self.horizon.years().map(|years| u64::from(years) * 12)
    }
}

/// Projection configuration
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    pub timing: ContributionTiming,
}

/// Projects a balance forward under monthly compounding
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Closed-form future value, rounded to cents
    ///
    /// `None` when the horizon is not positive.
    pub fn final_value(&self, input: &ProjectionInput) -> Option<f64> {
        let months = match input.total_months() {
            Some(m) => m,
            None => {
                log::debug!("no projection for horizon {:?}", input.horizon);
                return None;
            }
        };
        Some(round_cents(self.closed_form(input, months)))
    }

    fn closed_form(&self, input: &ProjectionInput, months: u64) -> f64 {
        let rate = input.monthly_rate();
        let n = months as f64;

        if rate == 0.0 {
            return input.principal + input.monthly_contribution * n;
        }

        // (1 + r)^n - 1 without cancellation, so tiny rates keep the contributions
        let growth_m1 = (n * rate.ln_1p()).exp_m1();
        let mut annuity = input.monthly_contribution * (growth_m1 / rate);
        if self.config.timing == ContributionTiming::StartOfMonth {
            annuity *= 1.0 + rate;
        }
        input.principal * (growth_m1 + 1.0) + annuity
    }

    /// Month-by-month projection with a checkpoint at every year end
    ///
    /// `None` when the horizon is not positive.
    pub fn project(&self, input: &ProjectionInput) -> Option<ProjectionResult> {
        let months = match input.total_months() {
            Some(m) => m,
            None => {
                log::debug!("no projection for horizon {:?}", input.horizon);
                return None;
            }
        };
        let rate = input.monthly_rate();
        let mut state = ProjectionState::new(input.principal);
        let mut points = Vec::new();

        for _ in 0..months {
            state.step(rate, input.monthly_contribution, self.config.timing);
            if state.is_year_end() {
                points.push(YearPoint {
                    year: (state.month / 12) as u32,
                    balance: round_cents(state.balance),
                    contributed: round_cents(state.contributed),
                    growth: round_cents(state.growth()),
                });
            }
        }

        Some(ProjectionResult {
            final_value: round_cents(state.balance),
            total_contributions: round_cents(state.contributed),
            total_growth: round_cents(state.growth()),
            points,
        })
    }
}
