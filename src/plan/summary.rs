//! Headline figures for a plan

use serde::Serialize;

use super::Plan;
use crate::money::round_cents;
use crate::projection::ProjectionEngine;
use crate::rollover::RolloverEngine;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub total_investments: f64,
    /// Income minus expenses, before savings and investments
    pub net_income: f64,
    /// (savings + investments) / income, in percent
    pub savings_rate_percent: f64,
    /// Remaining funds at the end of the last month
    pub final_rollover: f64,
    /// `None` when the target age is not after the current age
    pub projected_value: Option<f64>,
}

impl Plan {
    pub fn summary(&self, engine: &ProjectionEngine) -> PlanSummary {
        let totals = self.totals();
        let savings_rate_percent = if totals.income > 0.0 {
            (totals.savings + totals.investments) / totals.income * 100.0
        } else {
            0.0
        };

        PlanSummary {
            total_income: round_cents(totals.income),
            total_expenses: round_cents(totals.expenses),
            total_savings: round_cents(totals.savings),
            total_investments: round_cents(totals.investments),
            net_income: round_cents(totals.income - totals.expenses),
            savings_rate_percent: (savings_rate_percent * 10.0).round() / 10.0,
            final_rollover: round_cents(RolloverEngine::new().final_balance(&self.months)),
            projected_value: engine.final_value(&self.projection_input()),
        }
    }
}
