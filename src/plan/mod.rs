//! A user's budget plan: 12-month grid, profile and projection settings
//!
//! The plan is the caller that owns data and drives the engines. Every edit
//! recomputes the whole month sequence because later rollovers depend on
//! earlier remainders.

mod settings;
mod summary;
pub mod io;

pub use settings::{ProjectionSettings, UserProfile};
pub use summary::PlanSummary;
pub use io::export_file_name;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::ledger::{initial_year, sort_by_period, Category, CategoryTotals, MonthRecord, Period};
use crate::projection::ProjectionInput;
use crate::rollover::RolloverEngine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub user: UserProfile,
    pub months: Vec<MonthRecord>,
    pub projection_settings: ProjectionSettings,
}

impl Plan {
    /// Default plan with 12 empty months beginning at `start`
    pub fn new(start: Period) -> Self {
        Self {
            user: UserProfile::default(),
            months: initial_year(start),
            projection_settings: ProjectionSettings::default(),
        }
    }

    /// Sort months by period and refresh every rollover and remainder
    pub fn recompute(&mut self) {
        sort_by_period(&mut self.months);
        RolloverEngine::new().recompute_in_place(&mut self.months);
    }

    pub fn month(&self, id: &str) -> Option<&MonthRecord> {
        self.months.iter().find(|m| m.id == id)
    }

    fn month_mut(&mut self, id: &str) -> Result<&mut MonthRecord> {
        self.months
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| PlannerError::MonthNotFound(id.to_string()))
    }

    /// Set one category of one month, then recompute the sequence
    pub fn update_month(&mut self, id: &str, category: Category, amount: f64) -> Result<()> {
        self.month_mut(id)?.set_category(category, amount);
        self.recompute();
        Ok(())
    }

    pub fn set_notes(&mut self, id: &str, notes: impl Into<String>) -> Result<()> {
        self.month_mut(id)?.notes = notes.into();
        Ok(())
    }

    /// Category totals across all months
    pub fn totals(&self) -> CategoryTotals {
        self.months
            .iter()
            .map(MonthRecord::totals)
            .fold(CategoryTotals::default(), |acc, t| acc + t)
    }

    /// Principal for the projection: everything put into savings and investments
    pub fn total_savings_and_investments(&self) -> f64 {
        let totals = self.totals();
        totals.savings + totals.investments
    }

    pub fn projection_input(&self) -> ProjectionInput {
        let settings = &self.projection_settings;
        ProjectionInput {
            principal: self.total_savings_and_investments(),
            monthly_contribution: settings.monthly_contribution,
            annual_rate_percent: settings.annual_roi,
            horizon: settings.horizon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Plan {
        Plan::new(Period::new(2025, 1).unwrap())
    }

    #[test]
    fn test_new_plan() {
        let plan = plan();
        assert_eq!(plan.months.len(), 12);
        assert_eq!(plan.projection_settings, ProjectionSettings::default());
        assert_eq!(plan.total_savings_and_investments(), 0.0);
    }

    #[test]
    fn test_update_month_recomputes_downstream() {
        let mut plan = plan();
        plan.update_month("2025-01", Category::Income, 1000.0).unwrap();
        plan.update_month("2025-01", Category::Expenses, 800.0).unwrap();
        plan.update_month("2025-03", Category::Expenses, 50.0).unwrap();

        assert_eq!(plan.months[0].remaining_funds, 200.0);
        assert_eq!(plan.months[1].rollover_from_previous, 200.0);
        assert_eq!(plan.months[2].remaining_funds, 150.0);
        assert_eq!(plan.months[11].remaining_funds, 150.0);
    }

    #[test]
    fn test_update_unknown_month() {
        let mut plan = plan();
        let err = plan.update_month("1999-01", Category::Income, 1.0).unwrap_err();
        assert!(matches!(err, PlannerError::MonthNotFound(_)));
    }

    #[test]
    fn test_recompute_sorts_months() {
        let mut plan = plan();
        plan.months.reverse();
        plan.months[0].set_category(Category::Income, 100.0); // 2025-12
        plan.recompute();

        assert_eq!(plan.months[0].id, "2025-01");
        assert_eq!(plan.months[11].remaining_funds, 100.0);
        assert_eq!(plan.months[10].remaining_funds, 0.0);
    }

    #[test]
    fn test_projection_input_from_plan() {
        let mut plan = plan();
        plan.update_month("2025-01", Category::Savings, 300.0).unwrap();
        plan.update_month("2025-02", Category::Investments, 200.0).unwrap();
        plan.projection_settings.current_age = 30;
        plan.projection_settings.target_age = 40;

        let input = plan.projection_input();
        assert_eq!(input.principal, 500.0);
        assert_eq!(input.monthly_contribution, 500.0);
        assert_eq!(input.annual_rate_percent, 7.0);
        assert_eq!(input.horizon.years(), Some(10));
    }

    #[test]
    fn test_set_notes() {
        let mut plan = plan();
        plan.set_notes("2025-04", "tax refund").unwrap();
        assert_eq!(plan.month("2025-04").unwrap().notes, "tax refund");
    }
}
