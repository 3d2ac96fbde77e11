//! JSON import and export
//!
//! Import is the only place plan data is validated. Anything that gets past
//! here is handed to the engines as-is.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use super::Plan;
use crate::error::{PlannerError, Result};
use crate::ledger::check_unique;

/// Default export file name for a given day
pub fn export_file_name(date: NaiveDate) -> String {
    format!("financial-planner-data-{}.json", date.format("%Y-%m-%d"))
}

impl Plan {
    /// Parse, validate and recompute a plan
    ///
    /// Stored rollover and remainder values are never trusted; they are
    /// rebuilt from the month entries.
    pub fn from_json(json: &str) -> Result<Plan> {
        let mut plan: Plan =
            serde_json::from_str(json).map_err(|e| PlannerError::InvalidData(e.to_string()))?;
        plan.validate()?;
        plan.recompute();
        Ok(plan)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<Plan> {
        let path = path.as_ref();
        log::debug!("importing plan from {}", path.display());
        let json = fs::read_to_string(path)?;
        Plan::from_json(&json)
    }

    pub fn write_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("exporting plan to {}", path.display());
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Checks that serde alone cannot express
    pub fn validate(&self) -> Result<()> {
        if self.months.is_empty() {
            return Err(PlannerError::InvalidData("plan has no months".to_string()));
        }

        check_unique(&self.months)?;

        let settings = &self.projection_settings;
        if !settings.monthly_contribution.is_finite() || !settings.annual_roi.is_finite() {
            return Err(PlannerError::InvalidData(
                "projection settings contain a non-finite number".to_string(),
            ));
        }
        if !self.user.current_net_worth.is_finite() {
            return Err(PlannerError::InvalidData(
                "user net worth is not a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, Entry, Period};
    use crate::rollover::RolloverEngine;

    fn sample_plan() -> Plan {
        let mut plan = Plan::new(Period::new(2025, 1).unwrap());
        plan.user.email = "someone@example.com".to_string();
        plan.update_month("2025-01", Category::Income, 1000.0).unwrap();
        plan.update_month("2025-01", Category::Expenses, 1250.5).unwrap();
        plan.update_month("2025-02", Category::Income, 2000.0).unwrap();
        plan.update_month("2025-02", Category::Savings, 300.25).unwrap();
        plan.months[2].add_entry(Entry::income(75.0, "refund"));
        plan.months[2].add_entry(Entry::expense(20.0, "parking"));
        plan.set_notes("2025-02", "bonus month").unwrap();
        plan.recompute();
        plan
    }

    fn remaining(plan: &Plan) -> Vec<f64> {
        plan.months.iter().map(|m| m.remaining_funds).collect()
    }

    #[test]
    fn test_round_trip_preserves_remaining_funds() {
        let plan = sample_plan();
        let json = plan.to_json().unwrap();
        let mut back = Plan::from_json(&json).unwrap();

        assert_eq!(remaining(&back), remaining(&plan));
        assert_eq!(back, plan);

        RolloverEngine::new().recompute_in_place(&mut back.months);
        assert_eq!(remaining(&back), remaining(&plan));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_file_name(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
        let plan = sample_plan();

        plan.write_json_file(&path).unwrap();
        let back = Plan::read_json_file(&path).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_import_recomputes_stale_values() {
        let json = r#"{
            "user": {"email": "", "age": 30, "currentNetWorth": 0},
            "months": [
                {"id": "b", "year": 2025, "month": 2, "income": 500, "expenses": 0,
                 "savings": 0, "investments": 0, "notes": "",
                 "rolloverFromPrevious": 0, "remainingFunds": 0},
                {"id": "a", "year": 2025, "month": 1, "income": 100, "expenses": 300,
                 "savings": 0, "investments": 0, "notes": "",
                 "rolloverFromPrevious": 42, "remainingFunds": 42}
            ],
            "projectionSettings": {"monthlyContribution": 100, "annualROI": 5,
                                   "currentAge": 30, "targetAge": 60}
        }"#;
        let plan = Plan::from_json(json).unwrap();

        assert_eq!(plan.months[0].id, "a");
        assert_eq!(plan.months[0].remaining_funds, -200.0);
        assert_eq!(plan.months[1].rollover_from_previous, -200.0);
        assert_eq!(plan.months[1].remaining_funds, 300.0);
    }

    #[test]
    fn test_import_tagged_entries_win() {
        let json = r#"{
            "user": {"email": "", "age": 30, "currentNetWorth": 0},
            "months": [
                {"id": "2025-01", "year": 2025, "month": 1, "income": 9999, "expenses": 0,
                 "savings": 0, "investments": 0,
                 "entries": [{"category": "income", "amount": 50, "label": "gift"},
                             {"category": "expense", "amount": 20}]}
            ],
            "projectionSettings": {"monthlyContribution": 100, "annualROI": 5, "currentAge": 30, "targetAge": 60}
        }"#;
        let plan = Plan::from_json(json).unwrap();
        assert_eq!(plan.months[0].income(), 50.0);
        assert_eq!(plan.months[0].remaining_funds, 30.0);
    }

    const USER: &str = r#""user": {"email": "", "age": 30, "currentNetWorth": 0}"#;
    const SETTINGS: &str = r#""projectionSettings": {"monthlyContribution": 100, "annualROI": 5,
                                   "currentAge": 30, "targetAge": 60}"#;

    fn assert_invalid(json: &str) {
        match Plan::from_json(json) {
            Err(PlannerError::InvalidData(_)) => {}
            other => panic!("expected invalid data, got {:?}", other),
        }
    }

    #[test]
    fn test_import_rejects_malformed() {
        assert_invalid("not json");
        assert_invalid(&format!(r#"{{"months": [], {}}}"#, SETTINGS));
        assert_invalid(&format!(r#"{{{}, "months": [], {}}}"#, USER, SETTINGS));
        // wrong type
        assert_invalid(
            r#"{"user": {"email": "", "age": 30, "currentNetWorth": 0},
               "projectionSettings": {"monthlyContribution": 100, "annualROI": 5, "currentAge": 30, "targetAge": 60},
               "months": [
                {"id": "x", "year": 2025, "month": 1, "income": "lots", "expenses": 0,
                 "savings": 0, "investments": 0}]}"#,
        );
        // missing field
        assert_invalid(
            r#"{"user": {"email": "", "age": 30, "currentNetWorth": 0},
               "projectionSettings": {"monthlyContribution": 100, "annualROI": 5, "currentAge": 30, "targetAge": 60},
               "months": [
                {"id": "x", "year": 2025, "month": 1, "income": 1, "savings": 0, "investments": 0}]}"#,
        );
        // month out of range
        assert_invalid(
            r#"{"user": {"email": "", "age": 30, "currentNetWorth": 0},
               "projectionSettings": {"monthlyContribution": 100, "annualROI": 5, "currentAge": 30, "targetAge": 60},
               "months": [
                {"id": "x", "year": 2025, "month": 0, "income": 1, "expenses": 0,
                 "savings": 0, "investments": 0}]}"#,
        );
    }

    #[test]
    fn test_import_requires_profile_and_settings_fields() {
        let full = serde_json::json!({
            "user": {"email": "someone@example.com", "age": 40, "currentNetWorth": 1500},
            "months": [
                {"id": "2025-01", "year": 2025, "month": 1, "income": 100, "expenses": 0,
                 "savings": 0, "investments": 0}
            ],
            "projectionSettings": {"monthlyContribution": 200, "annualROI": 6,
                                   "currentAge": 40, "targetAge": 67}
        });
        assert!(Plan::from_json(&full.to_string()).is_ok());

        let required = [
            ("user", "email"),
            ("user", "age"),
            ("user", "currentNetWorth"),
            ("projectionSettings", "monthlyContribution"),
            ("projectionSettings", "annualROI"),
            ("projectionSettings", "currentAge"),
            ("projectionSettings", "targetAge"),
        ];
        for (section, field) in required {
            let mut doc = full.clone();
            doc[section].as_object_mut().unwrap().remove(field);
            assert_invalid(&doc.to_string());
        }
    }

    #[test]
    fn test_import_rejects_duplicates() {
        assert_invalid(
            r#"{"user": {"email": "", "age": 30, "currentNetWorth": 0},
               "projectionSettings": {"monthlyContribution": 100, "annualROI": 5, "currentAge": 30, "targetAge": 60},
               "months": [
                {"id": "x", "year": 2025, "month": 1, "income": 1, "expenses": 0, "savings": 0, "investments": 0},
                {"id": "x", "year": 2025, "month": 2, "income": 1, "expenses": 0, "savings": 0, "investments": 0}]}"#,
        );
        assert_invalid(
            r#"{"user": {"email": "", "age": 30, "currentNetWorth": 0},
               "projectionSettings": {"monthlyContribution": 100, "annualROI": 5, "currentAge": 30, "targetAge": 60},
               "months": [
                {"id": "x", "year": 2025, "month": 1, "income": 1, "expenses": 0, "savings": 0, "investments": 0},
                {"id": "y", "year": 2025, "month": 1, "income": 1, "expenses": 0, "savings": 0, "investments": 0}]}"#,
        );
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "financial-planner-data-2025-03-09.json");
    }
}
