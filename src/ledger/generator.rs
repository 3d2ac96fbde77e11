//! Empty month sequences for new plans

use super::{MonthRecord, Period};

/// Months in a new plan
pub const PLAN_MONTHS: usize = 12;

/// Generate `count` consecutive empty months beginning at `start`
///
/// Each month is all zero with id `YYYY-MM`, so ids stay stable when the
/// sequence is recomputed or re-imported.
pub fn initial_months(start: Period, count: usize) -> Vec<MonthRecord> {
    std::iter::successors(Some(start), |p| Some(p.next()))
        .take(count)
        .map(MonthRecord::empty)
        .collect()
}

/// The standard 12-month grid starting at `start`
pub fn initial_year(start: Period) -> Vec<MonthRecord> {
    initial_months(start, PLAN_MONTHS)
}
