//! Running-balance fold over an ordered month sequence

use crate::ledger::MonthRecord;

/// Recomputes carried-forward balances for a month sequence
///
/// Stateless: every call folds the whole sequence from a zero balance, so
/// an edit to any month is reflected in every month after it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RolloverEngine;

impl RolloverEngine {
    pub fn new() -> Self {
        Self
    }

    /// Return a copy of `records` with rollover and remaining funds filled in
    ///
    /// Folds in the order given; sort by period first. Negative balances are
    /// carried forward like surpluses.
    pub fn recompute(&self, records: &[MonthRecord]) -> Vec<MonthRecord> {
        let mut out = records.to_vec();
        self.recompute_in_place(&mut out);
        out
    }

    /// Same fold, writing the derived fields into `records`
    pub fn recompute_in_place(&self, records: &mut [MonthRecord]) {
        let mut balance = 0.0;
        for record in records.iter_mut() {
            record.rollover_from_previous = balance;
            balance = record.total_income() + balance - record.total_expense();
            record.remaining_funds = balance;
        }
    }

    /// Remaining funds of the last month, 0 for an empty sequence
    pub fn final_balance(&self, records: &[MonthRecord]) -> f64 {
        records
            .iter()
            .fold(0.0, |balance, r| r.total_income() + balance - r.total_expense())
    }
}
