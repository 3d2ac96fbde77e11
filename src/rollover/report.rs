//! Per-month rollover rows and CSV output

use std::io::Write;

use serde::Serialize;

use crate::ledger::{MonthRecord, Period};
use crate::error::Result;
use crate::money::round_cents;

/// One month of a rollover report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolloverRow {
    pub period: Period,
    /// This month's income minus all of its outflows
    pub leftover: f64,
    /// Running balance after this month
    pub rollover: f64,
}

/// Leftover and running balance per month, from already recomputed records
pub fn rollover_rows(records: &[MonthRecord]) -> Vec<RolloverRow> {
    records
        .iter()
        .map(|r| RolloverRow {
            period: r.period,
            leftover: r.net_flow(),
            rollover: r.remaining_funds,
        })
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CsvOutRow {
    period: String,
    income: f64,
    expenses: f64,
    savings: f64,
    investments: f64,
    rollover: f64,
    remaining: f64,
}

/// Write recomputed months as CSV, money rounded to cents
pub fn write_rollover_csv<W: Write>(writer: W, records: &[MonthRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        let totals = r.totals();
        wtr.serialize(CsvOutRow {
            period: r.period.to_string(),
            income: round_cents(totals.income),
            expenses: round_cents(totals.expenses),
            savings: round_cents(totals.savings),
            investments: round_cents(totals.investments),
            rollover: round_cents(r.rollover_from_previous),
            remaining: round_cents(r.remaining_funds),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
