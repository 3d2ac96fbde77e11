//! Load month records from CSV
//!
//! Expected headers: `year,month,income,expenses,savings,investments` with
//! optional `id` and `notes` columns. Rows come back sorted by period; a
//! repeated id or period is rejected.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{check_unique, sort_by_period, CategoryTotals, MonthRecord, Period};
use crate::error::{PlannerError, Result};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    year: i32,
    month: u8,
    income: f64,
    expenses: f64,
    savings: f64,
    investments: f64,
    #[serde(default)]
    notes: Option<String>,
}

/// Load months from a CSV file
pub fn load_months<P: AsRef<Path>>(path: P) -> Result<Vec<MonthRecord>> {
    let path = path.as_ref();
    log::debug!("loading months from {}", path.display());
    let file = File::open(path)?;
    load_months_from_reader(file)
}

/// Load months from any CSV reader
pub fn load_months_from_reader<R: Read>(reader: R) -> Result<Vec<MonthRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut months = Vec::new();
    for (line, result) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let period = Period::new(row.year, row.month).ok_or_else(|| {
            PlannerError::InvalidData(format!(
                "row {}: month {} outside 1-12",
                line + 1,
                row.month
            ))
        })?;
        let id = row
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| period.to_string());
        let totals = CategoryTotals {
            income: row.income,
            expenses: row.expenses,
            savings: row.savings,
            investments: row.investments,
        };

        let mut record = MonthRecord::from_totals(id, period, totals);
        record.notes = row.notes.unwrap_or_default();
        months.push(record);
    }

    if let Err(e) = check_unique(&months) {
        log::warn!("rejecting CSV months: {}", e);
        return Err(e);
    }
    sort_by_period(&mut months);
    log::debug!("loaded {} months", months.len());
    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sorts_and_defaults_ids() {
        let data = "\
year,month,income,expenses,savings,investments,notes
2025,2,1000,800,0,0,second
2025,1,1000,800,50,25,
";
        let months = load_months_from_reader(data.as_bytes()).expect("Failed to load");

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].id, "2025-01");
        assert_eq!(months[0].savings(), 50.0);
        assert_eq!(months[0].investments(), 25.0);
        assert_eq!(months[1].notes, "second");
    }

    #[test]
    fn test_load_with_explicit_ids() {
        let data = "\
id,year,month,income,expenses,savings,investments
jan,2025,1,10,5,0,0
";
        let months = load_months_from_reader(data.as_bytes()).expect("Failed to load");
        assert_eq!(months[0].id, "jan");
        assert!(months[0].notes.is_empty());
    }

    #[test]
    fn test_load_rejects_bad_month() {
        let data = "\
year,month,income,expenses,savings,investments
2025,0,10,5,0,0
";
        let err = load_months_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidData(_)));
    }

    #[test]
    fn test_load_rejects_duplicate_period() {
        let data = "\
year,month,income,expenses,savings,investments
2025,1,1000,0,0,0
2025,1,500,0,0,0
";
        let err = load_months_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidData(_)));
    }

    #[test]
    fn test_load_rejects_duplicate_id() {
        let data = "\
id,year,month,income,expenses,savings,investments
pay,2025,1,1000,0,0,0
pay,2025,2,500,0,0,0
";
        let err = load_months_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidData(_)));
    }

    #[test]
    fn test_load_rejects_non_numeric() {
        let data = "\
year,month,income,expenses,savings,investments
2025,1,lots,5,0,0
";
        let err = load_months_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::Csv(_)));
    }
}
