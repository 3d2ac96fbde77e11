//! Month records, tagged entries and CSV loading

mod data;
pub mod loader;
pub mod generator;

pub use data::{Period, Category, EntryKind, Entry, CategoryTotals, MonthRecord, sort_by_period, check_unique};
pub use loader::{load_months, load_months_from_reader};
pub use generator::{initial_months, initial_year, PLAN_MONTHS};
