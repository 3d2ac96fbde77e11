//! Rollover engine: carries each month's leftover (or deficit) into the next

mod engine;
pub mod report;

pub use engine::RolloverEngine;
pub use report::{RolloverRow, rollover_rows, write_rollover_csv};
