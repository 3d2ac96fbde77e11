//! Error types for the planner library
//!
//! The rollover and projection engines never fail. Errors only come from the
//! boundary: file I/O, CSV and JSON parsing, and plan validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// Imported or stored data failed structural validation
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("month not found: {0}")]
    MonthNotFound(String),

    #[error("invalid period '{0}', expected YYYY-MM")]
    InvalidPeriod(String),

    #[error("unknown category '{0}', expected income, expenses, savings or investments")]
    UnknownCategory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
