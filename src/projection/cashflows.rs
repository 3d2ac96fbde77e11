//! Reported projection output

use serde::{Deserialize, Serialize};

/// Balances at the end of one projection year, rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearPoint {
    /// 1-based year index
    pub year: u32,
    pub balance: f64,
    /// Cumulative contributions to date
    pub contributed: f64,
    /// Cumulative growth to date
    pub growth: f64,
}

/// Result of a projection over the full horizon, rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub final_value: f64,
    pub total_contributions: f64,
    pub total_growth: f64,
    pub points: Vec<YearPoint>,
}

impl ProjectionResult {
    pub fn years(&self) -> usize {
        self.points.len()
    }
}
