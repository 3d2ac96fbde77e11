//! Batches of independent projections for sensitivity tables

use rayon::prelude::*;

use super::cashflows::ProjectionResult;
use super::engine::{ProjectionEngine, ProjectionInput};

impl ProjectionEngine {
    /// Run every input in parallel; output order follows input order
    pub fn project_scenarios(&self, inputs: &[ProjectionInput]) -> Vec<Option<ProjectionResult>> {
        inputs.par_iter().map(|input| self.project(input)).collect()
    }
}

/// Copies of `base` that differ only in annual rate
pub fn rate_sweep(base: &ProjectionInput, rates: &[f64]) -> Vec<ProjectionInput> {
    rates
        .iter()
        .map(|&rate| ProjectionInput {
            annual_rate_percent: rate,
            ..*base
        })
        .collect()
}

/// Evenly spaced rates from `from` to `to` inclusive
///
/// Empty when `step` is not positive or `to < from`.
pub fn rate_range(from: f64, to: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || to < from {
        return Vec::new();
    }
    // Small tolerance keeps `to` when (to - from) / step is just under an integer
    let count = ((to - from) / step + 1e-9).floor() as usize + 1;
    (0..count).map(|i| from + step * i as f64).collect()
}
