//! Running state for month-by-month accumulation

use super::engine::ContributionTiming;

/// Full-precision balance carried between projection months
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months elapsed
    pub month: u64,
    pub principal: f64,
    pub balance: f64,
    /// Cumulative contributions, principal excluded
    pub contributed: f64,
}

impl ProjectionState {
    pub fn new(principal: f64) -> Self {
        Self {
            month: 0,
            principal,
            balance: principal,
            contributed: 0.0,
        }
    }

    /// Advance one month of growth plus one contribution
    pub fn step(&mut self, monthly_rate: f64, contribution: f64, timing: ContributionTiming) {
        self.balance = match timing {
            ContributionTiming::EndOfMonth => self.balance * (1.0 + monthly_rate) + contribution,
            ContributionTiming::StartOfMonth => (self.balance + contribution) * (1.0 + monthly_rate),
        };
        self.contributed += contribution;
        self.month += 1;
    }

    /// Balance gained beyond principal and contributions
    pub fn growth(&self) -> f64 {
        self.balance - self.principal - self.contributed
    }

    pub fn is_year_end(&self) -> bool {
        self.month > 0 && self.month % 12 == 0
    }
}
