//! Projection engine for savings growth under monthly compounding

mod state;
mod engine;
mod cashflows;
mod scenarios;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig, ProjectionInput, ContributionTiming, Horizon};
pub use cashflows::{YearPoint, ProjectionResult};
pub use scenarios::{rate_sweep, rate_range};

// ============================================================================
// Default Projection Settings
// ============================================================================
// Used when a plan is created or a settings field is missing from a file.

/// Default monthly contribution
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 500.0;

/// Default annual return in percent
pub const DEFAULT_ANNUAL_ROI: f64 = 7.0;

/// Default age of the plan owner
pub const DEFAULT_CURRENT_AGE: u32 = 25;

/// Default age the projection runs to
pub const DEFAULT_TARGET_AGE: u32 = 65;
