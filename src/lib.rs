//! Monthly budget planner
//!
//! Two pure engines sit at the core:
//! - [`RolloverEngine`] folds an ordered month sequence into carried-forward
//!   balances, so each month's leftover (or deficit) becomes part of the next
//!   month's available funds.
//! - [`ProjectionEngine`] grows a savings balance under monthly compounding
//!   with a fixed monthly contribution.
//!
//! [`Plan`] owns the data and drives both; [`store`] persists plans.

pub mod error;
pub mod ledger;
pub mod money;
pub mod plan;
pub mod projection;
pub mod rollover;
pub mod store;

pub use error::{PlannerError, Result};
pub use ledger::{Category, Entry, MonthRecord, Period};
pub use plan::{Plan, PlanSummary, ProjectionSettings, UserProfile};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionInput, ProjectionResult};
pub use rollover::RolloverEngine;
pub use store::{JsonFileStore, MemoryStore, PlanStore};
