//! Projection settings and user profile stored with a plan

use serde::{Deserialize, Serialize};

use crate::projection::{
    Horizon, DEFAULT_ANNUAL_ROI, DEFAULT_CURRENT_AGE, DEFAULT_MONTHLY_CONTRIBUTION,
    DEFAULT_TARGET_AGE,
};

/// Parameters for the savings projection
///
/// Every field is required in plan JSON; the defaults only seed new plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSettings {
    pub monthly_contribution: f64,

    /// Annual return in percent (7.0 = 7%)
    #[serde(rename = "annualROI")]
    pub annual_roi: f64,

    pub current_age: u32,
    pub target_age: u32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            monthly_contribution: DEFAULT_MONTHLY_CONTRIBUTION,
            annual_roi: DEFAULT_ANNUAL_ROI,
            current_age: DEFAULT_CURRENT_AGE,
            target_age: DEFAULT_TARGET_AGE,
        }
    }
}

impl ProjectionSettings {
    pub fn horizon(&self) -> Horizon {
        Horizon::Ages {
            current: self.current_age,
            target: self.target_age,
        }
    }
}

/// Owner of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub age: u32,
    pub current_net_worth: f64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            email: String::new(),
            age: DEFAULT_CURRENT_AGE,
            current_net_worth: 0.0,
        }
    }
}
