//! # Navigation
//!
//! This module selects the path the vehicle should drive between two poses.
//!
//! - [`selector`] - merges the right and left CSC families and ranks all 16 candidates.
//! - [`PathPlanner`] - compiles the ranked candidates in turn and returns the first one whose
//!   simulated drive does not collide with any obstacle.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

mod params;
mod path_planner;
pub mod selector;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

pub use params::{PathPlannerParams, RankingStrategy};
pub use path_planner::{CandidateReport, PathPlanner, PlanReport, PlannedPath};

use crate::csc::CscError;
use crate::sim::SimError;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("Turning radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("None of the {num_tested} candidate paths can be driven without a collision")]
    NoValidPath { num_tested: usize },

    #[error("Could not simulate a candidate path: {0}")]
    InvalidSimulationInput(SimError),

    #[error("Unsupported path type: {0}")]
    UnsupportedPathType(CscError),
}
