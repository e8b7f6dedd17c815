//! Parameters structure for the path planner

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use crate::sim::SimParams;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the path planner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathPlannerParams {
    /// How candidates are ordered before being checked for collisions.
    pub ranking: RankingStrategy,

    /// If `true` a report of every planning request is saved into the session directory.
    pub save_reports: bool,

    /// Parameters of the simulator used for collision checking.
    pub sim: SimParams,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Sort key used to rank candidates, lowest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Combined length of both arcs. The straight segment is not counted, so a candidate with
    /// less turning ranks above a physically shorter one.
    TurningCost,

    /// Total length of the path.
    TotalLength,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for RankingStrategy {
    fn default() -> Self {
        RankingStrategy::TurningCost
    }
}
