//! Parameters structure for the kinematic simulator

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

use super::Footprint;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the kinematic simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Integration time step.
    ///
    /// Units: seconds
    pub time_step_s: f64,

    /// Constant speed the vehicle drives each instruction at.
    ///
    /// Units: meters/second
    pub speed_ms: f64,

    /// Upper bound on the number of integration steps for a single instruction. Instructions
    /// which would need more steps are driven in this many longer steps.
    pub max_steps_per_instruction: u64,

    /// Extents of the vehicle body used for collision checking.
    pub footprint: Footprint,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for SimParams {
    fn default() -> Self {
        Self {
            time_step_s: 0.001,
            speed_ms: 1.0,
            max_steps_per_instruction: 10_000_000,
            footprint: Footprint::default(),
        }
    }
}

impl SimParams {
    /// Distance travelled in one integration step.
    pub fn step_length_m(&self) -> f64 {
        self.speed_ms * self.time_step_s
    }
}
