//! # Kinematic simulator
//!
//! Forward integrates the vehicle pose through a sequence of drive instructions at a fixed step
//! and checks the swept footprint against a set of rectangular obstacles.
//!
//! Turning instructions rotate the heading at `speed / radius`, positive (counter-clockwise) for
//! left turns and negative for right turns. The sign of an instruction's length gives the
//! direction of travel, so a reversing left turn rotates clockwise.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod footprint;
mod obstacle;
mod params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::trace;

pub use footprint::Footprint;
pub use obstacle::Obstacle;
pub use params::SimParams;

use crate::drive::{DriveDirection, DriveInstruction};
use crate::loc::Pose;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Forward simulator for the vehicle kinematics.
#[derive(Debug, Clone, Default)]
pub struct KinematicSim {
    params: SimParams,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The result of simulating an instruction sequence.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SimOutcome {
    /// Every instruction was driven without touching an obstacle.
    Clear { final_pose: Pose },

    /// The footprint touched an obstacle.
    Collision {
        /// Index of the instruction being driven, `None` if the start pose already collides.
        instruction: Option<usize>,

        /// Pose at which the collision was detected.
        pose: Pose,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("Turning radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    #[error("Instruction {index} has a non-finite length ({length_m})")]
    NonFiniteLength { index: usize, length_m: f64 },

    #[error("The start pose is not finite: {0:?}")]
    NonFinitePose(Pose),

    #[error("Time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("Speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl KinematicSim {
    pub fn new(params: SimParams) -> Self {
        Self { params }
    }

    /// Returns `true` if the instructions can be driven from `start` without the footprint
    /// touching any obstacle.
    pub fn is_drivable(
        &self,
        start: &Pose,
        instructions: &[DriveInstruction],
        obstacles: &[Obstacle],
        turning_radius_m: f64,
    ) -> Result<bool, SimError> {
        match self.simulate(start, instructions, obstacles, turning_radius_m)? {
            SimOutcome::Clear { .. } => Ok(true),
            SimOutcome::Collision { .. } => Ok(false),
        }
    }

    /// Pose reached by driving the instructions from `start`, ignoring obstacles.
    pub fn final_pose(
        &self,
        start: &Pose,
        instructions: &[DriveInstruction],
        turning_radius_m: f64,
    ) -> Result<Pose, SimError> {
        match self.simulate(start, instructions, &[], turning_radius_m)? {
            SimOutcome::Clear { final_pose } => Ok(final_pose),
            SimOutcome::Collision { pose, .. } => Ok(pose),
        }
    }

    /// Simulate the instructions, stopping at the first collision.
    ///
    /// All inputs are validated before the first step is taken.
    pub fn simulate(
        &self,
        start: &Pose,
        instructions: &[DriveInstruction],
        obstacles: &[Obstacle],
        turning_radius_m: f64,
    ) -> Result<SimOutcome, SimError> {
        let step_counts = self.validate(start, instructions, turning_radius_m)?;

        let mut pose = *start;

        if self.collides(&pose, obstacles) {
            trace!("Start pose {:?} collides with an obstacle", pose);
            return Ok(SimOutcome::Collision {
                instruction: None,
                pose,
            });
        }

        for (index, (instr, &num_steps)) in instructions.iter().zip(step_counts.iter()).enumerate()
        {
            if num_steps == 0 {
                continue;
            }

            let step_m = instr.length_m / (num_steps as f64);
            let curv_m = match instr.direction {
                DriveDirection::Left => 1.0 / turning_radius_m,
                DriveDirection::Straight => 0.0,
                DriveDirection::Right => -1.0 / turning_radius_m,
            };

            for _ in 0..num_steps {
                pose.set_heading_rad(pose.heading_rad() + step_m * curv_m);
                pose.position_m += step_m * pose.forward();

                if self.collides(&pose, obstacles) {
                    trace!(
                        "Collision during instruction {} ({:?}) at {:?}",
                        index,
                        instr,
                        pose
                    );
                    return Ok(SimOutcome::Collision {
                        instruction: Some(index),
                        pose,
                    });
                }
            }
        }

        Ok(SimOutcome::Clear { final_pose: pose })
    }

    /// Check the inputs and compute the number of steps for each instruction.
    fn validate(
        &self,
        start: &Pose,
        instructions: &[DriveInstruction],
        turning_radius_m: f64,
    ) -> Result<Vec<u64>, SimError> {
        if !(turning_radius_m > 0.0 && turning_radius_m.is_finite()) {
            return Err(SimError::NonPositiveRadius(turning_radius_m));
        }
        if !(self.params.time_step_s > 0.0 && self.params.time_step_s.is_finite()) {
            return Err(SimError::InvalidTimeStep(self.params.time_step_s));
        }
        if !(self.params.speed_ms > 0.0 && self.params.speed_ms.is_finite()) {
            return Err(SimError::InvalidSpeed(self.params.speed_ms));
        }
        if !start.is_finite() {
            return Err(SimError::NonFinitePose(*start));
        }

        let step_length_m = self.params.step_length_m();
        let limit = self.params.max_steps_per_instruction.max(1);

        instructions
            .iter()
            .enumerate()
            .map(|(index, instr)| {
                if !instr.length_m.is_finite() {
                    return Err(SimError::NonFiniteLength {
                        index,
                        length_m: instr.length_m,
                    });
                }

                // Long instructions are driven in fewer, longer steps
                let steps = (instr.length_m.abs() / step_length_m).ceil();
                if !steps.is_finite() || steps > limit as f64 {
                    trace!(
                        "Instruction {} needs {} steps, using {} longer steps",
                        index,
                        steps,
                        limit
                    );
                    return Ok(limit);
                }

                Ok(steps as u64)
            })
            .collect()
    }

    fn collides(&self, pose: &Pose, obstacles: &[Obstacle]) -> bool {
        obstacles
            .iter()
            .any(|o| self.params.footprint.collides(pose, o))
    }
}
