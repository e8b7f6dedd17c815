//! # Drive instructions
//!
//! Converts a labelled CSC candidate into the three motion primitives the vehicle executes. The
//! sign of each instruction's length gives the direction of travel, positive being forwards.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;

use crate::csc::{CscCandidate, Travel, Turn};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Steering applied while executing an instruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum DriveDirection {
    Left,
    Straight,
    Right,
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A single motion primitive.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct DriveInstruction {
    pub direction: DriveDirection,

    /// Signed distance to travel, negative when reversing.
    pub length_m: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl DriveInstruction {
    pub fn new(direction: DriveDirection, length_m: f64) -> Self {
        Self {
            direction,
            length_m,
        }
    }

    pub fn is_reverse(&self) -> bool {
        self.length_m < 0.0
    }
}

impl From<Turn> for DriveDirection {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Left => DriveDirection::Left,
            Turn::Right => DriveDirection::Right,
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Compile a candidate into its turn, straight, turn instruction sequence.
pub fn compile(candidate: &CscCandidate) -> [DriveInstruction; 3] {
    let (turn, [first, straight, second]) = candidate.label.parts();

    [
        DriveInstruction::new(turn.into(), signed(candidate.arc1_m, first)),
        DriveInstruction::new(
            DriveDirection::Straight,
            signed(candidate.straight_m, straight),
        ),
        DriveInstruction::new(turn.into(), signed(candidate.arc2_m, second)),
    ]
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn signed(magnitude_m: f64, travel: Travel) -> f64 {
    match travel {
        Travel::Forward => magnitude_m,
        Travel::Backward => -magnitude_m,
    }
}
