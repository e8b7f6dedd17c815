//! # Planning Responses

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A single drive instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstructionSpec {
    /// Steering direction held for the whole instruction.
    pub direction: DirectionSpec,

    /// Distance to travel, positive is forwards and negative is backwards.
    pub length: f64,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Response to a [`crate::PlanRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanResponse {
    /// A drivable path was found.
    Path {
        /// Label of the chosen path, for example `"RsR"`.
        label: String,

        /// Instructions to execute in order.
        instructions: Vec<InstructionSpec>,
    },

    /// No path could be produced.
    Failure {
        kind: FailureKind,

        /// Human readable description of the failure.
        message: String,
    },
}

/// Steering direction of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionSpec {
    Left,
    Straight,
    Right,
}

/// Kind of a planning failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The turning radius was zero, negative, or not finite.
    InvalidRadius,

    /// Every candidate path collides with an obstacle.
    NoValidPath,

    /// The simulator was given an input it cannot integrate.
    InvalidSimulationInput,

    /// A path label outside the supported family was requested.
    UnsupportedPathType,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl PlanResponse {
    /// Returns `true` if this response carries a path.
    pub fn is_path(&self) -> bool {
        matches!(self, PlanResponse::Path { .. })
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------
