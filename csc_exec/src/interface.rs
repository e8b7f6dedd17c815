//! # Interface conversions
//!
//! Converts between the `plan_if` request/response shapes and the library's own types, and
//! handles a complete request.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use log::{debug, trace, warn};
use nalgebra::Vector2;

use plan_if::{
    AngleUnit, DirectionSpec, FailureKind, InstructionSpec, ObstacleSpec, PlanRequest,
    PlanResponse, PoseSpec,
};

use crate::{
    csc::{CscError, CscLabel},
    drive::{DriveDirection, DriveInstruction},
    loc::Pose,
    nav::{NavError, PathPlanner, PlannedPath},
    sim::Obstacle,
};

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Plan the path described by the request, converting any failure into a failure response.
pub fn handle_request(planner: &PathPlanner, request: &PlanRequest) -> PlanResponse {
    let labels = match request.labels.as_ref().map(|l| parse_labels(l)).transpose() {
        Ok(l) => l,
        Err(e) => {
            warn!("Rejecting request: {}", e);
            return failure_response(&NavError::UnsupportedPathType(e));
        }
    };

    let start = pose_from_spec(&request.start, request.heading_unit);
    let goal = pose_from_spec(&request.goal, request.heading_unit);
    let obstacles: Vec<Obstacle> = request.obstacles.iter().map(obstacle_from_spec).collect();
    for (i, obs) in obstacles.iter().enumerate() {
        trace!("Obstacle {}: {:?} to {:?}", i, obs.min_m(), obs.max_m());
    }

    debug!(
        "Planning from {:?} to {:?} with radius {} m around {} obstacles",
        start,
        goal,
        request.turning_radius,
        obstacles.len()
    );

    let (result, _) = planner.plan_with_report(
        &start,
        &goal,
        request.turning_radius,
        &obstacles,
        labels.as_deref(),
    );

    response_from_result(&result)
}

/// Build the response for a planning result.
pub fn response_from_result(result: &Result<PlannedPath, NavError>) -> PlanResponse {
    match result {
        Ok(path) => PlanResponse::Path {
            label: path.candidate.label.to_string(),
            instructions: path
                .instructions
                .iter()
                .map(|i| InstructionSpec::from(*i))
                .collect(),
        },
        Err(e) => failure_response(e),
    }
}

/// Convert a pose given in the request's angle unit.
pub fn pose_from_spec(spec: &PoseSpec, unit: AngleUnit) -> Pose {
    match unit {
        AngleUnit::Degrees => Pose::from_degrees(spec.x, spec.y, spec.heading),
        AngleUnit::Radians => Pose::new(Vector2::new(spec.x, spec.y), spec.heading),
    }
}

pub fn obstacle_from_spec(spec: &ObstacleSpec) -> Obstacle {
    let [c0, c1] = spec.0;
    Obstacle::from_corners(Vector2::new(c0[0], c0[1]), Vector2::new(c1[0], c1[1]))
}

/// Parse a list of label strings, failing on the first unknown label.
pub fn parse_labels(labels: &[String]) -> Result<Vec<CscLabel>, CscError> {
    labels.iter().map(|l| l.parse()).collect()
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl From<DriveInstruction> for InstructionSpec {
    fn from(instr: DriveInstruction) -> Self {
        InstructionSpec {
            direction: match instr.direction {
                DriveDirection::Left => DirectionSpec::Left,
                DriveDirection::Straight => DirectionSpec::Straight,
                DriveDirection::Right => DirectionSpec::Right,
            },
            length: instr.length_m,
        }
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn failure_response(err: &NavError) -> PlanResponse {
    let kind = match err {
        NavError::InvalidRadius(_) => FailureKind::InvalidRadius,
        NavError::NoValidPath { .. } => FailureKind::NoValidPath,
        NavError::InvalidSimulationInput(_) => FailureKind::InvalidSimulationInput,
        NavError::UnsupportedPathType(_) => FailureKind::UnsupportedPathType,
    };

    PlanResponse::Failure {
        kind,
        message: err.to_string(),
    }
}
