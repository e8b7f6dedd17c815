//! # Planning Requests

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// A request to plan a path between two poses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// The pose the vehicle starts in.
    pub start: PoseSpec,

    /// The pose the vehicle shall finish in.
    pub goal: PoseSpec,

    /// The turning radius of the vehicle, must be positive.
    pub turning_radius: f64,

    /// Unit of the `heading` fields of `start` and `goal`.
    #[serde(default)]
    pub heading_unit: AngleUnit,

    /// Axis aligned rectangular obstacles the vehicle must not touch.
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,

    /// Restrict planning to these path labels (for example `"RSR"` or `"lsL"`).
    ///
    /// If not provided all labels are considered.
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

/// A vehicle pose as provided by an external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSpec {
    /// Position of the vehicle's reference point along X.
    pub x: f64,

    /// Position of the vehicle's reference point along Y.
    pub y: f64,

    /// Heading of the vehicle, 0 facing +X and increasing counter-clockwise.
    ///
    /// The unit is given by [`PlanRequest::heading_unit`].
    pub heading: f64,
}

/// An axis aligned rectangle given by two opposite corners `[[x1, y1], [x2, y2]]`.
///
/// The order of the corners is not important.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObstacleSpec(pub [[f64; 2]; 2]);

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// Unit used for headings in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for AngleUnit {
    fn default() -> Self {
        AngleUnit::Degrees
    }
}

impl PoseSpec {
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }
}

impl ObstacleSpec {
    pub fn new(corner_0: [f64; 2], corner_1: [f64; 2]) -> Self {
        Self([corner_0, corner_1])
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_minimal_request() {
        let req: PlanRequest = serde_json::from_str(
            r#"{
                "start": { "x": 0.0, "y": 0.0, "heading": 0.0 },
                "goal": { "x": 20.0, "y": 5.0, "heading": 90.0 },
                "turning_radius": 5.0
            }"#,
        )
        .unwrap();

        assert_eq!(req.heading_unit, AngleUnit::Degrees);
        assert!(req.obstacles.is_empty());
        assert_eq!(req.labels, None);
        assert_eq!(req.goal, PoseSpec::new(20.0, 5.0, 90.0));
    }

    #[test]
    fn test_parse_full_request() {
        let req: PlanRequest = serde_json::from_str(
            r#"{
                "start": { "x": 1.0, "y": 2.0, "heading": 3.14 },
                "goal": { "x": -4.0, "y": 6.0, "heading": 0.5 },
                "turning_radius": 2.0,
                "heading_unit": "radians",
                "obstacles": [ [[5.0, 5.0], [1.0, 3.0]], [[-1.0, -1.0], [-2.0, -3.0]] ],
                "labels": ["RSR", "lsL"]
            }"#,
        )
        .unwrap();

        assert_eq!(req.heading_unit, AngleUnit::Radians);
        assert_eq!(req.obstacles.len(), 2);
        assert_eq!(req.obstacles[0], ObstacleSpec::new([5.0, 5.0], [1.0, 3.0]));
        assert_eq!(
            req.labels,
            Some(vec![String::from("RSR"), String::from("lsL")])
        );
    }

    #[test]
    fn test_obstacle_serialises_as_corner_pair() {
        let json = serde_json::to_string(&ObstacleSpec::new([0.0, 1.0], [2.0, 3.0])).unwrap();

        assert_eq!(json, "[[0.0,1.0],[2.0,3.0]]");
    }
}
