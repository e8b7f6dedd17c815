//! Vehicle footprint definition for collision checking.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use super::Obstacle;
use crate::loc::Pose;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Rectangular vehicle footprint, measured from the reference point (the rear axle midpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Footprint {
    /// Distance from the reference point to the front of the vehicle.
    ///
    /// Units: meters
    pub front_m: f64,

    /// Distance from the reference point to the rear of the vehicle.
    ///
    /// Units: meters
    pub rear_m: f64,

    /// Distance from the centre line to either side of the vehicle.
    ///
    /// Units: meters
    pub side_m: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Footprint {
    fn default() -> Self {
        Self {
            front_m: 1.0,
            rear_m: 0.5,
            side_m: 0.5,
        }
    }
}

impl Footprint {
    /// Corners of the footprint at the given pose, counter-clockwise starting front right.
    pub fn corners(&self, pose: &Pose) -> [Vector2<f64>; 4] {
        let rot = Rotation2::new(pose.heading_rad());

        let body = [
            Vector2::new(self.front_m, -self.side_m),
            Vector2::new(self.front_m, self.side_m),
            Vector2::new(-self.rear_m, self.side_m),
            Vector2::new(-self.rear_m, -self.side_m),
        ];

        let mut corners = [Vector2::zeros(); 4];
        for (corner, b) in corners.iter_mut().zip(body.iter()) {
            *corner = pose.position_m + rot * *b;
        }
        corners
    }

    /// Returns `true` if the footprint placed at `pose` touches the obstacle.
    ///
    /// Checked in order: footprint corners inside the obstacle, footprint edges crossing the
    /// obstacle, and obstacle corners inside the footprint.
    pub fn collides(&self, pose: &Pose, obstacle: &Obstacle) -> bool {
        let corners = self.corners(pose);

        if corners.iter().any(|c| obstacle.contains(c)) {
            return true;
        }

        let crosses =
            (0..4).any(|i| obstacle.intersects_segment(&corners[i], &corners[(i + 1) % 4]));
        if crosses {
            return true;
        }

        obstacle
            .corners()
            .iter()
            .any(|p| convex_contains(&corners, p))
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Point in a counter-clockwise convex polygon, boundary inclusive.
fn convex_contains(polygon: &[Vector2<f64>; 4], point: &Vector2<f64>) -> bool {
    (0..4).all(|i| {
        let a = polygon[i];
        let b = polygon[(i + 1) % 4];
        (b - a).perp(&(point - a)) >= 0.0
    })
}
