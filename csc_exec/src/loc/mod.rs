//! # Localisation module
//!
//! Defines the planar pose of the vehicle and the turning circles derived from it.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

use util::maths::{deg_to_rad, normalise_angle};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The pose (position and heading) of the vehicle's reference point.
///
/// The heading is always held normalised into `[0, 2pi)`, with 0 facing the positive X axis and
/// increasing counter-clockwise.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Default)]
pub struct Pose {
    /// The position of the reference point
    pub position_m: Vector2<f64>,

    /// The heading in radians
    heading_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {
    /// Create a new pose, normalising the heading.
    pub fn new(position_m: Vector2<f64>, heading_rad: f64) -> Self {
        Self {
            position_m,
            heading_rad: normalise_angle(heading_rad),
        }
    }

    /// Create a new pose from a heading given in degrees.
    pub fn from_degrees(x_m: f64, y_m: f64, heading_deg: f64) -> Self {
        Self::new(Vector2::new(x_m, y_m), deg_to_rad(heading_deg))
    }

    /// Return the heading (angle to the positive X axis) in radians.
    ///
    /// Heading is given in the range [0, 2*pi).
    pub fn heading_rad(&self) -> f64 {
        self.heading_rad
    }

    /// Set the heading, normalising it.
    pub fn set_heading_rad(&mut self, heading_rad: f64) {
        self.heading_rad = normalise_angle(heading_rad);
    }

    /// Unit vector pointing along the heading.
    pub fn forward(&self) -> Vector2<f64> {
        Vector2::new(self.heading_rad.cos(), self.heading_rad.sin())
    }

    /// Returns `true` if both the position and heading are finite.
    pub fn is_finite(&self) -> bool {
        self.position_m.iter().all(|v| v.is_finite()) && self.heading_rad.is_finite()
    }

    /// Centre of the circle traced when steering fully left with the given turning radius.
    pub fn left_centre(&self, turning_radius_m: f64) -> Vector2<f64> {
        self.position_m + turning_radius_m * self.left_normal()
    }

    /// Centre of the circle traced when steering fully right with the given turning radius.
    pub fn right_centre(&self, turning_radius_m: f64) -> Vector2<f64> {
        self.position_m - turning_radius_m * self.left_normal()
    }

    /// Unit vector pointing to the left of the vehicle.
    fn left_normal(&self) -> Vector2<f64> {
        let anti_head_rad = self.heading_rad + FRAC_PI_2;
        Vector2::new(anti_head_rad.cos(), anti_head_rad.sin())
    }
}
