//! Axis-aligned rectangular obstacles

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::Serialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle the vehicle must not touch.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Obstacle {
    min_m: Vector2<f64>,
    max_m: Vector2<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Obstacle {
    /// Creates an obstacle from any two opposite corners, in any order.
    pub fn from_corners(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self {
            min_m: Vector2::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            max_m: Vector2::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    pub fn min_m(&self) -> Vector2<f64> {
        self.min_m
    }

    pub fn max_m(&self) -> Vector2<f64> {
        self.max_m
    }

    /// The four corners, counter-clockwise from the minimum corner.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            self.min_m,
            Vector2::new(self.max_m.x, self.min_m.y),
            self.max_m,
            Vector2::new(self.min_m.x, self.max_m.y),
        ]
    }

    /// Returns `true` if `point` is inside or on the boundary of the obstacle.
    pub fn contains(&self, point: &Vector2<f64>) -> bool {
        self.min_m.x <= point.x
            && point.x <= self.max_m.x
            && self.min_m.y <= point.y
            && point.y <= self.max_m.y
    }

    /// Returns `true` if the segment from `a` to `b` touches the obstacle.
    ///
    /// Uses Liang-Barsky clipping of the segment against the rectangle.
    pub fn intersects_segment(&self, a: &Vector2<f64>, b: &Vector2<f64>) -> bool {
        let d = b - a;

        let checks = [
            (-d.x, a.x - self.min_m.x),
            (d.x, self.max_m.x - a.x),
            (-d.y, a.y - self.min_m.y),
            (d.y, self.max_m.y - a.y),
        ];

        let mut t_enter = 0.0f64;
        let mut t_exit = 1.0f64;

        for &(p, q) in checks.iter() {
            if p == 0.0 {
                // Parallel to this boundary and outside it
                if q < 0.0 {
                    return false;
                }
                continue;
            }

            let t = q / p;
            if p < 0.0 {
                if t > t_exit {
                    return false;
                }
                t_enter = t_enter.max(t);
            } else {
                if t < t_enter {
                    return false;
                }
                t_exit = t_exit.min(t);
            }
        }

        t_enter <= t_exit
    }
}
