//! Computes the 8 candidates of one CSC family for a pair of poses.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, TAU};

use util::maths::normalise_angle;

use super::{CscCandidate, CscGeometry, CscLabel, Travel, Turn};
use crate::loc::Pose;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Circle centres closer than this are treated as the same point.
pub const CENTRE_COINCIDENCE_EPS: f64 = 1e-9;

/// Sweeps within this of 0 or a full turn are treated as no sweep at all.
pub const SWEEP_EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Sweeps around the start and goal circles to or from one tangent line, when driven forwards.
struct Sweeps {
    start_rad: f64,
    goal_rad: f64,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// The 8 candidates turning right on both circles.
pub fn right_family(start: &Pose, goal: &Pose, turning_radius_m: f64) -> Vec<CscCandidate> {
    family(start, goal, turning_radius_m, Turn::Right)
}

/// The 8 candidates turning left on both circles.
pub fn left_family(start: &Pose, goal: &Pose, turning_radius_m: f64) -> Vec<CscCandidate> {
    family(start, goal, turning_radius_m, Turn::Left)
}

/// The 8 candidates of the given family, in the order of [`CscLabel::family`].
pub fn family(start: &Pose, goal: &Pose, turning_radius_m: f64, turn: Turn) -> Vec<CscCandidate> {
    family_with_geometry(start, goal, turning_radius_m, turn).0
}

/// As [`family`], also returning the construction points of the family.
///
/// The turning radius is assumed to be positive, validating it is the caller's job.
pub fn family_with_geometry(
    start: &Pose,
    goal: &Pose,
    turning_radius_m: f64,
    turn: Turn,
) -> (Vec<CscCandidate>, CscGeometry) {
    let r = turning_radius_m;

    let (centre_a, centre_b) = match turn {
        Turn::Right => (start.right_centre(r), goal.right_centre(r)),
        Turn::Left => (start.left_centre(r), goal.left_centre(r)),
    };

    // The straight segment joins two equal circles along a common external tangent, so its length
    // is the distance between the centres.
    let mut straight_m = (centre_b - centre_a).norm();
    let tangent_dir_rad = if straight_m < CENTRE_COINCIDENCE_EPS {
        straight_m = 0.0;
        0.0
    } else {
        vec_angle(centre_b - centre_a)
    };

    // Angle around the circles of the tangent points. Driving forwards along the direct tangent
    // faces from A to B, along the mirror tangent faces from B to A.
    let (tangent_rad, mirror_rad) = match turn {
        Turn::Right => (
            normalise_angle(tangent_dir_rad + FRAC_PI_2),
            normalise_angle(tangent_dir_rad - FRAC_PI_2),
        ),
        Turn::Left => (
            normalise_angle(tangent_dir_rad - FRAC_PI_2),
            normalise_angle(tangent_dir_rad + FRAC_PI_2),
        ),
    };

    // Where the vehicle currently sits on each circle
    let outer_start_rad = normalise_angle(vec_angle(start.position_m - centre_a));
    let outer_goal_rad = normalise_angle(vec_angle(goal.position_m - centre_b));

    let direct = Sweeps::new(turn, outer_start_rad, outer_goal_rad, tangent_rad);
    let mirror = Sweeps::new(turn, outer_start_rad, outer_goal_rad, mirror_rad);

    let candidates = CscLabel::family(turn)
        .iter()
        .map(|&label| {
            let [first, straight, second] = label.travels();

            let sweeps = match straight {
                Travel::Forward => &direct,
                Travel::Backward => &mirror,
            };

            CscCandidate {
                label,
                arc1_m: r * travelled_sweep(sweeps.start_rad, first),
                straight_m,
                arc2_m: r * travelled_sweep(sweeps.goal_rad, second),
            }
        })
        .collect();

    let geometry = CscGeometry {
        turn,
        centre_a_m: centre_a,
        centre_b_m: centre_b,
        tangent_c_m: on_circle(centre_a, r, tangent_rad),
        tangent_d_m: on_circle(centre_b, r, tangent_rad),
        mirror_c_m: on_circle(centre_a, r, mirror_rad),
        mirror_d_m: on_circle(centre_b, r, mirror_rad),
    };

    (candidates, geometry)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Sweeps {
    /// Right turns sweep clockwise when driven forwards, left turns counter-clockwise.
    fn new(turn: Turn, outer_start_rad: f64, outer_goal_rad: f64, tangent_rad: f64) -> Self {
        match turn {
            Turn::Right => Self {
                start_rad: snap_sweep(outer_start_rad - tangent_rad),
                goal_rad: snap_sweep(tangent_rad - outer_goal_rad),
            },
            Turn::Left => Self {
                start_rad: snap_sweep(tangent_rad - outer_start_rad),
                goal_rad: snap_sweep(outer_goal_rad - tangent_rad),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Sweep actually driven, the long way round when reversing.
fn travelled_sweep(inner_rad: f64, travel: Travel) -> f64 {
    match travel {
        Travel::Forward => inner_rad,
        Travel::Backward => snap_sweep(TAU - inner_rad),
    }
}

/// Wrap a sweep into `[0, 2pi)`, collapsing near-zero and near-full sweeps to zero.
fn snap_sweep(sweep_rad: f64) -> f64 {
    let sweep_rad = normalise_angle(sweep_rad);

    if sweep_rad < SWEEP_EPS || TAU - sweep_rad < SWEEP_EPS {
        0.0
    } else {
        sweep_rad
    }
}

fn vec_angle(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

fn on_circle(centre: Vector2<f64>, r: f64, angle_rad: f64) -> Vector2<f64> {
    centre + r * Vector2::new(angle_rad.cos(), angle_rad.sin())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::PI;

    fn find(cands: &[CscCandidate], label: CscLabel) -> CscCandidate {
        *cands.iter().find(|c| c.label == label).unwrap()
    }

    fn test_poses() -> Vec<(Pose, Pose)> {
        vec![
            (Pose::from_degrees(0.0, 0.0, 0.0), Pose::from_degrees(20.0, 0.0, 0.0)),
            (Pose::from_degrees(0.0, 0.0, 0.0), Pose::from_degrees(30.0, 10.0, 135.0)),
            (Pose::from_degrees(5.0, -2.0, 270.0), Pose::from_degrees(-8.0, 4.0, 45.0)),
            (Pose::from_degrees(1.0, 1.0, 10.0), Pose::from_degrees(1.0, 1.0, 10.0)),
            (Pose::from_degrees(0.0, 0.0, 0.0), Pose::from_degrees(0.0, 0.0, 180.0)),
        ]
    }

    #[test]
    fn test_family_sizes_and_signs() {
        for (start, goal) in test_poses() {
            for &r in &[0.5, 1.0, 5.0, 10.0] {
                for (turn, cands) in [
                    (Turn::Right, right_family(&start, &goal, r)),
                    (Turn::Left, left_family(&start, &goal, r)),
                ]
                .iter()
                {
                    assert_eq!(cands.len(), 8);

                    for (cand, label) in cands.iter().zip(CscLabel::family(*turn)) {
                        assert_eq!(cand.label, *label);
                        assert!(cand.arc1_m >= 0.0 && cand.arc1_m < TAU * r);
                        assert!(cand.arc2_m >= 0.0 && cand.arc2_m < TAU * r);
                        assert!(cand.straight_m >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_collinear_same_heading() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(20.0, 0.0, 0.0);

        for &r in &[1.0, 5.0, 10.0] {
            let rsr = find(&right_family(&start, &goal, r), CscLabel::RSR);
            let lsl = find(&left_family(&start, &goal, r), CscLabel::LSL);

            for cand in [rsr, lsl].iter() {
                assert_eq!(cand.arc1_m, 0.0, "{:?}", cand);
                assert_eq!(cand.arc2_m, 0.0, "{:?}", cand);
                assert!((cand.straight_m - 20.0).abs() < 1e-9, "{:?}", cand);
            }
        }
    }

    #[test]
    fn test_pure_rotation() {
        let r = 10.0;
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(r, r, 90.0);

        let lsl = find(&left_family(&start, &goal, r), CscLabel::LSL);

        assert_eq!(lsl.straight_m, 0.0);
        assert!((lsl.turning_cost_m() - r * PI / 2.0).abs() < 1e-6);
        assert!((lsl.turning_cost_m() - 15.708).abs() < 1e-3);
    }

    #[test]
    fn test_prime_sweeps_complement() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(30.0, 10.0, 135.0);
        let r = 5.0;

        let cands = right_family(&start, &goal, r);
        let direct = find(&cands, CscLabel::RSR);
        let rev_first = find(&cands, CscLabel::rSR);
        let rev_second = find(&cands, CscLabel::RSr);

        assert!((direct.arc1_m + rev_first.arc1_m - TAU * r).abs() < 1e-9);
        assert!((direct.arc2_m + rev_second.arc2_m - TAU * r).abs() < 1e-9);
        assert_eq!(direct.arc2_m, rev_first.arc2_m);
    }

    #[test]
    fn test_geometry_tangents() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(30.0, 10.0, 135.0);
        let r = 5.0;

        for &turn in [Turn::Right, Turn::Left].iter() {
            let (cands, geom) = family_with_geometry(&start, &goal, r, turn);
            let ab = geom.centre_b_m - geom.centre_a_m;

            // Tangent points lie on their circles
            assert!(((geom.tangent_c_m - geom.centre_a_m).norm() - r).abs() < 1e-9);
            assert!(((geom.mirror_d_m - geom.centre_b_m).norm() - r).abs() < 1e-9);

            // Both tangent segments are parallel to AB with the same length
            assert!(((geom.tangent_d_m - geom.tangent_c_m) - ab).norm() < 1e-9);
            assert!(((geom.mirror_d_m - geom.mirror_c_m) - ab).norm() < 1e-9);
            assert!((cands[0].straight_m - ab.norm()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_coincident_centres() {
        let pose = Pose::from_degrees(3.0, -4.0, 60.0);
        let (cands, geom) = family_with_geometry(&pose, &pose, 2.0, Turn::Left);

        assert_eq!(geom.centre_a_m, geom.centre_b_m);
        for cand in cands.iter() {
            assert_eq!(cand.straight_m, 0.0);
        }

        // Staying put is either no turn or one full turn split over both arcs
        let lsl = find(&cands, CscLabel::LSL);
        assert!(lsl.turning_cost_m() < 1e-6 || (lsl.turning_cost_m() - TAU * 2.0).abs() < 1e-6);
    }
}
