//! Plans the cheapest collision free CSC path between two poses.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, info, warn};
use serde::Serialize;

use super::{selector, NavError, PathPlannerParams, RankingStrategy};
use crate::{
    csc::{self, CscCandidate, CscGeometry, CscLabel, Turn},
    drive::{self, DriveInstruction},
    loc::Pose,
    sim::{KinematicSim, Obstacle},
};

// -----------------------------------------------------------------------------------------------
// STRUCTS
// -----------------------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PathPlanner {
    params: PathPlannerParams,
    sim: KinematicSim,
}

/// The path chosen by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlannedPath {
    pub candidate: CscCandidate,
    pub instructions: [DriveInstruction; 3],
}

/// Record of one planning request.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub start: Pose,
    pub goal: Pose,
    pub turning_radius_m: f64,
    pub ranking: RankingStrategy,
    pub obstacles: Vec<Obstacle>,

    /// Construction points of the right and left families
    pub geometry: Vec<CscGeometry>,

    /// Candidates in ranked order
    pub candidates: Vec<CandidateReport>,

    /// Label of the selected candidate, if any was drivable
    pub result: Option<CscLabel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
    pub candidate: CscCandidate,
    pub cost: f64,
    pub instructions: [DriveInstruction; 3],

    /// `None` if the candidate was not simulated because a cheaper one was already drivable.
    pub drivable: Option<bool>,
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl PathPlanner {
    pub fn new(params: PathPlannerParams) -> Self {
        let sim = KinematicSim::new(params.sim.clone());
        Self { params, sim }
    }

    pub fn params(&self) -> &PathPlannerParams {
        &self.params
    }

    /// Plans the cheapest drivable path from `start` to `goal`.
    ///
    /// Candidates are checked in ranked order and the first one which can be driven without
    /// touching any obstacle is returned.
    pub fn plan(
        &self,
        start: &Pose,
        goal: &Pose,
        turning_radius_m: f64,
        obstacles: &[Obstacle],
    ) -> Result<PlannedPath, NavError> {
        self.plan_with_report(start, goal, turning_radius_m, obstacles, None)
            .0
    }

    /// As [`PathPlanner::plan`], only considering the given labels if any are given, and also
    /// returning a report of every candidate considered.
    ///
    /// If the `save_reports` parameter is set the report is also saved into the session.
    pub fn plan_with_report(
        &self,
        start: &Pose,
        goal: &Pose,
        turning_radius_m: f64,
        obstacles: &[Obstacle],
        labels: Option<&[CscLabel]>,
    ) -> (Result<PlannedPath, NavError>, PlanReport) {
        let mut report = PlanReport {
            start: *start,
            goal: *goal,
            turning_radius_m,
            ranking: self.params.ranking,
            obstacles: obstacles.to_vec(),
            geometry: Vec::new(),
            candidates: Vec::new(),
            result: None,
        };

        let result = self.plan_into(start, goal, turning_radius_m, obstacles, labels, &mut report);

        if self.params.save_reports {
            util::session::save_with_timestamp("path_planner/report.json", report.clone());
        }

        (result, report)
    }

    /// Internal planning function, filling in the report as candidates are checked.
    fn plan_into(
        &self,
        start: &Pose,
        goal: &Pose,
        turning_radius_m: f64,
        obstacles: &[Obstacle],
        labels: Option<&[CscLabel]>,
        report: &mut PlanReport,
    ) -> Result<PlannedPath, NavError> {
        if !(turning_radius_m > 0.0 && turning_radius_m.is_finite()) {
            return Err(NavError::InvalidRadius(turning_radius_m));
        }

        // Build both families, keeping their geometry for the report
        let mut candidates = Vec::with_capacity(CscLabel::ALL.len());
        for &turn in [Turn::Right, Turn::Left].iter() {
            let (family, geometry) = csc::family_with_geometry(start, goal, turning_radius_m, turn);
            candidates.extend(family);
            report.geometry.push(geometry);
        }

        if let Some(labels) = labels {
            candidates.retain(|c| labels.contains(&c.label));
        }

        selector::rank(&mut candidates, self.params.ranking);

        report.candidates = candidates
            .iter()
            .map(|c| CandidateReport {
                candidate: *c,
                cost: selector::cost(c, self.params.ranking),
                instructions: drive::compile(c),
                drivable: None,
            })
            .collect();

        for cand_report in report.candidates.iter_mut() {
            let drivable = self
                .sim
                .is_drivable(
                    start,
                    &cand_report.instructions,
                    obstacles,
                    turning_radius_m,
                )
                .map_err(NavError::InvalidSimulationInput)?;
            cand_report.drivable = Some(drivable);

            debug!(
                "{} (cost {:.3} m, {:.3} m total): {}",
                cand_report.candidate.label,
                cand_report.cost,
                cand_report.candidate.total_length_m(),
                if drivable { "drivable" } else { "collides" }
            );

            if drivable {
                info!(
                    "Selected {} path of {:.3} m ({} reversing segments)",
                    cand_report.candidate.label,
                    cand_report.candidate.total_length_m(),
                    cand_report
                        .instructions
                        .iter()
                        .filter(|i| i.is_reverse())
                        .count()
                );
                report.result = Some(cand_report.candidate.label);

                return Ok(PlannedPath {
                    candidate: cand_report.candidate,
                    instructions: cand_report.instructions,
                });
            }
        }

        warn!(
            "No drivable path found from {:?} to {:?} among {} candidates",
            start,
            goal,
            report.candidates.len()
        );
        Err(NavError::NoValidPath {
            num_tested: report.candidates.len(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::csc::Travel;
    use nalgebra::Vector2;
    use util::maths::get_ang_dist_2pi;

    fn planner() -> PathPlanner {
        PathPlanner::new(PathPlannerParams::default())
    }

    #[test]
    fn test_every_candidate_reaches_goal() {
        let sim = KinematicSim::default();
        let cases = [
            (
                Pose::from_degrees(0.0, 0.0, 0.0),
                Pose::from_degrees(30.0, 10.0, 135.0),
                5.0,
            ),
            (
                Pose::from_degrees(5.0, -2.0, 270.0),
                Pose::from_degrees(-8.0, 4.0, 45.0),
                2.0,
            ),
            (
                Pose::from_degrees(0.0, 0.0, 0.0),
                Pose::from_degrees(10.0, 10.0, 90.0),
                10.0,
            ),
        ];

        for (start, goal, r) in cases.iter() {
            let cands =
                selector::get_all_candidates(start, goal, *r, RankingStrategy::TurningCost);

            for cand in cands.iter() {
                let end = sim.final_pose(start, &drive::compile(cand), *r).unwrap();

                let dist_m = (end.position_m - goal.position_m).norm();
                let ang_rad = get_ang_dist_2pi(end.heading_rad(), goal.heading_rad()).abs();
                assert!(
                    dist_m < 0.05 && ang_rad < 0.01,
                    "{:?} ends at {:?}, not {:?}",
                    cand,
                    end,
                    goal
                );
            }
        }
    }

    #[test]
    fn test_plan_without_obstacles() {
        let cases = [
            (Pose::from_degrees(0.0, 0.0, 0.0), Pose::from_degrees(20.0, 0.0, 0.0)),
            (Pose::from_degrees(0.0, 0.0, 0.0), Pose::from_degrees(30.0, 10.0, 135.0)),
            (Pose::from_degrees(-4.0, 7.0, 200.0), Pose::from_degrees(3.0, -3.0, 10.0)),
        ];

        for (start, goal) in cases.iter() {
            for &r in [1.0, 5.0].iter() {
                let path = planner().plan(start, goal, r, &[]).unwrap();

                assert_eq!(path.instructions, drive::compile(&path.candidate));

                // Nothing is in the way so the cheapest candidate is chosen
                let best = selector::get_all_candidates(start, goal, r, RankingStrategy::default());
                assert_eq!(path.candidate, best[0]);
            }
        }
    }

    #[test]
    fn test_plan_long_distance() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(20000.0, 0.0, 0.0);

        // Longer than the default step limit covers at the default step length
        let path = planner().plan(&start, &goal, 1.0, &[]).unwrap();
        assert_eq!(path.candidate.label, CscLabel::RSR);
        assert!((path.instructions[1].length_m - 20000.0).abs() < 1e-6);

        // A coarse step limit still drives every segment in full
        let mut params = PathPlannerParams::default();
        params.sim.max_steps_per_instruction = 1000;
        let planner = PathPlanner::new(params);
        let goal = Pose::from_degrees(15000.0, 3000.0, 90.0);

        let path = planner.plan(&start, &goal, 20.0, &[]).unwrap();
        let end = KinematicSim::new(planner.params().sim.clone())
            .final_pose(&start, &path.instructions, 20.0)
            .unwrap();
        assert!(
            (end.position_m - goal.position_m).norm() < 1.0,
            "{:?} ends at {:?}",
            path,
            end
        );
    }

    #[test]
    fn test_plan_avoids_obstacle() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(20.0, 0.0, 0.0);
        let wall = Obstacle::from_corners(Vector2::new(8.0, -0.8), Vector2::new(12.0, 0.8));

        let (result, report) = planner().plan_with_report(&start, &goal, 2.0, &[wall], None);
        let path = result.unwrap();

        // Every forward straight runs through the wall, so the vehicle has to reverse past it
        assert_eq!(path.candidate.label.travels()[1], Travel::Backward);
        assert_eq!(report.result, Some(path.candidate.label));

        for cand in report.candidates.iter().take(8) {
            assert_eq!(cand.drivable, Some(false), "{:?}", cand.candidate);
        }
        assert_eq!(report.candidates[8].drivable, Some(true));
        assert!(report.candidates[9..].iter().all(|c| c.drivable.is_none()));
        assert_eq!(report.geometry.len(), 2);
    }

    #[test]
    fn test_plan_no_valid_path() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(20.0, 0.0, 0.0);

        for &r in [1.0, 5.0, 10.0].iter() {
            let margin = 4.0 * r + 10.0;
            let everywhere = Obstacle::from_corners(
                Vector2::new(-margin, -margin),
                Vector2::new(20.0 + margin, margin),
            );

            match planner().plan(&start, &goal, r, &[everywhere]) {
                Err(NavError::NoValidPath { num_tested }) => assert_eq!(num_tested, 16),
                other => panic!("Expected NoValidPath, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_plan_invalid_radius() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(20.0, 0.0, 0.0);

        for &r in [0.0, -1.0, -0.0, f64::NAN, f64::INFINITY].iter() {
            assert!(matches!(
                planner().plan(&start, &goal, r, &[]),
                Err(NavError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn test_plan_invalid_pose() {
        let start = Pose::new(Vector2::new(f64::INFINITY, 0.0), 0.0);
        let goal = Pose::from_degrees(20.0, 0.0, 0.0);

        assert!(matches!(
            planner().plan(&start, &goal, 1.0, &[]),
            Err(NavError::InvalidSimulationInput(_))
        ));
    }

    #[test]
    fn test_plan_total_length_ranking() {
        let params = PathPlannerParams {
            ranking: RankingStrategy::TotalLength,
            ..Default::default()
        };
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(30.0, 10.0, 135.0);

        let path = PathPlanner::new(params).plan(&start, &goal, 5.0, &[]).unwrap();

        let shortest = selector::get_all_candidates(&start, &goal, 5.0, RankingStrategy::default())
            .iter()
            .map(|c| c.total_length_m())
            .fold(f64::INFINITY, f64::min);
        assert_eq!(path.candidate.total_length_m(), shortest);
    }

    #[test]
    fn test_plan_restricted_labels() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(20.0, 0.0, 0.0);
        let wall = Obstacle::from_corners(Vector2::new(8.0, -0.8), Vector2::new(12.0, 0.8));

        let (result, report) =
            planner().plan_with_report(&start, &goal, 2.0, &[], Some(&[CscLabel::rsr]));
        assert_eq!(result.unwrap().candidate.label, CscLabel::rsr);
        assert_eq!(report.candidates.len(), 1);

        let (result, _) =
            planner().plan_with_report(&start, &goal, 2.0, &[wall], Some(&[CscLabel::LSL]));
        assert!(matches!(result, Err(NavError::NoValidPath { num_tested: 1 })));

        let (result, _) = planner().plan_with_report(&start, &goal, 2.0, &[], Some(&[]));
        assert!(matches!(result, Err(NavError::NoValidPath { num_tested: 0 })));
    }
}
