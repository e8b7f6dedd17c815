//! Merges both CSC families and ranks the candidates.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use ordered_float::OrderedFloat;

use super::RankingStrategy;
use crate::csc::{self, CscCandidate};
use crate::loc::Pose;

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// All 16 candidates between `start` and `goal`, cheapest first.
///
/// The right family comes before the left family, and candidates with equal cost keep that order.
pub fn get_all_candidates(
    start: &Pose,
    goal: &Pose,
    turning_radius_m: f64,
    ranking: RankingStrategy,
) -> Vec<CscCandidate> {
    let mut candidates = csc::right_family(start, goal, turning_radius_m);
    candidates.extend(csc::left_family(start, goal, turning_radius_m));

    rank(&mut candidates, ranking);

    candidates
}

/// Stable sort of the candidates by the ranking's cost.
pub fn rank(candidates: &mut [CscCandidate], ranking: RankingStrategy) {
    candidates.sort_by_key(|c| OrderedFloat(cost(c, ranking)));
}

/// The cost of a candidate under the given ranking.
pub fn cost(candidate: &CscCandidate, ranking: RankingStrategy) -> f64 {
    match ranking {
        RankingStrategy::TurningCost => candidate.turning_cost_m(),
        RankingStrategy::TotalLength => candidate.total_length_m(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::csc::CscLabel;

    #[test]
    fn test_all_candidates_sorted() {
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(30.0, 10.0, 135.0);

        for &ranking in [RankingStrategy::TurningCost, RankingStrategy::TotalLength].iter() {
            let cands = get_all_candidates(&start, &goal, 5.0, ranking);

            assert_eq!(cands.len(), 16);
            for pair in cands.windows(2) {
                assert!(cost(&pair[0], ranking) <= cost(&pair[1], ranking));
            }

            // Every label appears exactly once
            for label in CscLabel::ALL.iter() {
                assert_eq!(cands.iter().filter(|c| c.label == *label).count(), 1);
            }
        }
    }

    #[test]
    fn test_ties_keep_family_order() {
        // Straight ahead, every candidate with a forward straight has no turning at all since
        // reversing a zero sweep is still a zero sweep
        let start = Pose::from_degrees(0.0, 0.0, 0.0);
        let goal = Pose::from_degrees(20.0, 0.0, 0.0);

        let cands = get_all_candidates(&start, &goal, 5.0, RankingStrategy::TurningCost);

        let expected = [
            CscLabel::RSR,
            CscLabel::RSr,
            CscLabel::rSR,
            CscLabel::rSr,
            CscLabel::LSL,
            CscLabel::LSl,
            CscLabel::lSL,
            CscLabel::lSl,
        ];
        for (cand, label) in cands.iter().zip(expected.iter()) {
            assert_eq!(cand.label, *label);
            assert_eq!(cand.turning_cost_m(), 0.0);
        }
        assert!(cands[8].turning_cost_m() > 0.0);
    }

    #[test]
    fn test_rankings_differ() {
        let mk = |label, arc1_m, straight_m, arc2_m| CscCandidate {
            label,
            arc1_m,
            straight_m,
            arc2_m,
        };

        // Less turning but much longer overall
        let long = mk(CscLabel::RSR, 1.0, 100.0, 1.0);
        let short = mk(CscLabel::LSL, 3.0, 1.0, 3.0);

        let mut cands = vec![short, long];
        rank(&mut cands, RankingStrategy::TurningCost);
        assert_eq!(cands[0].label, CscLabel::RSR);

        rank(&mut cands, RankingStrategy::TotalLength);
        assert_eq!(cands[0].label, CscLabel::LSL);
    }
}
