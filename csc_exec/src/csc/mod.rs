//! # Circle-Straight-Circle path family
//!
//! A CSC path is made up of an arc on a turning circle around the start pose, a straight segment
//! along a common tangent, and an arc on a turning circle around the goal pose. Only the families
//! where both circles turn the same way (RSR and LSL) are supported, along with their reversed
//! (prime) and mirrored variants, giving 16 labelled candidates.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod solver;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub use solver::{
    family, family_with_geometry, left_family, right_family, CENTRE_COINCIDENCE_EPS, SWEEP_EPS,
};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The sense in which both turning circles of a candidate are driven.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Turn {
    Left,
    Right,
}

/// The direction of travel along one segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Travel {
    Forward,
    Backward,
}

/// The label of a CSC candidate.
///
/// Each character gives one segment: `R`/`L` for an arc on the right/left turning circle and `S`
/// for the straight segment. Upper case segments are driven forwards, lower case segments are
/// driven backwards.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CscLabel {
    RSR,
    RSr,
    rSR,
    rSr,
    RsR,
    Rsr,
    rsR,
    rsr,
    LSL,
    LSl,
    lSL,
    lSl,
    LsL,
    Lsl,
    lsL,
    lsl,
}

#[derive(Debug, thiserror::Error)]
pub enum CscError {
    #[error("{0:?} is not a supported CSC path type")]
    UnsupportedPathType(String),
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// One labelled candidate path.
///
/// All lengths are non-negative magnitudes, the direction of each segment is carried by the label.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CscCandidate {
    pub label: CscLabel,

    /// Length of the arc around the start circle
    pub arc1_m: f64,

    /// Length of the straight tangent segment
    pub straight_m: f64,

    /// Length of the arc around the goal circle
    pub arc2_m: f64,
}

/// The construction points of one family, useful when inspecting why a candidate was chosen.
///
/// `C` and `D` are the tangent points on the start and goal circles used by candidates with a
/// forward straight, `C'` and `D'` those used by candidates with a backward straight.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CscGeometry {
    pub turn: Turn,
    pub centre_a_m: Vector2<f64>,
    pub centre_b_m: Vector2<f64>,
    pub tangent_c_m: Vector2<f64>,
    pub tangent_d_m: Vector2<f64>,
    pub mirror_c_m: Vector2<f64>,
    pub mirror_d_m: Vector2<f64>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl CscLabel {
    /// Every label, right family first then left family.
    pub const ALL: [CscLabel; 16] = [
        CscLabel::RSR,
        CscLabel::RSr,
        CscLabel::rSR,
        CscLabel::rSr,
        CscLabel::RsR,
        CscLabel::Rsr,
        CscLabel::rsR,
        CscLabel::rsr,
        CscLabel::LSL,
        CscLabel::LSl,
        CscLabel::lSL,
        CscLabel::lSl,
        CscLabel::LsL,
        CscLabel::Lsl,
        CscLabel::lsL,
        CscLabel::lsl,
    ];

    /// The 8 labels of one family, in the order the solver produces them.
    pub fn family(turn: Turn) -> &'static [CscLabel] {
        match turn {
            Turn::Right => &Self::ALL[..8],
            Turn::Left => &Self::ALL[8..],
        }
    }

    /// The turning sense and the travel direction of the first arc, straight, and second arc.
    pub fn parts(self) -> (Turn, [Travel; 3]) {
        use CscLabel::*;
        use Travel::{Backward as B, Forward as F};

        match self {
            RSR => (Turn::Right, [F, F, F]),
            RSr => (Turn::Right, [F, F, B]),
            rSR => (Turn::Right, [B, F, F]),
            rSr => (Turn::Right, [B, F, B]),
            RsR => (Turn::Right, [F, B, F]),
            Rsr => (Turn::Right, [F, B, B]),
            rsR => (Turn::Right, [B, B, F]),
            rsr => (Turn::Right, [B, B, B]),
            LSL => (Turn::Left, [F, F, F]),
            LSl => (Turn::Left, [F, F, B]),
            lSL => (Turn::Left, [B, F, F]),
            lSl => (Turn::Left, [B, F, B]),
            LsL => (Turn::Left, [F, B, F]),
            Lsl => (Turn::Left, [F, B, B]),
            lsL => (Turn::Left, [B, B, F]),
            lsl => (Turn::Left, [B, B, B]),
        }
    }

    pub fn turn(self) -> Turn {
        self.parts().0
    }

    pub fn travels(self) -> [Travel; 3] {
        self.parts().1
    }

    pub fn as_str(self) -> &'static str {
        use CscLabel::*;

        match self {
            RSR => "RSR",
            RSr => "RSr",
            rSR => "rSR",
            rSr => "rSr",
            RsR => "RsR",
            Rsr => "Rsr",
            rsR => "rsR",
            rsr => "rsr",
            LSL => "LSL",
            LSl => "LSl",
            lSL => "lSL",
            lSl => "lSl",
            LsL => "LsL",
            Lsl => "Lsl",
            lsL => "lsL",
            lsl => "lsl",
        }
    }
}

impl fmt::Display for CscLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CscLabel {
    type Err = CscError;

    /// Parse a label, which is case sensitive since case gives the direction of travel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|l| l.as_str() == s)
            .copied()
            .ok_or_else(|| CscError::UnsupportedPathType(s.into()))
    }
}

impl CscCandidate {
    /// Combined length of both arcs.
    pub fn turning_cost_m(&self) -> f64 {
        self.arc1_m + self.arc2_m
    }

    /// Physical length of the whole path.
    pub fn total_length_m(&self) -> f64 {
        self.arc1_m + self.straight_m + self.arc2_m
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_label_parsing() {
        for label in CscLabel::ALL.iter() {
            assert_eq!(label.as_str().parse::<CscLabel>().unwrap(), *label);
            assert_eq!(format!("{}", label), label.as_str());
        }

        assert!(matches!(
            "RLR".parse::<CscLabel>(),
            Err(CscError::UnsupportedPathType(_))
        ));
        assert!("rsl".parse::<CscLabel>().is_err());
        assert!("".parse::<CscLabel>().is_err());
    }

    #[test]
    fn test_label_parts_match_characters() {
        for label in CscLabel::ALL.iter() {
            let chars: Vec<char> = label.as_str().chars().collect();
            let (turn, travels) = label.parts();

            let expected_turn = match chars[0] {
                'R' | 'r' => Turn::Right,
                _ => Turn::Left,
            };
            assert_eq!(turn, expected_turn);
            assert_eq!(chars[0].to_ascii_uppercase(), chars[2].to_ascii_uppercase());
            assert_eq!(chars[1].to_ascii_uppercase(), 'S');

            for (c, travel) in chars.iter().zip(travels.iter()) {
                let expected = if c.is_uppercase() {
                    Travel::Forward
                } else {
                    Travel::Backward
                };
                assert_eq!(*travel, expected, "label {}", label);
            }
        }
    }

    #[test]
    fn test_families_partition_labels() {
        assert_eq!(CscLabel::family(Turn::Right).len(), 8);
        assert_eq!(CscLabel::family(Turn::Left).len(), 8);
        assert!(CscLabel::family(Turn::Right)
            .iter()
            .all(|l| l.turn() == Turn::Right));
        assert!(CscLabel::family(Turn::Left)
            .iter()
            .all(|l| l.turn() == Turn::Left));
    }

    #[test]
    fn test_candidate_costs() {
        let cand = CscCandidate {
            label: CscLabel::LsL,
            arc1_m: 1.5,
            straight_m: 10.0,
            arc2_m: 2.0,
        };

        assert_eq!(cand.turning_cost_m(), 3.5);
        assert_eq!(cand.total_length_m(), 13.5);
    }
}
