//! # Planning interface crate.
//!
//! Provides the shapes exchanged between the path planner and its external collaborators (pose
//! and obstacle editors, command line tools, test harnesses). Nothing in here plans, it only
//! defines what goes in and what comes out of a planning request.
//!
//! The planner is stateless, every [`request::PlanRequest`] must carry everything needed to
//! plan.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Planning requests (poses, turning radius, obstacles)
pub mod request;

/// Planning responses (drive instructions or a typed failure)
pub mod response;

// ------------------------------------------------------------------------------------------------
// REEXPORTS
// ------------------------------------------------------------------------------------------------

pub use request::{AngleUnit, ObstacleSpec, PlanRequest, PoseSpec};
pub use response::{DirectionSpec, FailureKind, InstructionSpec, PlanResponse};
