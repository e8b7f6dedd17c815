//! # CSC path planning library.
//!
//! Plans short drivable paths between two poses for a car-like vehicle that can only drive
//! forwards or backwards along arcs of a single turning radius or along straight lines. Paths are
//! made of a circular arc, a straight segment and a second circular arc (CSC), and the shortest
//! candidate which does not collide with any of the given rectangular obstacles is selected.
//!
//! The data flow through the modules is:
//!
//! ```text
//! poses + radius -> csc (candidates) -> nav::selector (ranking) -> drive (instructions)
//!                -> sim (collision checking) -> nav::PathPlanner (first drivable)
//! ```
//!
//! Every function in this library is stateless, so concurrent callers need no coordination.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Localisation types - poses and turning circles of the vehicle
pub mod loc;

/// CSC path family solver - computes the circle-straight-circle candidates between two poses
pub mod csc;

/// Drive instructions - compiles candidates into turn/straight/turn instruction sequences
pub mod drive;

/// Kinematic simulation - forward simulates instructions and checks for obstacle collisions
pub mod sim;

/// Navigation - ranks candidates and selects the first drivable one
pub mod nav;

/// Conversions to and from the external planning interface
pub mod interface;
