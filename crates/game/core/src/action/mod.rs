//! Target enumeration and outcome simulation.
//!
//! A candidate action is a (skill, target) pair. [`enumerate_targets`] lists
//! the legal targets of a skill on the current grid and [`simulate`] computes
//! the expected grid after using the skill on one of them.
mod simulate;
mod targeting;

pub use simulate::{Outcome, simulate, stitch_power};
pub use targeting::{Shape, ShapeKind, Target, TargetCells, TargetList, enumerate_targets};
