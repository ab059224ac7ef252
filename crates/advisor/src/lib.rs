//! Action scoring and best-action selection.
//!
//! The advisor enumerates every (skill, target) pair that is unlocked and
//! affordable, simulates each one, scores the simulated grid and returns the
//! minimum-score choice:
//!
//! 1. **Targets** ([`sewing_core::enumerate_targets`]): legal placements
//! 2. **Outcome** ([`sewing_core::simulate`]): expected grid after the action
//! 3. **Score** ([`scoring`]): weighted heuristic, lower is better
//! 4. **Selection** ([`selector`]): global minimum, first candidate wins ties
//!
//! # Determinism
//!
//! A recommendation is a pure function of the [`sewing_core::EngineInput`]
//! snapshot and the [`sewing_core::EngineConfig`]: no randomness, no I/O.
pub mod recommendation;
pub mod scoring;
pub mod selector;

pub use recommendation::{Recommendation, RecommendedAction};
pub use scoring::ScoreBreakdown;
pub use selector::{Advisor, Candidate, recommend};
