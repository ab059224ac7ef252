//! Grid, input snapshot and caller-owned session state.
//!
//! [`EngineInput`] is the immutable snapshot handed to the advisor. [`Session`]
//! is the caller's authoritative record of the cloth between turns; it is the
//! only type here that mutates, and it never does so on the advisor's behalf.
mod error;
mod grid;
mod input;
mod regen;
mod session;
mod tracker;

pub use error::InputError;
pub use grid::{CELL_NAMES, CellIndex, CellMask, DEFAULT_GRID, GridState, SimulatedGrid};
pub use input::{EngineInput, Loadout};
pub use regen::RegenerationNotice;
pub use session::Session;
pub use tracker::PrecisionTracker;
