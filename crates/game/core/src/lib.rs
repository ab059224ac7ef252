//! Deterministic sewing rules and data types shared by the advisor and tools.
//!
//! `sewing-core` defines the canonical rules (rule tables, grid topology, skill
//! shapes, outcome simulation) and the validated input snapshot consumed by the
//! advisor. Nothing in this crate performs I/O; supporting crates depend on the
//! types re-exported here.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Outcome, Shape, ShapeKind, Target, TargetCells, TargetList, enumerate_targets, simulate,
    stitch_power,
};
pub use config::{EngineConfig, ScoringWeights};
pub use env::{
    CONCENTRATION_BY_LEVEL, ClothCondition, NeedleKind, NeedleStats, SKILLS, SewingPower,
    SkillDefinition, SkillKind, concentration_for_level,
};
pub use error::{ErrorSeverity, SewingError};
pub use state::{
    CELL_NAMES, CellIndex, CellMask, DEFAULT_GRID, EngineInput, GridState, InputError, Loadout,
    PrecisionTracker, RegenerationNotice, Session, SimulatedGrid,
};
