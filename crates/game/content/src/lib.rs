//! Data-driven configuration and turn snapshots.
//!
//! This crate provides loaders for TOML/RON data files:
//! - Engine configuration (scoring weights, precision bonus) via TOML
//! - Turn snapshots (loadout, concentration, cloth, grid, turn) via RON
//!
//! All loaders use sewing-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, SnapshotLoader, TurnSnapshot};
