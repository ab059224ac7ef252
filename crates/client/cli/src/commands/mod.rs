//! Subcommands of the `sewing` binary.

mod loadout;
mod recommend;
mod regen;

pub use loadout::Loadout;
pub use recommend::Recommend;
pub use regen::Regen;

use anyhow::{Context, Result};
use sewing_core::{GridState, NeedleKind};

/// Builds a validated loadout from raw flag values.
fn parse_loadout(level: u8, needle: &str, stars: u8) -> Result<sewing_core::Loadout> {
    let needle = NeedleKind::parse(needle)?;
    Ok(sewing_core::Loadout::new(level, needle, stars)?)
}

/// Parses `--grid`, falling back to the fresh-cloth grid.
fn parse_grid(grid: Option<&str>) -> Result<GridState> {
    match grid {
        Some(text) => text
            .parse()
            .with_context(|| format!("Invalid --grid value: {text}")),
        None => Ok(GridState::default()),
    }
}
