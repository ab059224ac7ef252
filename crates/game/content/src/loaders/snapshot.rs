//! Turn snapshot loader.
//!
//! A snapshot records everything the advisor needs for one turn, so a game
//! state can be saved next to a recommendation and replayed later.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sewing_core::{
    ClothCondition, DEFAULT_GRID, EngineInput, GridState, Loadout, NeedleKind, PrecisionTracker,
    Session,
};

use crate::loaders::{LoadResult, read_file};

/// Snapshot data structure for RON files.
///
/// ```ron
/// (
///     level: 40,
///     needle: silver,
///     stars: 2,
///     concentration: Some(90),
///     cloth: weak,
///     grid: [95, 40, 95, 60, 60, 60, 75, 40, 75],
///     turn: 4,
///     precision_attempts: 3,
///     precision_successes: 1,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub level: u8,
    #[serde(default)]
    pub needle: NeedleKind,
    #[serde(default)]
    pub stars: u8,
    /// Current concentration; `None` means full.
    #[serde(default)]
    pub concentration: Option<u32>,
    #[serde(default)]
    pub cloth: ClothCondition,
    #[serde(default = "default_grid")]
    pub grid: Vec<i32>,
    #[serde(default = "default_turn")]
    pub turn: u32,
    /// Precision-skill tally carried between turns.
    #[serde(default)]
    pub precision_attempts: u32,
    #[serde(default)]
    pub precision_successes: u32,
}

fn default_grid() -> Vec<i32> {
    DEFAULT_GRID.to_vec()
}

fn default_turn() -> u32 {
    1
}

impl TurnSnapshot {
    /// Validates the snapshot into a session positioned at the saved turn.
    pub fn into_session(self) -> LoadResult<Session> {
        let loadout = Loadout::new(self.level, self.needle, self.stars)?;

        let mut session = Session::new(loadout);
        session.set_grid(GridState::from_slice(&self.grid)?);
        session.set_cloth(self.cloth);
        session.set_turn(self.turn)?;
        if let Some(concentration) = self.concentration {
            session.set_concentration(concentration)?;
        }
        session.set_precision(PrecisionTracker::from_counts(
            self.precision_attempts,
            self.precision_successes,
        )?);

        Ok(session)
    }

    /// Validates the snapshot into an advisor input.
    pub fn into_input(self) -> LoadResult<EngineInput> {
        Ok(self.into_session()?.snapshot()?)
    }
}

/// Loader for turn snapshots from RON files.
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load a snapshot from a RON file.
    pub fn load(path: &Path) -> LoadResult<TurnSnapshot> {
        let content = read_file(path)?;
        let snapshot: TurnSnapshot = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse snapshot RON: {}", e))?;

        Ok(snapshot)
    }

    /// Load a snapshot and validate it into a session.
    pub fn load_session(path: &Path) -> LoadResult<Session> {
        Self::load(path)?
            .into_session()
            .with_context(|| format!("Invalid snapshot {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sewing_core::InputError;

    use super::*;

    fn write_snapshot(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_full_snapshot() {
        let file = write_snapshot(
            "(level: 40, needle: silver, stars: 2, concentration: Some(90), \
             cloth: weak, grid: [0, 40, 95, 60, 60, 60, 75, 40, 75], turn: 4)",
        );

        let snapshot = SnapshotLoader::load(file.path()).unwrap();
        assert_eq!(snapshot.needle, NeedleKind::Silver);
        assert_eq!(snapshot.cloth, ClothCondition::Weak);
        assert_eq!(snapshot.concentration, Some(90));

        let input = snapshot.into_input().unwrap();
        assert_eq!(input.concentration(), 90);
        assert_eq!(input.turn(), 4);
        assert_eq!(input.grid().values()[0], 0);
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let file = write_snapshot("(level: 10)");

        let input = SnapshotLoader::load_session(file.path())
            .unwrap()
            .snapshot()
            .unwrap();
        assert_eq!(input.max_concentration(), 68);
        assert_eq!(input.concentration(), 68);
        assert_eq!(input.cloth(), ClothCondition::Normal);
        assert_eq!(input.grid(), &GridState::default());
        assert_eq!(input.turn(), 1);
    }

    #[test]
    fn invalid_grid_length_is_an_input_error() {
        let snapshot = TurnSnapshot {
            level: 10,
            needle: NeedleKind::Copper,
            stars: 0,
            concentration: None,
            cloth: ClothCondition::Normal,
            grid: vec![1, 2, 3],
            turn: 1,
            precision_attempts: 0,
            precision_successes: 0,
        };

        let err = snapshot.into_input().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::GridLength {
                expected: 9,
                actual: 3
            })
        ));
    }

    #[test]
    fn concentration_above_max_is_rejected() {
        let file = write_snapshot("(level: 10, concentration: Some(500))");

        let err = SnapshotLoader::load_session(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid snapshot"));
    }

    #[test]
    fn precision_tally_is_restored() {
        let file = write_snapshot("(level: 30, precision_attempts: 4, precision_successes: 1)");

        let session = SnapshotLoader::load_session(file.path()).unwrap();
        assert_eq!(session.precision().attempts(), 4);
        assert_eq!(session.precision().successes(), 1);
        assert_eq!(session.precision().actual_rate_percent(), 25.0);
    }

    #[test]
    fn inconsistent_precision_tally_is_rejected() {
        let file = write_snapshot("(level: 30, precision_attempts: 1, precision_successes: 2)");

        let err = SnapshotLoader::load_session(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::PrecisionCounts { .. })
        ));
    }

    #[test]
    fn turn_zero_is_rejected() {
        let file = write_snapshot("(level: 30, turn: 0)");

        let err = SnapshotLoader::load_session(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::TurnOutOfRange { turn: 0, min: 1 })
        ));
    }

    #[test]
    fn unknown_needle_fails_to_parse() {
        let file = write_snapshot("(level: 10, needle: wooden)");
        assert!(SnapshotLoader::load(file.path()).is_err());
    }
}
