//! Input validation errors.

use crate::error::{ErrorSeverity, SewingError};

/// Errors raised while building an input snapshot or updating a session.
///
/// These are caller mistakes (out-of-range lookups, malformed grids) and are
/// reported before the advisor runs. "No valid action" is not an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Player level is past the end of the concentration table.
    #[error("player level {level} is out of range (max {max})")]
    LevelOutOfRange { level: u8, max: u8 },

    /// Needle star tier is not one of the four tiers.
    #[error("needle star tier {stars} is out of range (max {max})")]
    StarTierOutOfRange { stars: u8, max: u8 },

    /// Needle name does not match any needle kind.
    #[error("unknown needle kind '{0}'")]
    UnknownNeedle(String),

    /// Cloth condition name does not match any condition.
    #[error("unknown cloth condition '{0}'")]
    UnknownCloth(String),

    /// Current concentration is larger than the loadout's maximum.
    #[error("concentration {current} exceeds max concentration {max}")]
    ConcentrationExceedsMax { current: u32, max: u32 },

    /// Not enough concentration left to pay a cost.
    #[error("insufficient concentration: need {required}, have {available}")]
    InsufficientConcentration { required: u32, available: u32 },

    /// Grid does not have exactly nine cells.
    #[error("grid must have {expected} cells, got {actual}")]
    GridLength { expected: usize, actual: usize },

    /// Turn counter below the first turn.
    #[error("turn {turn} is out of range (turns start at {min})")]
    TurnOutOfRange { turn: u32, min: u32 },

    /// More critical successes recorded than precision attempts.
    #[error("precision successes {successes} exceed attempts {attempts}")]
    PrecisionCounts { attempts: u32, successes: u32 },

    /// A grid cell could not be parsed as an integer.
    #[error("invalid cell value '{0}'")]
    InvalidCellValue(String),
}

impl SewingError for InputError {
    fn severity(&self) -> ErrorSeverity {
        use InputError::*;
        match self {
            InsufficientConcentration { .. } => ErrorSeverity::Recoverable,

            LevelOutOfRange { .. }
            | StarTierOutOfRange { .. }
            | UnknownNeedle(_)
            | UnknownCloth(_)
            | ConcentrationExceedsMax { .. }
            | GridLength { .. }
            | TurnOutOfRange { .. }
            | PrecisionCounts { .. }
            | InvalidCellValue(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use InputError::*;
        match self {
            LevelOutOfRange { .. } => "INPUT_LEVEL_OUT_OF_RANGE",
            StarTierOutOfRange { .. } => "INPUT_STAR_TIER_OUT_OF_RANGE",
            UnknownNeedle(_) => "INPUT_UNKNOWN_NEEDLE",
            UnknownCloth(_) => "INPUT_UNKNOWN_CLOTH",
            ConcentrationExceedsMax { .. } => "INPUT_CONCENTRATION_EXCEEDS_MAX",
            InsufficientConcentration { .. } => "INPUT_INSUFFICIENT_CONCENTRATION",
            GridLength { .. } => "INPUT_GRID_LENGTH",
            TurnOutOfRange { .. } => "INPUT_TURN_OUT_OF_RANGE",
            PrecisionCounts { .. } => "INPUT_PRECISION_COUNTS",
            InvalidCellValue(_) => "INPUT_INVALID_CELL_VALUE",
        }
    }
}
