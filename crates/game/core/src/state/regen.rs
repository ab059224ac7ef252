use core::fmt;
use core::ops::RangeInclusive;

use crate::state::{CellIndex, GridState};

/// Notice shown on regeneration turns.
///
/// Every fourth turn the highest-value cell (at least [`Self::MIN_VALUE`])
/// recovers part of its value. Display only; the advisor ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegenerationNotice {
    pub turn: u32,
    /// Cell that will recover, or `None` if no cell qualifies.
    pub cell: Option<CellIndex>,
}

impl RegenerationNotice {
    pub const INTERVAL: u32 = 4;
    pub const MIN_VALUE: i32 = 5;
    pub const RECOVERY: RangeInclusive<i32> = 12..=16;

    pub const fn is_regeneration_turn(turn: u32) -> bool {
        turn > 0 && turn % Self::INTERVAL == 0
    }

    /// Returns the notice for `turn`, or `None` on ordinary turns.
    pub fn for_turn(turn: u32, grid: &GridState) -> Option<Self> {
        if !Self::is_regeneration_turn(turn) {
            return None;
        }

        // Strictly greater: the first of equal maxima wins.
        let mut best: Option<(CellIndex, i32)> = None;
        for cell in CellIndex::ALL {
            let value = grid.value(cell);
            if value >= Self::MIN_VALUE && best.is_none_or(|(_, max)| value > max) {
                best = Some((cell, value));
            }
        }

        Some(Self {
            turn,
            cell: best.map(|(cell, _)| cell),
        })
    }
}

impl fmt::Display for RegenerationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell {
            Some(cell) => write!(
                f,
                "Regeneration turn! {} will recover {}-{}.",
                cell.name(),
                Self::RECOVERY.start(),
                Self::RECOVERY.end()
            ),
            None => f.write_str("Regeneration turn, but no cell is eligible to recover."),
        }
    }
}
