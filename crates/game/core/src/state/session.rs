//! Caller-owned record of a sewing session.

use crate::env::ClothCondition;
use crate::state::{
    EngineInput, GridState, InputError, Loadout, PrecisionTracker, RegenerationNotice,
};

/// Authoritative turn state kept between recommendations.
///
/// The session starts at full concentration on turn 1 with the default grid
/// and normal cloth. Each call to [`Session::snapshot`] produces a fresh
/// [`EngineInput`]; nothing the advisor does flows back into the session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    loadout: Loadout,
    concentration: u32,
    cloth: ClothCondition,
    grid: GridState,
    turn: u32,
    precision: PrecisionTracker,
}

impl Session {
    pub const FIRST_TURN: u32 = 1;

    pub fn new(loadout: Loadout) -> Self {
        Self {
            loadout,
            concentration: loadout.max_concentration(),
            cloth: ClothCondition::default(),
            grid: GridState::default(),
            turn: Self::FIRST_TURN,
            precision: PrecisionTracker::new(),
        }
    }

    pub const fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub const fn concentration(&self) -> u32 {
        self.concentration
    }

    pub const fn cloth(&self) -> ClothCondition {
        self.cloth
    }

    pub const fn grid(&self) -> &GridState {
        &self.grid
    }

    pub const fn turn(&self) -> u32 {
        self.turn
    }

    pub const fn precision(&self) -> &PrecisionTracker {
        &self.precision
    }

    pub fn precision_mut(&mut self) -> &mut PrecisionTracker {
        &mut self.precision
    }

    /// Immutable snapshot for the advisor.
    pub fn snapshot(&self) -> Result<EngineInput, InputError> {
        EngineInput::new(
            &self.loadout,
            self.concentration,
            self.cloth,
            self.grid,
            self.turn,
        )
    }

    pub fn set_grid(&mut self, grid: GridState) {
        self.grid = grid;
    }

    pub fn set_cloth(&mut self, cloth: ClothCondition) {
        self.cloth = cloth;
    }

    pub fn set_concentration(&mut self, concentration: u32) -> Result<(), InputError> {
        let max = self.loadout.max_concentration();
        if concentration > max {
            return Err(InputError::ConcentrationExceedsMax {
                current: concentration,
                max,
            });
        }
        self.concentration = concentration;
        Ok(())
    }

    /// Deducts a skill cost from the remaining concentration.
    pub fn spend(&mut self, cost: u32) -> Result<u32, InputError> {
        self.concentration = self.concentration.checked_sub(cost).ok_or(
            InputError::InsufficientConcentration {
                required: cost,
                available: self.concentration,
            },
        )?;
        Ok(self.concentration)
    }

    /// Sets the turn counter; turns start at 1.
    pub fn set_turn(&mut self, turn: u32) -> Result<(), InputError> {
        if turn < Self::FIRST_TURN {
            return Err(InputError::TurnOutOfRange {
                turn,
                min: Self::FIRST_TURN,
            });
        }
        self.turn = turn;
        Ok(())
    }

    /// Replaces the precision tally, e.g. when restoring a saved turn.
    pub fn set_precision(&mut self, precision: PrecisionTracker) {
        self.precision = precision;
    }

    pub fn advance_turn(&mut self) -> u32 {
        self.turn = self.turn.saturating_add(1);
        self.turn
    }

    pub fn rewind_turn(&mut self) -> u32 {
        self.turn = self.turn.saturating_sub(1).max(Self::FIRST_TURN);
        self.turn
    }

    pub fn regeneration_notice(&self) -> Option<RegenerationNotice> {
        RegenerationNotice::for_turn(self.turn, &self.grid)
    }
}
