//! Validated input snapshot for the advisor.

use crate::config::EngineConfig;
use crate::env::{ClothCondition, NeedleKind, SkillDefinition, concentration_for_level};
use crate::state::{GridState, InputError};

/// Player level and needle, fixed for a whole sewing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    level: u8,
    needle: NeedleKind,
    stars: u8,
}

impl Loadout {
    /// Validates level and star tier against the rule tables.
    pub fn new(level: u8, needle: NeedleKind, stars: u8) -> Result<Self, InputError> {
        if level > EngineConfig::MAX_LEVEL {
            return Err(InputError::LevelOutOfRange {
                level,
                max: EngineConfig::MAX_LEVEL,
            });
        }
        if stars as usize >= EngineConfig::STAR_TIERS {
            return Err(InputError::StarTierOutOfRange {
                stars,
                max: (EngineConfig::STAR_TIERS - 1) as u8,
            });
        }
        Ok(Self {
            level,
            needle,
            stars,
        })
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn needle(&self) -> NeedleKind {
        self.needle
    }

    pub const fn stars(&self) -> u8 {
        self.stars
    }

    /// Level concentration plus the needle's bonus.
    pub fn max_concentration(&self) -> u32 {
        // Level was range-checked in `new`.
        concentration_for_level(self.level).unwrap_or_default()
            + self.needle.stats().concentration_bonus
    }

    /// Needle critical rate for the star tier.
    pub fn base_crit_rate(&self) -> f64 {
        self.needle.stats().crit_by_star[self.stars as usize]
    }
}

/// Immutable snapshot of one turn, consumed by the advisor.
///
/// Built fresh for every recommendation; the advisor never mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineInput {
    level: u8,
    base_crit_rate: f64,
    max_concentration: u32,
    concentration: u32,
    cloth: ClothCondition,
    grid: GridState,
    turn: u32,
}

impl EngineInput {
    /// Builds a snapshot, rejecting concentration above the loadout maximum.
    pub fn new(
        loadout: &Loadout,
        concentration: u32,
        cloth: ClothCondition,
        grid: GridState,
        turn: u32,
    ) -> Result<Self, InputError> {
        let max_concentration = loadout.max_concentration();
        if concentration > max_concentration {
            return Err(InputError::ConcentrationExceedsMax {
                current: concentration,
                max: max_concentration,
            });
        }
        Ok(Self {
            level: loadout.level(),
            base_crit_rate: loadout.base_crit_rate(),
            max_concentration,
            concentration,
            cloth,
            grid,
            turn,
        })
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn base_crit_rate(&self) -> f64 {
        self.base_crit_rate
    }

    pub const fn max_concentration(&self) -> u32 {
        self.max_concentration
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

    /// Returns true if the skill is unlocked and affordable this turn.
    pub const fn can_use(&self, skill: &SkillDefinition) -> bool {
        skill.is_unlocked(self.level) && skill.is_affordable(self.concentration)
    }
}
