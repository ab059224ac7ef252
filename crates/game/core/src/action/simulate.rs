//! Expected-value outcome simulation.
//!
//! The simulation is a single deterministic expectation, not a random draw:
//! the precision skill blends its critical (full clear) and ordinary results by
//! the critical rate, every other skill subtracts its power outright.

use crate::config::EngineConfig;
use crate::env::{ClothCondition, SkillKind};
use crate::state::{CellIndex, EngineInput, SimulatedGrid};

/// Hypothetical result of one action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    /// Grid after the action; cells may be fractional or negative.
    pub grid: SimulatedGrid,
    /// Expected value removed across the target cells.
    pub reduction: f64,
}

/// Per-cell power of `skill` on `cloth`.
///
/// The reduced-power skill uses the cloth's own kagen value (not a multiplier);
/// double and triple scale the ordinary power.
pub fn stitch_power(skill: SkillKind, cloth: ClothCondition) -> f64 {
    let power = cloth.sewing_power();
    match skill {
        SkillKind::Kagen => power.kagen,
        SkillKind::Double => power.normal * 2.0,
        SkillKind::Triple => power.normal * 3.0,
        _ => power.normal,
    }
}

/// Simulates `skill` on `cells`.
///
/// Returns `None` if any target cell is already at or below zero; the target
/// enumerator never produces such targets, so callers simply skip them.
pub fn simulate(
    skill: SkillKind,
    cells: &[CellIndex],
    input: &EngineInput,
    config: &EngineConfig,
) -> Option<Outcome> {
    let grid = input.grid();
    if cells.iter().any(|&cell| !grid.is_active(cell)) {
        return None;
    }

    let power = stitch_power(skill, input.cloth());
    let mut simulated = grid.to_simulated();
    let mut reduction = 0.0;

    for &cell in cells {
        let original = f64::from(grid.value(cell));

        if skill == SkillKind::Nerai {
            let crit_rate = input.base_crit_rate() + config.precision_crit_bonus;
            let ordinary = original - power;
            let critical = 0.0;
            let expected = ordinary * (1.0 - crit_rate) + critical * crit_rate;

            reduction += original - expected;
            simulated.set(cell, expected);
        } else {
            reduction += original.min(power);
            simulated.set(cell, original - power);
        }
    }

    Some(Outcome {
        grid: simulated,
        reduction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::NeedleKind;
    use crate::state::{GridState, Loadout};

    const EPSILON: f64 = 1e-9;

    fn input(grid: GridState, cloth: ClothCondition, needle: NeedleKind, stars: u8) -> EngineInput {
        let loadout = Loadout::new(40, needle, stars).unwrap();
        EngineInput::new(&loadout, 100, cloth, grid, 1).unwrap()
    }

    #[test]
    fn precision_blends_critical_clear() {
        // Silver at 0 stars has a 0.02 base rate.
        let grid = GridState::new([30, 0, 0, 0, 0, 0, 0, 0, 0]);
        let input = input(grid, ClothCondition::Normal, NeedleKind::Silver, 0);

        let outcome = simulate(
            SkillKind::Nerai,
            &[CellIndex::TOP_LEFT],
            &input,
            &EngineConfig::default(),
        )
        .unwrap();

        assert!((outcome.grid.value(CellIndex::TOP_LEFT) - 11.7).abs() < EPSILON);
        assert!((outcome.reduction - 18.3).abs() < EPSILON);
    }

    #[test]
    fn overshoot_goes_negative_but_reduction_is_capped() {
        let grid = GridState::new([10, 0, 0, 0, 0, 0, 0, 0, 0]);
        let input = input(grid, ClothCondition::Normal, NeedleKind::Copper, 0);

        let outcome = simulate(
            SkillKind::Double,
            &[CellIndex::TOP_LEFT],
            &input,
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(outcome.grid.value(CellIndex::TOP_LEFT), -20.0);
        assert_eq!(outcome.reduction, 10.0);
    }

    #[test]
    fn shaped_skills_sum_reduction_over_cells() {
        let input = input(
            GridState::default(),
            ClothCondition::Strong,
            NeedleKind::Copper,
            0,
        );

        let row = [CellIndex::TOP_LEFT, CellIndex::TOP_CENTER, CellIndex::TOP_RIGHT];
        let outcome = simulate(SkillKind::Suihei, &row, &input, &EngineConfig::default()).unwrap();

        assert_eq!(outcome.reduction, 66.0);
        assert_eq!(outcome.grid.value(CellIndex::TOP_CENTER), 18.0);
        assert_eq!(outcome.grid.value(CellIndex::CENTER), 60.0);
    }

    #[test]
    fn inactive_cell_invalidates_simulation() {
        let grid = GridState::new([0, 10, 0, 0, 0, 0, 0, 0, 0]);
        let input = input(grid, ClothCondition::Normal, NeedleKind::Copper, 0);

        let outcome = simulate(
            SkillKind::Yoko,
            &[CellIndex::TOP_LEFT, CellIndex::TOP_CENTER],
            &input,
            &EngineConfig::default(),
        );
        assert_eq!(outcome, None);
    }

    #[test]
    fn kagen_uses_cloth_power_directly() {
        assert_eq!(stitch_power(SkillKind::Kagen, ClothCondition::Weak), 3.5);
        assert_eq!(stitch_power(SkillKind::Triple, ClothCondition::Strongest), 90.0);
        assert_eq!(stitch_power(SkillKind::Otaki, ClothCondition::Normal), 15.0);
    }
}
