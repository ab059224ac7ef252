use std::collections::HashSet;

use proptest::prelude::*;
use sewing_advisor::{Advisor, Recommendation, recommend};
use sewing_core::{
    ClothCondition, EngineInput, GridState, Loadout, NeedleKind, SkillKind, enumerate_targets,
};
use strum::IntoEnumIterator;

fn cloth_strategy() -> impl Strategy<Value = ClothCondition> {
    prop_oneof![
        Just(ClothCondition::Normal),
        Just(ClothCondition::Weak),
        Just(ClothCondition::Strong),
        Just(ClothCondition::Strongest),
    ]
}

fn grid_strategy() -> impl Strategy<Value = [i32; 9]> {
    prop::array::uniform9(-20i32..=120)
}

fn build(level: u8, concentration: u32, cloth: ClothCondition, values: [i32; 9]) -> EngineInput {
    let loadout = Loadout::new(level, NeedleKind::Copper, 0).unwrap();
    let concentration = concentration.min(loadout.max_concentration());
    EngineInput::new(&loadout, concentration, cloth, GridState::new(values), 1).unwrap()
}

proptest! {
    #[test]
    fn prop_active_grid_always_has_an_action(
        level in 1u8..=80,
        concentration in 5u32..=200,
        cloth in cloth_strategy(),
        values in grid_strategy(),
    ) {
        prop_assume!(values.iter().any(|&v| v > 0));

        let input = build(level, concentration, cloth, values);
        prop_assert!(recommend(&input).is_action());
    }

    #[test]
    fn prop_inactive_grid_yields_sentinel(
        level in 0u8..=80,
        concentration in 0u32..=200,
        cloth in cloth_strategy(),
        values in prop::array::uniform9(-50i32..=0),
    ) {
        let input = build(level, concentration, cloth, values);
        prop_assert_eq!(recommend(&input), Recommendation::NoValidAction);
    }

    #[test]
    fn prop_extreme_cell_values_score_finitely(
        values in prop::array::uniform9(any::<i32>()),
    ) {
        let input = build(80, 196, ClothCondition::Normal, values);
        let recommendation = recommend(&input);
        if values.iter().any(|&v| v > 0) {
            prop_assert!(recommendation.score().is_finite());
        } else {
            prop_assert_eq!(recommendation, Recommendation::NoValidAction);
        }
    }

    #[test]
    fn prop_recommendation_is_deterministic(
        level in 0u8..=80,
        concentration in 0u32..=200,
        cloth in cloth_strategy(),
        values in grid_strategy(),
    ) {
        let input = build(level, concentration, cloth, values);
        prop_assert_eq!(recommend(&input), recommend(&input));
    }

    #[test]
    fn prop_more_concentration_never_removes_candidates(
        low in 0u32..=120,
        extra in 0u32..=76,
        cloth in cloth_strategy(),
        values in grid_strategy(),
    ) {
        let advisor = Advisor::default();
        let key = |input: &EngineInput| -> HashSet<(SkillKind, String)> {
            advisor
                .evaluate_all(input)
                .into_iter()
                .map(|c| (c.skill.kind, c.target.label().to_owned()))
                .collect()
        };

        let before = key(&build(80, low, cloth, values));
        let after = key(&build(80, low + extra, cloth, values));
        prop_assert!(before.is_subset(&after));
    }

    #[test]
    fn prop_targets_never_touch_inactive_cells(values in grid_strategy()) {
        let grid = GridState::new(values);
        for skill in SkillKind::iter() {
            for target in enumerate_targets(skill, &grid) {
                prop_assert!(target.cells().iter().all(|&cell| grid.is_active(cell)));
            }
        }
    }

    #[test]
    fn prop_recommended_action_is_affordable_and_unlocked(
        level in 0u8..=80,
        concentration in 0u32..=200,
        cloth in cloth_strategy(),
        values in grid_strategy(),
    ) {
        let input = build(level, concentration, cloth, values);
        if let Some(action) = recommend(&input).action() {
            let definition = action.skill.definition();
            prop_assert!(definition.cost <= input.concentration());
            prop_assert!(definition.required_level <= input.level());
            prop_assert!(action.cells.iter().all(|&cell| input.grid().is_active(cell)));
        }
    }
}
