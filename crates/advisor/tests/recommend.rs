use sewing_advisor::{Advisor, Recommendation, recommend};
use sewing_core::{
    ClothCondition, DEFAULT_GRID, EngineConfig, EngineInput, GridState, Loadout, NeedleKind,
    ScoringWeights, SkillKind,
};

fn input(
    level: u8,
    needle: NeedleKind,
    concentration: Option<u32>,
    cloth: ClothCondition,
    grid: GridState,
) -> EngineInput {
    let loadout = Loadout::new(level, needle, 0).unwrap();
    let concentration = concentration.unwrap_or_else(|| loadout.max_concentration());
    EngineInput::new(&loadout, concentration, cloth, grid, 1).unwrap()
}

#[test]
fn level_ten_copper_stays_within_budget() {
    let input = input(
        10,
        NeedleKind::Copper,
        None,
        ClothCondition::Normal,
        GridState::new(DEFAULT_GRID),
    );
    assert_eq!(input.max_concentration(), 68);
    assert_eq!(input.base_crit_rate(), 0.010);

    let recommendation = recommend(&input);
    let action = recommendation.action().unwrap();
    let definition = action.skill.definition();

    assert!(action.cost <= 68);
    assert!(definition.required_level <= 10);
    assert!(!matches!(
        action.skill,
        SkillKind::Double | SkillKind::Triple | SkillKind::Nerai
    ));
    assert_eq!(action.cost, definition.cost);
    assert_eq!(action.skill_name, definition.name);
}

#[test]
fn cleared_grid_returns_sentinel() {
    let input = input(
        80,
        NeedleKind::Light,
        None,
        ClothCondition::Normal,
        GridState::cleared(),
    );

    let recommendation = recommend(&input);
    assert_eq!(recommendation, Recommendation::NoValidAction);
    assert!(!recommendation.is_action());
}

#[test]
fn recommendation_is_deterministic() {
    let input = input(
        45,
        NeedleKind::Silver,
        Some(90),
        ClothCondition::Strong,
        "80,0,35,12,60,0,5,44,90".parse().unwrap(),
    );

    let first = recommend(&input);
    let second = recommend(&input);
    assert_eq!(first, second);
    assert_eq!(first.score().to_bits(), second.score().to_bits());
}

#[test]
fn weak_cloth_avoids_power_and_range_skills() {
    let input = input(
        80,
        NeedleKind::Copper,
        Some(100),
        ClothCondition::Weak,
        GridState::new([40, 40, 40, 40, 40, 0, 0, 0, 0]),
    );

    let action = recommend(&input).action().cloned().unwrap();
    assert!(!action.skill.is_shaped());
    assert!(!action.skill.is_multiplied());
    assert_eq!(action.skill, SkillKind::Normal);
}

#[test]
fn last_stitch_prefers_exact_finish() {
    // 7.5 kagen power clears a 7 with little overshoot; the ordinary stitch
    // would overshoot by 8
    let input = input(
        40,
        NeedleKind::Copper,
        Some(50),
        ClothCondition::Normal,
        GridState::new([0, 0, 0, 0, 7, 0, 0, 0, 0]),
    );

    let action = recommend(&input).action().cloned().unwrap();
    assert_eq!(action.skill, SkillKind::Kagen);
    assert_eq!(action.target_name, "中段中");
}

#[test]
fn tuned_weights_change_the_choice() {
    let input = input(
        40,
        NeedleKind::Copper,
        Some(50),
        ClothCondition::Normal,
        GridState::new([0, 0, 0, 0, 7, 0, 0, 0, 0]),
    );

    let scoring = ScoringWeights {
        kagen_finish_bonus: -1000.0,
        ..ScoringWeights::default()
    };
    let advisor = Advisor::new(EngineConfig::with_scoring(scoring));

    let action = advisor.recommend(&input).action().cloned().unwrap();
    assert_ne!(action.skill, SkillKind::Kagen);
}

#[test]
fn display_names_skill_target_and_cost() {
    let input = input(
        1,
        NeedleKind::Copper,
        Some(5),
        ClothCondition::Normal,
        GridState::new([0, 0, 0, 0, 20, 0, 0, 0, 0]),
    );

    let text = recommend(&input).to_string();
    assert_eq!(text, "Use 普通に縫う on 中段中 (concentration cost: 5)");
}

#[test]
fn huge_cells_do_not_overflow_totals() {
    let input = input(
        80,
        NeedleKind::Copper,
        Some(100),
        ClothCondition::Normal,
        "2147483647,2147483647,1,1,1,1,1,1,1".parse().unwrap(),
    );

    let recommendation = recommend(&input);
    assert!(recommendation.is_action());
    assert!(recommendation.score().is_finite());
}
