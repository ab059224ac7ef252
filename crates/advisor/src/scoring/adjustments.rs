//! Skill-specific score adjustments.
//!
//! Adjustments read the pre-action value of the target's primary cell, never
//! the simulated one.

use sewing_core::{EngineInput, ScoringWeights, SkillKind, Target};

/// Penalty (positive) or bonus (negative) for using `skill` on `target`.
pub fn skill_adjustment(
    skill: SkillKind,
    target: &Target,
    input: &EngineInput,
    weights: &ScoringWeights,
) -> f64 {
    let value = f64::from(input.grid().value(target.primary()));

    match skill {
        SkillKind::Nerai => precision_adjustment(value, input, weights),
        SkillKind::Double => power_adjustment(value, weights.double_floor, input, weights),
        SkillKind::Triple => power_adjustment(value, weights.triple_floor, input, weights),
        SkillKind::Kagen if value < weights.kagen_finish_threshold => -weights.kagen_finish_bonus,
        skill if skill.is_shaped() => {
            let total = input.grid().positive_total() as f64;
            if total > weights.range_total_threshold {
                -weights.range_total_bonus
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

fn precision_adjustment(value: f64, input: &EngineInput, weights: &ScoringWeights) -> f64 {
    let mut adjustment = 0.0;

    if value < weights.precision_value_min || value > weights.precision_value_max {
        adjustment += weights.precision_out_of_range_penalty;
    }
    if input.cloth().is_weak() {
        adjustment += weights.precision_weak_penalty;
    }

    // Spending precision while concentration is plentiful wastes the crit bonus.
    let hoard = f64::from(input.max_concentration()) * weights.precision_hoard_ratio;
    if f64::from(input.concentration()) > hoard {
        adjustment += weights.precision_hoard_penalty;
    }

    adjustment
}

fn power_adjustment(value: f64, floor: f64, input: &EngineInput, weights: &ScoringWeights) -> f64 {
    let mut adjustment = 0.0;

    if input.cloth().is_weak() {
        adjustment += weights.power_weak_penalty;
    }
    if value < floor {
        adjustment += weights.power_waste_penalty;
    }

    adjustment
}
