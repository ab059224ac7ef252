//! Heuristic scoring of simulated outcomes.
//!
//! # Structured Scoring
//!
//! Every candidate gets a [`ScoreBreakdown`] with five additive components so
//! that a decision can be explained term by term:
//!
//! - **residual**: Σ|cell| over the simulated grid (drives toward clearing)
//! - **overshoot**: over-stitched magnitude × overshoot factor
//! - **efficiency**: penalties for low reduction per concentration
//! - **condition**: shaped skills on weak cloth
//! - **skill**: skill-specific penalties and bonuses ([`adjustments`])
//!
//! ## Score Formula
//!
//! ```text
//! final_score = residual + overshoot + efficiency + condition + skill
//! ```
//!
//! Lower is better.

pub mod adjustments;

use sewing_core::{
    ClothCondition, EngineInput, Outcome, ScoringWeights, SkillDefinition, SkillKind, Target,
};

/// Additive score of one candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Sum of absolute simulated cell values.
    pub residual: f64,

    /// Penalty for cells driven below zero.
    pub overshoot: f64,

    /// Penalty for low reduction per concentration spent.
    pub efficiency: f64,

    /// Penalty for range skills on weak cloth.
    pub condition: f64,

    /// Skill-specific adjustment; may be negative.
    pub skill: f64,
}

impl ScoreBreakdown {
    /// Final score; lower is better.
    pub fn value(&self) -> f64 {
        self.residual + self.overshoot + self.efficiency + self.condition + self.skill
    }
}

/// Scores a simulated candidate.
pub fn score(
    skill: &SkillDefinition,
    target: &Target,
    outcome: &Outcome,
    input: &EngineInput,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    ScoreBreakdown {
        residual: outcome.grid.absolute_total(),
        overshoot: outcome.grid.overshoot_total() * weights.overshoot_factor,
        efficiency: efficiency_penalty(skill.cost, outcome.reduction, weights),
        condition: condition_penalty(skill.kind, input.cloth(), weights),
        skill: adjustments::skill_adjustment(skill.kind, target, input, weights),
    }
}

/// Two independent thresholds; both penalties apply below the hard one.
pub fn efficiency_penalty(cost: u32, reduction: f64, weights: &ScoringWeights) -> f64 {
    if cost == 0 {
        return 0.0;
    }

    let efficiency = reduction / f64::from(cost);
    let mut penalty = 0.0;
    if efficiency < weights.efficiency_soft_threshold {
        penalty += weights.efficiency_penalty;
    }
    if efficiency < weights.efficiency_hard_threshold {
        penalty += weights.efficiency_penalty;
    }
    penalty
}

pub fn condition_penalty(skill: SkillKind, cloth: ClothCondition, weights: &ScoringWeights) -> f64 {
    if cloth.is_weak() && skill.is_shaped() {
        weights.weak_range_penalty
    } else {
        0.0
    }
}
