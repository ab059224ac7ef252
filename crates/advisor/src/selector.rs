//! Best-action selection.
//!
//! Exhaustive search over the skill table: 11 skills with at most 9 targets
//! each. Candidates are visited in skill-table order, then target order, and
//! a strict less-than comparison keeps the first candidate on ties.

use sewing_core::{
    EngineConfig, EngineInput, Outcome, SKILLS, SkillDefinition, Target, enumerate_targets,
    simulate,
};

use crate::recommendation::{Recommendation, RecommendedAction};
use crate::scoring::{self, ScoreBreakdown};

/// One scored (skill, target) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub skill: &'static SkillDefinition,
    pub target: Target,
    pub outcome: Outcome,
    pub score: ScoreBreakdown,
}

/// Scores every legal action and picks the minimum.
#[derive(Clone, Debug, Default)]
pub struct Advisor {
    config: EngineConfig,
}

impl Advisor {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the lowest-scoring action, or the sentinel when none qualifies.
    pub fn recommend(&self, input: &EngineInput) -> Recommendation {
        let mut best: Option<Candidate> = None;
        let mut best_score = f64::INFINITY;

        tracing::debug!(
            "Advisor: Evaluating actions (level={}, concentration={}/{}, cloth={})",
            input.level(),
            input.concentration(),
            input.max_concentration(),
            input.cloth()
        );

        for candidate in self.candidates(input) {
            let score = candidate.score;

            tracing::debug!(
                "  {} @ {}: score={} (res={}, over={}, eff={}, cond={}, skill={})",
                candidate.skill.kind,
                candidate.target.label(),
                score.value(),
                score.residual,
                score.overshoot,
                score.efficiency,
                score.condition,
                score.skill
            );

            // Select candidate with lowest value
            // In case of tie, first candidate wins (stable ordering)
            if score.value() < best_score {
                best_score = score.value();
                best = Some(candidate);
            }
        }

        match best {
            Some(candidate) => {
                tracing::debug!(
                    "Advisor: Best action = {} @ {} (score={})",
                    candidate.skill.kind,
                    candidate.target.label(),
                    best_score
                );
                Recommendation::Action(RecommendedAction::from(candidate))
            }
            None => {
                tracing::debug!("Advisor: No valid action");
                Recommendation::NoValidAction
            }
        }
    }

    /// Every scored candidate in search order.
    ///
    /// Useful for debugging and for listing alternatives.
    pub fn evaluate_all(&self, input: &EngineInput) -> Vec<Candidate> {
        self.candidates(input).collect()
    }

    fn candidates<'a>(&'a self, input: &'a EngineInput) -> impl Iterator<Item = Candidate> + 'a {
        SKILLS
            .iter()
            .filter(move |skill| input.can_use(skill))
            .flat_map(move |skill| {
                enumerate_targets(skill.kind, input.grid())
                    .into_iter()
                    .filter_map(move |target| self.evaluate(skill, target, input))
            })
    }

    fn evaluate(
        &self,
        skill: &'static SkillDefinition,
        target: Target,
        input: &EngineInput,
    ) -> Option<Candidate> {
        let outcome = simulate(skill.kind, target.cells(), input, &self.config)?;
        let score = scoring::score(skill, &target, &outcome, input, &self.config.scoring);

        Some(Candidate {
            skill,
            target,
            outcome,
            score,
        })
    }
}

/// Recommends the best action using the default configuration.
pub fn recommend(input: &EngineInput) -> Recommendation {
    Advisor::default().recommend(input)
}
