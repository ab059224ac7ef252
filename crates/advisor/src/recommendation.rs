use std::fmt;

use sewing_core::{SkillKind, TargetCells};

use crate::selector::Candidate;

/// Result of a best-action search.
#[derive(Clone, Debug, PartialEq)]
pub enum Recommendation {
    /// No unlocked, affordable skill has a legal target.
    NoValidAction,
    Action(RecommendedAction),
}

impl Recommendation {
    pub fn action(&self) -> Option<&RecommendedAction> {
        match self {
            Self::Action(action) => Some(action),
            Self::NoValidAction => None,
        }
    }

    pub fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }

    /// Score of the chosen action; infinite for [`Recommendation::NoValidAction`].
    pub fn score(&self) -> f64 {
        self.action().map_or(f64::INFINITY, |action| action.score)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValidAction => f.write_str(
                "Not enough concentration or no valid action. Consider finishing the piece.",
            ),
            Self::Action(action) => action.fmt(f),
        }
    }
}

/// The winning candidate, flattened for display.
#[derive(Clone, Debug, PartialEq)]
pub struct RecommendedAction {
    pub skill: SkillKind,
    pub skill_name: &'static str,
    pub target_name: String,
    pub cells: TargetCells,
    pub cost: u32,
    pub score: f64,
}

impl From<Candidate> for RecommendedAction {
    fn from(candidate: Candidate) -> Self {
        let score = candidate.score.value();
        Self {
            skill: candidate.skill.kind,
            skill_name: candidate.skill.name,
            target_name: candidate.target.label().to_owned(),
            cells: candidate.target.cells().iter().copied().collect(),
            cost: candidate.skill.cost,
            score,
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Use {} on {} (concentration cost: {})",
            self.skill_name, self.target_name, self.cost
        )
    }
}
