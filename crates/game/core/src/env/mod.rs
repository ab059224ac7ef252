//! Static rule tables.
//!
//! Everything in this module is immutable reference data: concentration per
//! level, needle stats, sewing power per cloth condition and the skill table.
//! Lookups are keyed by validated enums so they cannot go out of range.
mod skills;
mod tables;

pub use skills::{SKILLS, SkillDefinition, SkillKind};
pub use tables::{
    CONCENTRATION_BY_LEVEL, ClothCondition, NeedleKind, NeedleStats, SewingPower,
    concentration_for_level,
};
