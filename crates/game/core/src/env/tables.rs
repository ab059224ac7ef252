use crate::config::EngineConfig;
use crate::state::InputError;

/// Max concentration granted by player level, indexed by level (0..=80).
pub const CONCENTRATION_BY_LEVEL: [u32; EngineConfig::MAX_LEVEL as usize + 1] = [
    0, 50, 51, 54, 55, 58, 61, 62, 65, 68, // 0-9
    68, 71, 74, 74, 77, 79, 82, 82, 85, 88, // 10-19
    88, 91, 94, 94, 97, 100, 100, 103, 105, 108, // 20-29
    108, 111, 112, 112, 114, 118, 121, 122, 122, 124, // 30-39
    128, 131, 133, 136, 138, 138, 141, 141, 143, 146, // 40-49
    148, 151, 151, 153, 156, 158, 161, 161, 163, 166, // 50-59
    168, 170, 170, 172, 174, 176, 179, 181, 183, 185, // 60-69
    187, 188, 190, 192, 194, 196, 196, 196, 196, 196, // 70-79
    196, // 80
];

/// Looks up the level's concentration, or `None` past the end of the table.
pub fn concentration_for_level(level: u8) -> Option<u32> {
    CONCENTRATION_BY_LEVEL.get(level as usize).copied()
}

/// Sewing needle kinds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NeedleKind {
    #[default]
    Copper,
    Iron,
    Silver,
    Platinum,
    Super,
    Miracle,
    Light,
}

/// Per-needle bonuses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeedleStats {
    /// Added on top of the level's max concentration.
    pub concentration_bonus: u32,
    /// Base critical rate per star tier (0..=3 stars).
    pub crit_by_star: [f64; EngineConfig::STAR_TIERS],
}

impl NeedleStats {
    pub const fn new(concentration_bonus: u32, crit_by_star: [f64; EngineConfig::STAR_TIERS]) -> Self {
        Self {
            concentration_bonus,
            crit_by_star,
        }
    }
}

impl NeedleKind {
    pub const fn stats(self) -> NeedleStats {
        match self {
            Self::Copper => NeedleStats::new(0, [0.010, 0.011, 0.012, 0.020]),
            Self::Iron => NeedleStats::new(10, [0.015, 0.016, 0.017, 0.025]),
            Self::Silver => NeedleStats::new(15, [0.020, 0.021, 0.022, 0.030]),
            Self::Platinum => NeedleStats::new(25, [0.025, 0.026, 0.027, 0.035]),
            Self::Super => NeedleStats::new(35, [0.030, 0.031, 0.032, 0.040]),
            Self::Miracle => NeedleStats::new(50, [0.033, 0.034, 0.035, 0.043]),
            Self::Light => NeedleStats::new(45, [0.036, 0.037, 0.038, 0.046]),
        }
    }

    /// Parses a needle name, reporting unknown names as [`InputError::UnknownNeedle`].
    pub fn parse(name: &str) -> Result<Self, InputError> {
        name.trim()
            .parse()
            .map_err(|_| InputError::UnknownNeedle(name.to_owned()))
    }
}

/// Condition of the cloth for the current turn.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClothCondition {
    #[default]
    Normal,
    Weak,
    Strong,
    Strongest,
}

/// Stitch power for one cell under a cloth condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SewingPower {
    /// Power of an ordinary single-cell stitch.
    pub normal: f64,
    /// Power of the reduced ("kagen") stitch. Not a multiplier.
    pub kagen: f64,
}

impl ClothCondition {
    pub const fn sewing_power(self) -> SewingPower {
        match self {
            Self::Normal => SewingPower {
                normal: 15.0,
                kagen: 7.5,
            },
            Self::Weak => SewingPower {
                normal: 7.0,
                kagen: 3.5,
            },
            Self::Strong => SewingPower {
                normal: 22.0,
                kagen: 11.0,
            },
            Self::Strongest => SewingPower {
                normal: 30.0,
                kagen: 15.0,
            },
        }
    }

    pub const fn is_weak(self) -> bool {
        matches!(self, Self::Weak)
    }

    /// Parses a cloth condition, reporting unknown names as [`InputError::UnknownCloth`].
    pub fn parse(name: &str) -> Result<Self, InputError> {
        name.trim()
            .parse()
            .map_err(|_| InputError::UnknownCloth(name.to_owned()))
    }
}
