/// Engine configuration constants and tunable parameters.
///
/// The tunable values are empirically balanced game constants. They are kept
/// here verbatim so that a TOML file can override them without code changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Critical rate added to the needle's base rate for the precision skill.
    pub precision_crit_bonus: f64,

    /// Weights and thresholds used by the action scorer.
    pub scoring: ScoringWeights,
}

impl EngineConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of cells on the cloth (3×3).
    pub const GRID_CELLS: usize = 9;
    pub const GRID_WIDTH: usize = 3;
    /// Largest skill shape (rows and columns).
    pub const MAX_SHAPE_CELLS: usize = 3;
    /// Upper bound on targets for any single skill (one per cell).
    pub const MAX_TARGETS: usize = 9;
    pub const MAX_LEVEL: u8 = 80;
    pub const STAR_TIERS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PRECISION_CRIT_BONUS: f64 = 0.20;

    pub fn new() -> Self {
        Self {
            precision_crit_bonus: Self::DEFAULT_PRECISION_CRIT_BONUS,
            scoring: ScoringWeights::default(),
        }
    }

    pub fn with_scoring(scoring: ScoringWeights) -> Self {
        Self {
            scoring,
            ..Self::new()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Weights and thresholds of the action-scoring heuristic.
///
/// Penalties are added to the score, bonuses are subtracted. Lower scores win.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringWeights {
    /// Multiplier applied to the magnitude of every over-stitched cell.
    pub overshoot_factor: f64,

    /// Efficiency (reduction per concentration) below which a penalty applies.
    pub efficiency_soft_threshold: f64,
    /// Second efficiency threshold; its penalty stacks with the first.
    pub efficiency_hard_threshold: f64,
    pub efficiency_penalty: f64,

    /// Penalty for shaped skills on weak cloth.
    pub weak_range_penalty: f64,

    /// Precision skill target value window (inclusive).
    pub precision_value_min: f64,
    pub precision_value_max: f64,
    pub precision_out_of_range_penalty: f64,
    pub precision_weak_penalty: f64,
    /// Fraction of max concentration above which the precision skill is
    /// considered hoarding.
    pub precision_hoard_ratio: f64,
    pub precision_hoard_penalty: f64,

    /// Penalty for double/triple power on weak cloth.
    pub power_weak_penalty: f64,
    /// Penalty when a double/triple target is below its floor.
    pub power_waste_penalty: f64,
    pub double_floor: f64,
    pub triple_floor: f64,

    /// Reduced-power skill gets a bonus on targets below this value.
    pub kagen_finish_threshold: f64,
    pub kagen_finish_bonus: f64,

    /// Shaped skills get a bonus while the grid total exceeds this value.
    pub range_total_threshold: f64,
    pub range_total_bonus: f64,
}

impl ScoringWeights {
    pub const DEFAULT_OVERSHOOT_FACTOR: f64 = 10.0;
    pub const DEFAULT_EFFICIENCY_SOFT_THRESHOLD: f64 = 1.5;
    pub const DEFAULT_EFFICIENCY_HARD_THRESHOLD: f64 = 1.0;
    pub const DEFAULT_EFFICIENCY_PENALTY: f64 = 10.0;
    pub const DEFAULT_WEAK_RANGE_PENALTY: f64 = 30.0;
    pub const DEFAULT_PRECISION_VALUE_MIN: f64 = 15.0;
    pub const DEFAULT_PRECISION_VALUE_MAX: f64 = 40.0;
    pub const DEFAULT_PRECISION_OUT_OF_RANGE_PENALTY: f64 = 50.0;
    pub const DEFAULT_PRECISION_WEAK_PENALTY: f64 = 40.0;
    pub const DEFAULT_PRECISION_HOARD_RATIO: f64 = 0.6;
    pub const DEFAULT_PRECISION_HOARD_PENALTY: f64 = 20.0;
    pub const DEFAULT_POWER_WEAK_PENALTY: f64 = 50.0;
    pub const DEFAULT_POWER_WASTE_PENALTY: f64 = 20.0;
    pub const DEFAULT_DOUBLE_FLOOR: f64 = 30.0;
    pub const DEFAULT_TRIPLE_FLOOR: f64 = 45.0;
    pub const DEFAULT_KAGEN_FINISH_THRESHOLD: f64 = 15.0;
    pub const DEFAULT_KAGEN_FINISH_BONUS: f64 = 5.0;
    pub const DEFAULT_RANGE_TOTAL_THRESHOLD: f64 = 300.0;
    pub const DEFAULT_RANGE_TOTAL_BONUS: f64 = 15.0;

    pub const fn new() -> Self {
        Self {
            overshoot_factor: Self::DEFAULT_OVERSHOOT_FACTOR,
            efficiency_soft_threshold: Self::DEFAULT_EFFICIENCY_SOFT_THRESHOLD,
            efficiency_hard_threshold: Self::DEFAULT_EFFICIENCY_HARD_THRESHOLD,
            efficiency_penalty: Self::DEFAULT_EFFICIENCY_PENALTY,
            weak_range_penalty: Self::DEFAULT_WEAK_RANGE_PENALTY,
            precision_value_min: Self::DEFAULT_PRECISION_VALUE_MIN,
            precision_value_max: Self::DEFAULT_PRECISION_VALUE_MAX,
            precision_out_of_range_penalty: Self::DEFAULT_PRECISION_OUT_OF_RANGE_PENALTY,
            precision_weak_penalty: Self::DEFAULT_PRECISION_WEAK_PENALTY,
            precision_hoard_ratio: Self::DEFAULT_PRECISION_HOARD_RATIO,
            precision_hoard_penalty: Self::DEFAULT_PRECISION_HOARD_PENALTY,
            power_weak_penalty: Self::DEFAULT_POWER_WEAK_PENALTY,
            power_waste_penalty: Self::DEFAULT_POWER_WASTE_PENALTY,
            double_floor: Self::DEFAULT_DOUBLE_FLOOR,
            triple_floor: Self::DEFAULT_TRIPLE_FLOOR,
            kagen_finish_threshold: Self::DEFAULT_KAGEN_FINISH_THRESHOLD,
            kagen_finish_bonus: Self::DEFAULT_KAGEN_FINISH_BONUS,
            range_total_threshold: Self::DEFAULT_RANGE_TOTAL_THRESHOLD,
            range_total_bonus: Self::DEFAULT_RANGE_TOTAL_BONUS,
        }
    }

    /// Every weight paired with its field name, in declaration order.
    pub const fn named_values(&self) -> [(&'static str, f64); 19] {
        [
            ("overshoot_factor", self.overshoot_factor),
            ("efficiency_soft_threshold", self.efficiency_soft_threshold),
            ("efficiency_hard_threshold", self.efficiency_hard_threshold),
            ("efficiency_penalty", self.efficiency_penalty),
            ("weak_range_penalty", self.weak_range_penalty),
            ("precision_value_min", self.precision_value_min),
            ("precision_value_max", self.precision_value_max),
            ("precision_out_of_range_penalty", self.precision_out_of_range_penalty),
            ("precision_weak_penalty", self.precision_weak_penalty),
            ("precision_hoard_ratio", self.precision_hoard_ratio),
            ("precision_hoard_penalty", self.precision_hoard_penalty),
            ("power_weak_penalty", self.power_weak_penalty),
            ("power_waste_penalty", self.power_waste_penalty),
            ("double_floor", self.double_floor),
            ("triple_floor", self.triple_floor),
            ("kagen_finish_threshold", self.kagen_finish_threshold),
            ("kagen_finish_bonus", self.kagen_finish_bonus),
            ("range_total_threshold", self.range_total_threshold),
            ("range_total_bonus", self.range_total_bonus),
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new()
    }
}
