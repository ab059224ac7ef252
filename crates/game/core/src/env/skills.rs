//! Skill table.

/// Skills available in the sewing minigame.
///
/// Declaration order is the table order; the advisor evaluates skills in this
/// order, which also decides ties.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SkillKind {
    // ========================================================================
    // Single cell
    // ========================================================================
    /// Reduced-power stitch.
    Kagen,

    /// Ordinary stitch.
    Normal,

    /// Double-power stitch.
    Double,

    /// Triple-power stitch.
    Triple,

    /// Precision stitch with an elevated critical (full clear) chance.
    Nerai,

    // ========================================================================
    // Shaped (range)
    // ========================================================================
    /// Horizontal pair.
    Yoko,

    /// Vertical pair.
    Taki,

    /// Diagonal pair, down-left.
    Tasuki,

    /// Diagonal pair, down-right.
    GyakuTasuki,

    /// Whole row.
    Suihei,

    /// Whole column.
    Otaki,
}

/// Static definition of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillDefinition {
    pub kind: SkillKind,
    /// In-game display name.
    pub name: &'static str,
    /// Concentration consumed per use.
    pub cost: u32,
    /// Minimum player level that unlocks the skill.
    pub required_level: u8,
}

impl SkillDefinition {
    const fn new(kind: SkillKind, name: &'static str, cost: u32, required_level: u8) -> Self {
        Self {
            kind,
            name,
            cost,
            required_level,
        }
    }

    pub const fn is_unlocked(&self, level: u8) -> bool {
        level >= self.required_level
    }

    pub const fn is_affordable(&self, concentration: u32) -> bool {
        concentration >= self.cost
    }
}

/// Skill table in evaluation order. `SKILLS[kind as usize].kind == kind`.
pub static SKILLS: [SkillDefinition; SkillKind::COUNT] = [
    SkillDefinition::new(SkillKind::Kagen, "かげんぬい", 10, 3),
    SkillDefinition::new(SkillKind::Normal, "普通に縫う", 5, 1),
    SkillDefinition::new(SkillKind::Double, "2倍ぬい", 9, 13),
    SkillDefinition::new(SkillKind::Triple, "3倍縫い", 12, 33),
    SkillDefinition::new(SkillKind::Nerai, "ねらいぬい", 16, 23),
    SkillDefinition::new(SkillKind::Yoko, "ヨコぬい", 8, 2),
    SkillDefinition::new(SkillKind::Taki, "滝のぼり", 8, 5),
    SkillDefinition::new(SkillKind::Tasuki, "たすきぬい", 7, 7),
    SkillDefinition::new(SkillKind::GyakuTasuki, "逆たすきぬい", 7, 25),
    SkillDefinition::new(SkillKind::Suihei, "水平ぬい", 10, 15),
    SkillDefinition::new(SkillKind::Otaki, "大滝のぼり", 10, 19),
];

impl SkillKind {
    pub const COUNT: usize = 11;

    pub fn definition(self) -> &'static SkillDefinition {
        &SKILLS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Returns true for skills that act on more than one cell.
    pub const fn is_shaped(self) -> bool {
        matches!(
            self,
            Self::Yoko | Self::Taki | Self::Tasuki | Self::GyakuTasuki | Self::Suihei | Self::Otaki
        )
    }

    /// Returns true for the double/triple power skills.
    pub const fn is_multiplied(self) -> bool {
        matches!(self, Self::Double | Self::Triple)
    }
}
