//! Targeting system for skills.
//!
//! Skill shapes are data: each skill maps to a list of cell-set templates and
//! a [`ShapeKind`] that decides how a target is labelled. The enumerator has no
//! per-skill branching; it walks the templates and keeps those whose every cell
//! is still active.

use arrayvec::ArrayVec;

use crate::config::EngineConfig;
use crate::env::SkillKind;
use crate::state::{CellIndex, CellMask, GridState};

/// Cells touched by one target (1..=3).
pub type TargetCells = ArrayVec<CellIndex, { EngineConfig::MAX_SHAPE_CELLS }>;

/// Targets of one skill on one grid.
pub type TargetList = ArrayVec<Target, { EngineConfig::MAX_TARGETS }>;

// ============================================================================
// Shape Templates
// ============================================================================

/// Geometric pattern of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// One cell.
    Cell,
    /// Two cells (horizontal, vertical or diagonal).
    Pair,
    /// A whole row.
    Row,
    /// A whole column.
    Column,
}

/// Declarative placement table of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub templates: &'static [&'static [CellIndex]],
}

const TL: CellIndex = CellIndex::TOP_LEFT;
const TC: CellIndex = CellIndex::TOP_CENTER;
const TR: CellIndex = CellIndex::TOP_RIGHT;
const ML: CellIndex = CellIndex::MIDDLE_LEFT;
const MC: CellIndex = CellIndex::CENTER;
const MR: CellIndex = CellIndex::MIDDLE_RIGHT;
const BL: CellIndex = CellIndex::BOTTOM_LEFT;
const BC: CellIndex = CellIndex::BOTTOM_CENTER;
const BR: CellIndex = CellIndex::BOTTOM_RIGHT;

const SINGLE: &[&[CellIndex]] = &[
    &[TL],
    &[TC],
    &[TR],
    &[ML],
    &[MC],
    &[MR],
    &[BL],
    &[BC],
    &[BR],
];

/// Horizontal pairs (ヨコぬい).
const HORIZONTAL_PAIRS: &[&[CellIndex]] = &[
    &[TL, TC],
    &[TC, TR],
    &[ML, MC],
    &[MC, MR],
    &[BL, BC],
    &[BC, BR],
];

/// Vertical pairs (滝のぼり).
const VERTICAL_PAIRS: &[&[CellIndex]] = &[
    &[TL, ML],
    &[TC, MC],
    &[TR, MR],
    &[ML, BL],
    &[MC, BC],
    &[MR, BR],
];

/// Diagonal pairs running down-left (たすきぬい).
const DIAGONAL_PAIRS: &[&[CellIndex]] = &[&[TC, ML], &[TR, MC], &[MC, BL], &[MR, BC]];

/// Diagonal pairs running down-right (逆たすきぬい).
const ANTI_DIAGONAL_PAIRS: &[&[CellIndex]] = &[&[TL, MC], &[TC, MR], &[ML, BC], &[MC, BR]];

const ROWS: &[&[CellIndex]] = &[&[TL, TC, TR], &[ML, MC, MR], &[BL, BC, BR]];

const COLUMNS: &[&[CellIndex]] = &[&[TL, ML, BL], &[TC, MC, BC], &[TR, MR, BR]];

impl Shape {
    const fn new(kind: ShapeKind, templates: &'static [&'static [CellIndex]]) -> Self {
        Self { kind, templates }
    }

    /// Placement table of a skill.
    pub const fn for_skill(skill: SkillKind) -> Self {
        match skill {
            SkillKind::Kagen
            | SkillKind::Normal
            | SkillKind::Double
            | SkillKind::Triple
            | SkillKind::Nerai => Self::new(ShapeKind::Cell, SINGLE),
            SkillKind::Yoko => Self::new(ShapeKind::Pair, HORIZONTAL_PAIRS),
            SkillKind::Taki => Self::new(ShapeKind::Pair, VERTICAL_PAIRS),
            SkillKind::Tasuki => Self::new(ShapeKind::Pair, DIAGONAL_PAIRS),
            SkillKind::GyakuTasuki => Self::new(ShapeKind::Pair, ANTI_DIAGONAL_PAIRS),
            SkillKind::Suihei => Self::new(ShapeKind::Row, ROWS),
            SkillKind::Otaki => Self::new(ShapeKind::Column, COLUMNS),
        }
    }

    /// Number of placements, an upper bound on the target count.
    pub const fn placements(&self) -> usize {
        self.templates.len()
    }

    fn label(&self, cells: &[CellIndex]) -> String {
        let first = cells[0].name();
        match self.kind {
            ShapeKind::Cell => first.to_owned(),
            ShapeKind::Pair => format!("{first}と{}", cells[1].name()),
            ShapeKind::Row => format!("横一列 ({first}の列)"),
            ShapeKind::Column => format!("縦一列 ({first}の列)"),
        }
    }
}

// ============================================================================
// Target
// ============================================================================

/// A concrete placement of a skill: its cells and a display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    cells: TargetCells,
    label: String,
}

impl Target {
    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    /// First cell of the target; single-cell skills only have this one.
    pub fn primary(&self) -> CellIndex {
        self.cells[0]
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Lists every legal target of `skill` on `grid`, in template order.
///
/// A template is kept only when all of its cells are active; a single
/// inactive cell excludes the whole placement.
pub fn enumerate_targets(skill: SkillKind, grid: &GridState) -> TargetList {
    let shape = Shape::for_skill(skill);
    let active = grid.active_mask();

    shape
        .templates
        .iter()
        .filter(|template| active.contains(CellMask::from_cells(template)))
        .map(|template| Target {
            cells: template.iter().copied().collect(),
            label: shape.label(template),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn full_grid_yields_every_placement() {
        let grid = GridState::default();
        let counts: Vec<_> = SkillKind::iter()
            .map(|skill| enumerate_targets(skill, &grid).len())
            .collect();

        // kagen normal double triple nerai yoko taki tasuki gyaku suihei otaki
        assert_eq!(counts, vec![9, 9, 9, 9, 9, 6, 6, 4, 4, 3, 3]);
    }

    #[test]
    fn placement_counts_bound_target_lists() {
        for skill in SkillKind::iter() {
            let shape = Shape::for_skill(skill);
            assert!(shape.placements() <= EngineConfig::MAX_TARGETS);
            for template in shape.templates {
                assert!(template.len() <= EngineConfig::MAX_SHAPE_CELLS);
            }
        }
    }

    #[test]
    fn shaped_target_with_inactive_cell_is_excluded() {
        let mut grid = GridState::default();
        grid.set(CellIndex::TOP_CENTER, 0);

        let targets = enumerate_targets(SkillKind::Yoko, &grid);
        assert!(
            targets
                .iter()
                .all(|t| !t.cells().contains(&CellIndex::TOP_CENTER))
        );
        assert_eq!(targets.len(), 4);

        let columns = enumerate_targets(SkillKind::Otaki, &grid);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn single_cell_skills_skip_inactive_cells() {
        let grid = GridState::new([0, 5, -2, 0, 0, 0, 0, 0, 1]);
        let targets = enumerate_targets(SkillKind::Normal, &grid);
        let cells: Vec<_> = targets.iter().map(Target::primary).collect();
        assert_eq!(cells, vec![CellIndex::TOP_CENTER, CellIndex::BOTTOM_RIGHT]);
    }

    #[test]
    fn labels_follow_shape_kind() {
        let grid = GridState::default();
        let label = |skill| enumerate_targets(skill, &grid)[0].label().to_owned();

        assert_eq!(label(SkillKind::Normal), "上段左");
        assert_eq!(label(SkillKind::Yoko), "上段左と上段中");
        assert_eq!(label(SkillKind::Tasuki), "上段中と中段左");
        assert_eq!(label(SkillKind::Suihei), "横一列 (上段左の列)");
        assert_eq!(label(SkillKind::Otaki), "縦一列 (上段左の列)");
    }

    #[test]
    fn diagonal_templates_match_index_offsets() {
        let offsets = |skill| {
            Shape::for_skill(skill)
                .templates
                .iter()
                .map(|t| (t[0].index(), t[1].index() - t[0].index()))
                .collect::<Vec<_>>()
        };
        assert_eq!(
            offsets(SkillKind::Tasuki),
            vec![(1, 2), (2, 2), (4, 2), (5, 2)]
        );
        assert_eq!(
            offsets(SkillKind::GyakuTasuki),
            vec![(0, 4), (1, 4), (3, 4), (4, 4)]
        );
    }
}
