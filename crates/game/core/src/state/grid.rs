//! 3×3 cloth grid.
//!
//! Cells are numbered row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;

use crate::config::EngineConfig;
use crate::state::InputError;

/// Display names of the nine cells, indexed by cell.
pub const CELL_NAMES: [&str; EngineConfig::GRID_CELLS] = [
    "上段左", "上段中", "上段右", "中段左", "中段中", "中段右", "下段左", "下段中", "下段右",
];

/// Cell values of a fresh cloth.
pub const DEFAULT_GRID: [i32; EngineConfig::GRID_CELLS] = [95, 40, 95, 60, 60, 60, 75, 40, 75];

// ============================================================================
// Cell Index
// ============================================================================

/// Index of a cell on the grid (0..9).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellIndex(u8);

impl CellIndex {
    pub const TOP_LEFT: Self = Self(0);
    pub const TOP_CENTER: Self = Self(1);
    pub const TOP_RIGHT: Self = Self(2);
    pub const MIDDLE_LEFT: Self = Self(3);
    pub const CENTER: Self = Self(4);
    pub const MIDDLE_RIGHT: Self = Self(5);
    pub const BOTTOM_LEFT: Self = Self(6);
    pub const BOTTOM_CENTER: Self = Self(7);
    pub const BOTTOM_RIGHT: Self = Self(8);

    /// All cells in index order.
    pub const ALL: [Self; EngineConfig::GRID_CELLS] = [
        Self::TOP_LEFT,
        Self::TOP_CENTER,
        Self::TOP_RIGHT,
        Self::MIDDLE_LEFT,
        Self::CENTER,
        Self::MIDDLE_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_CENTER,
        Self::BOTTOM_RIGHT,
    ];

    pub const fn new(index: usize) -> Option<Self> {
        if index < EngineConfig::GRID_CELLS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn name(self) -> &'static str {
        CELL_NAMES[self.0 as usize]
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Cell Mask
// ============================================================================

bitflags! {
    /// Set of grid cells, one bit per cell index.
    ///
    /// Every cell bit is declared so `from_bits_truncate` keeps it.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CellMask: u16 {
        const TOP_LEFT      = 1 << 0;
        const TOP_CENTER    = 1 << 1;
        const TOP_RIGHT     = 1 << 2;
        const MIDDLE_LEFT   = 1 << 3;
        const CENTER        = 1 << 4;
        const MIDDLE_RIGHT  = 1 << 5;
        const BOTTOM_LEFT   = 1 << 6;
        const BOTTOM_CENTER = 1 << 7;
        const BOTTOM_RIGHT  = 1 << 8;
    }
}

impl CellMask {
    pub const fn from_cell(cell: CellIndex) -> Self {
        Self::from_bits_truncate(1 << cell.0)
    }

    pub fn from_cells(cells: &[CellIndex]) -> Self {
        cells
            .iter()
            .fold(Self::empty(), |mask, &cell| mask | Self::from_cell(cell))
    }
}

// ============================================================================
// Grid State
// ============================================================================

/// Real cell values of the cloth, as entered by the player.
///
/// A cell is *active* while its value is strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    values: [i32; EngineConfig::GRID_CELLS],
}

impl GridState {
    pub const fn new(values: [i32; EngineConfig::GRID_CELLS]) -> Self {
        Self { values }
    }

    /// A grid with every cell at zero (finished cloth).
    pub const fn cleared() -> Self {
        Self::new([0; EngineConfig::GRID_CELLS])
    }

    /// Builds a grid from a slice, rejecting anything but nine values.
    pub fn from_slice(values: &[i32]) -> Result<Self, InputError> {
        let values: [i32; EngineConfig::GRID_CELLS] =
            values.try_into().map_err(|_| InputError::GridLength {
                expected: EngineConfig::GRID_CELLS,
                actual: values.len(),
            })?;
        Ok(Self::new(values))
    }

    #[inline]
    pub const fn value(&self, cell: CellIndex) -> i32 {
        self.values[cell.index()]
    }

    pub fn set(&mut self, cell: CellIndex, value: i32) {
        self.values[cell.index()] = value;
    }

    pub const fn values(&self) -> &[i32; EngineConfig::GRID_CELLS] {
        &self.values
    }

    #[inline]
    pub const fn is_active(&self, cell: CellIndex) -> bool {
        self.value(cell) > 0
    }

    /// Cells whose value is still above zero.
    pub fn active_mask(&self) -> CellMask {
        CellIndex::ALL
            .into_iter()
            .filter(|&cell| self.is_active(cell))
            .fold(CellMask::empty(), |mask, cell| {
                mask | CellMask::from_cell(cell)
            })
    }

    /// Sum of the positive cell values, widened so nine `i32::MAX` cells fit.
    pub fn positive_total(&self) -> i64 {
        self.values
            .iter()
            .filter(|&&v| v > 0)
            .map(|&v| i64::from(v))
            .sum()
    }

    /// Returns true when no cell is active.
    pub fn is_cleared(&self) -> bool {
        self.active_mask().is_empty()
    }

    /// Copies the grid into a simulation buffer.
    pub fn to_simulated(&self) -> SimulatedGrid {
        SimulatedGrid::new(self.values.map(f64::from))
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(DEFAULT_GRID)
    }
}

/// Parses nine integers separated by commas and/or whitespace.
impl FromStr for GridState {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| InputError::InvalidCellValue(token.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&values)
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.values.chunks(EngineConfig::GRID_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, value) in chunk.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value:>4}")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Simulated Grid
// ============================================================================

/// Hypothetical cell values after a simulated action.
///
/// Values are expectations and may be fractional or negative (over-stitched).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatedGrid {
    values: [f64; EngineConfig::GRID_CELLS],
}

impl SimulatedGrid {
    pub const fn new(values: [f64; EngineConfig::GRID_CELLS]) -> Self {
        Self { values }
    }

    #[inline]
    pub const fn value(&self, cell: CellIndex) -> f64 {
        self.values[cell.index()]
    }

    pub fn set(&mut self, cell: CellIndex, value: f64) {
        self.values[cell.index()] = value;
    }

    pub const fn values(&self) -> &[f64; EngineConfig::GRID_CELLS] {
        &self.values
    }

    /// Sum of absolute values over all cells.
    pub fn absolute_total(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum()
    }

    /// Sum of magnitudes of the negative (over-stitched) cells.
    pub fn overshoot_total(&self) -> f64 {
        self.values.iter().filter(|&&v| v < 0.0).map(|v| v.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_mask_tracks_positive_cells() {
        let grid = GridState::new([10, 0, -3, 5, 0, 0, 0, 0, 1]);
        let mask = grid.active_mask();

        assert_eq!(
            mask,
            CellMask::TOP_LEFT | CellMask::MIDDLE_LEFT | CellMask::BOTTOM_RIGHT
        );
        assert!(!mask.contains(CellMask::from_cell(CellIndex::TOP_RIGHT)));
        assert_eq!(grid.positive_total(), 16);
        assert!(!grid.is_cleared());
        assert!(GridState::cleared().is_cleared());
    }

    #[test]
    fn every_cell_has_a_mask_bit() {
        assert_eq!(CellMask::from_cells(&CellIndex::ALL), CellMask::all());
        assert_eq!(GridState::default().active_mask(), CellMask::all());
        assert_eq!(GridState::cleared().active_mask(), CellMask::empty());
    }

    #[test]
    fn positive_total_does_not_overflow() {
        let grid: GridState = "2147483647,2147483647,1,1,1,1,1,1,1".parse().unwrap();
        assert_eq!(grid.positive_total(), 2 * i64::from(i32::MAX) + 7);
        assert_eq!(GridState::new([i32::MAX; 9]).positive_total(), 9 * i64::from(i32::MAX));
    }

    #[test]
    fn parse_accepts_commas_and_spaces() {
        let grid: GridState = "95,40,95 60 60 60, 75 40 75".parse().unwrap();
        assert_eq!(grid, GridState::default());
    }

    #[test]
    fn parse_rejects_wrong_length_and_garbage() {
        assert_eq!(
            "1,2,3".parse::<GridState>(),
            Err(InputError::GridLength {
                expected: 9,
                actual: 3
            })
        );
        assert_eq!(
            "1,2,3,4,x,6,7,8,9".parse::<GridState>(),
            Err(InputError::InvalidCellValue("x".into()))
        );
    }

    #[test]
    fn cell_names_and_bounds() {
        assert_eq!(CellIndex::MIDDLE_RIGHT.name(), "中段右");
        assert_eq!(CellIndex::CENTER.name(), "中段中");
        assert_eq!(CellIndex::new(9), None);
    }

    #[test]
    fn simulated_totals() {
        let mut sim = GridState::new([30, 0, 0, 0, 0, 0, 0, 0, 10]).to_simulated();
        sim.set(CellIndex::BOTTOM_RIGHT, -5.0);

        assert_eq!(sim.absolute_total(), 35.0);
        assert_eq!(sim.overshoot_total(), 5.0);
    }
}
