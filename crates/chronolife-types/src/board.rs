//! Fixed-size cell grids.
//!
//! A [`Board`] is one generation's worth of cell state: a `width x height`
//! rectangle of booleans (`true` = alive) stored row-major. Boards are never
//! resized in place; [`Board::reshaped`] builds a new board that keeps the
//! overlapping region.
//!
//! [`NeighborCounts`] has the same shape and holds the number of live Moore
//! neighbors per cell (0 through 8). It is a read-only diagnostic view.
//!
//! All accessors take unsigned coordinates and return `None` (or `false`)
//! when the coordinate is outside the grid. Wrapping and culling policy
//! belongs to the universe, not to the grid.

use serde::{Deserialize, Serialize};

/// Compute the row-major offset of `(x, y)` in a `width x height` grid.
///
/// Returns `None` when the coordinate is out of range or the offset would
/// overflow.
const fn cell_index(width: usize, height: usize, x: usize, y: usize) -> Option<usize> {
    if x >= width || y >= height {
        return None;
    }
    match y.checked_mul(width) {
        Some(row_start) => row_start.checked_add(x),
        None => None,
    }
}

/// Number of cells in a `width x height` grid, or `None` if either
/// dimension is zero or the product overflows.
const fn cell_count(width: usize, height: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return None;
    }
    width.checked_mul(height)
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// One generation of cell state.
///
/// Both dimensions are at least 1. Indexing is `(x, y)` with
/// `x in [0, width)` and `y in [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-dead board.
    ///
    /// Returns `None` if either dimension is zero or the cell count would
    /// overflow `usize`.
    pub fn dead(width: usize, height: usize) -> Option<Self> {
        let count = cell_count(width, height)?;
        Some(Self {
            width,
            height,
            cells: vec![false; count],
        })
    }

    /// Create an all-dead board with the same dimensions as this one.
    pub fn dead_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![false; self.cells.len()],
        }
    }

    /// Board width (the `x` extent).
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Board height (the `y` extent).
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether `other` has the same dimensions as this board.
    pub const fn same_shape(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Read the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        let idx = cell_index(self.width, self.height, x, y)?;
        self.cells.get(idx).copied()
    }

    /// Write the cell at `(x, y)`.
    ///
    /// Returns `false` (and writes nothing) if the coordinate is out of range.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        let Some(idx) = cell_index(self.width, self.height, x, y) else {
            return false;
        };
        match self.cells.get_mut(idx) {
            Some(cell) => {
                *cell = alive;
                true
            }
            None => false,
        }
    }

    /// Flip the cell at `(x, y)` and return its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<bool> {
        let idx = cell_index(self.width, self.height, x, y)?;
        let cell = self.cells.get_mut(idx)?;
        *cell = !*cell;
        Some(*cell)
    }

    /// Number of live cells.
    pub fn living(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&alive| alive)
    }

    /// Iterate over the rows from `y = 0` downward.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Build a new board of the given size holding the overlapping region
    /// of this one. Cells outside the overlap start dead.
    ///
    /// Returns `None` under the same conditions as [`Board::dead`].
    pub fn reshaped(&self, width: usize, height: usize) -> Option<Self> {
        let mut next = Self::dead(width, height)?;
        let overlap_w = width.min(self.width);
        let overlap_h = height.min(self.height);
        for y in 0..overlap_h {
            for x in 0..overlap_w {
                if self.get(x, y) == Some(true) {
                    next.set(x, y, true);
                }
            }
        }
        Some(next)
    }
}

/// Serialized form of a [`Board`], validated on the way in.
#[derive(Clone, Serialize, Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = cell_count(raw.width, raw.height)
            .ok_or_else(|| format!("invalid board dimensions {}x{}", raw.width, raw.height))?;
        if raw.cells.len() != expected {
            return Err(format!(
                "board {}x{} needs {expected} cells, found {}",
                raw.width,
                raw.height,
                raw.cells.len()
            ));
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
        })
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        Self {
            width: board.width,
            height: board.height,
            cells: board.cells,
        }
    }
}

// ---------------------------------------------------------------------------
// Neighbor counts
// ---------------------------------------------------------------------------

/// Per-cell live neighbor counts for one board, values in `[0, 8]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborCounts {
    width: usize,
    height: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    /// Create a zeroed count grid. Same dimension rules as [`Board::dead`].
    pub fn zeroed(width: usize, height: usize) -> Option<Self> {
        let count = cell_count(width, height)?;
        Some(Self {
            width,
            height,
            counts: vec![0; count],
        })
    }

    /// Create a zeroed count grid with the same dimensions as `board`.
    pub fn shaped_like(board: &Board) -> Self {
        Self {
            width: board.width,
            height: board.height,
            counts: vec![0; board.cells.len()],
        }
    }

    /// Grid width.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Neighbor count at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        let idx = cell_index(self.width, self.height, x, y)?;
        self.counts.get(idx).copied()
    }

    /// Store the neighbor count at `(x, y)`. Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, count: u8) {
        if let Some(slot) =
            cell_index(self.width, self.height, x, y).and_then(|idx| self.counts.get_mut(idx))
        {
            *slot = count;
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle of cells anchored at a (possibly negative) origin.
///
/// Regions describe clipboard selections and paste targets. They may extend
/// past the board; the universe decides what happens to the overhang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Left edge (inclusive).
    pub x: i64,
    /// Top edge (inclusive).
    pub y: i64,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Region {
    /// Create a region from its origin and size.
    pub const fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region covers no cells.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Iterate over `(dx, dy)` offsets within the region, row by row.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |dy| (0..width).map(move |dx| (dx, dy)))
    }
}
