//! Rectangular cell patterns for clipboard and stamping operations.
//!
//! A [`Pattern`] is a detached block of cells with its own dimensions. It is
//! produced by copying or cutting a region of a universe, or by parsing a
//! block of `O`/`.` text (for example a pattern fetched from an external
//! lexicon), and is written back with [`Universe::paste`] or
//! [`Universe::stamp`].
//!
//! [`Universe::paste`]: crate::Universe::paste
//! [`Universe::stamp`]: crate::Universe::stamp

use chronolife_types::Board;

use crate::error::UniverseError;
use crate::plaintext::{self, ALIVE};

/// A detached rectangular block of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    cells: Board,
}

impl Pattern {
    /// Wrap an existing board as a pattern.
    pub const fn from_board(cells: Board) -> Self {
        Self { cells }
    }

    /// Parse a block of rows where `O` is alive and anything else is dead.
    ///
    /// Blank lines are ignored. The block width is the length of the first
    /// non-blank row; longer rows are cut and shorter rows padded dead.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::MalformedFile`] if the block has no rows.
    pub fn parse_block(text: &str) -> Result<Self, UniverseError> {
        let rows: Vec<&str> = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Board::dead(width, rows.len())
            .ok_or_else(|| UniverseError::malformed("pattern block has no rows"))?;
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(width).enumerate() {
                if ch == ALIVE {
                    cells.set(x, y, true);
                }
            }
        }
        Ok(Self { cells })
    }

    /// Pattern width.
    pub const fn width(&self) -> usize {
        self.cells.width()
    }

    /// Pattern height.
    pub const fn height(&self) -> usize {
        self.cells.height()
    }

    /// Cell `(x, y)` of the pattern.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.cells.get(x, y)
    }

    /// Number of live cells in the pattern.
    pub fn living(&self) -> usize {
        self.cells.living()
    }

    /// Iterate over every cell as `(dx, dy, alive)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.rows().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .map(move |(dx, &alive)| (dx, dy, alive))
        })
    }

    /// The pattern as a board.
    pub const fn as_board(&self) -> &Board {
        &self.cells
    }

    /// Render the pattern as `O`/`.` rows without a trailing newline.
    pub fn to_block(&self) -> String {
        plaintext::encode_cells(&self.cells)
    }
}
