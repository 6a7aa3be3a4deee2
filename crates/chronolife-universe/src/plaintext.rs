//! Plain-text universe codec.
//!
//! The format is line oriented:
//!
//! ```text
//! !Name: Blinker
//! !A period-2 oscillator.
//! .....
//! .OOO.
//! .....
//! ```
//!
//! - A line starting with `!Name: ` sets the name (rest of the line).
//! - Any other line starting with `!` contributes to the description. All
//!   description lines are trimmed and joined with single spaces, so a
//!   multi-line description comes back as one line.
//! - The first line not starting with `!` begins the grid. The grid width is
//!   the length of that first row; the height is the number of rows.
//! - `O` is alive; any other character is dead. A row shorter than the first
//!   leaves the missing cells untouched.

use chronolife_types::Board;

use crate::error::UniverseError;

/// Header prefix carrying the universe name.
pub const NAME_PREFIX: &str = "!Name: ";

/// Prefix of every header line.
pub const HEADER_PREFIX: char = '!';

/// [`NAME_PREFIX`] without the leading [`HEADER_PREFIX`].
const NAME_TAG: &str = "Name: ";

/// Character for a live cell.
pub const ALIVE: char = 'O';

/// Character for a dead cell.
pub const DEAD: char = '.';

/// A parsed plain-text universe.
///
/// Rows are kept exactly as long as they appeared in the input so that short
/// rows can be told apart from dead cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText {
    /// Universe name from the `!Name: ` header (empty if absent).
    pub name: String,
    /// Description, flattened to one line.
    pub description: String,
    /// Grid rows, `true` = alive.
    rows: Vec<Vec<bool>>,
    /// Length of the first grid row.
    width: usize,
}

impl PlainText {
    /// Parse a plain-text universe from its lines.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::MalformedFile`] if there are no lines, no
    /// grid rows after the header, or the first grid row is empty.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, UniverseError> {
        if lines.is_empty() {
            return Err(UniverseError::malformed("file has no lines"));
        }

        let mut name = String::new();
        let mut description_parts: Vec<&str> = Vec::new();
        let mut grid_start = None;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');
            if let Some(rest) = line.strip_prefix(NAME_PREFIX) {
                rest.clone_into(&mut name);
            } else if let Some(rest) = line.strip_prefix(HEADER_PREFIX) {
                let part = rest.trim();
                if !part.is_empty() {
                    description_parts.push(part);
                }
            } else {
                grid_start = Some(index);
                break;
            }
        }

        let grid_lines = grid_start
            .and_then(|start| lines.get(start..))
            .ok_or_else(|| UniverseError::malformed("no grid rows after header"))?;

        let rows: Vec<Vec<bool>> = grid_lines
            .iter()
            .map(|line| decode_row(line.as_ref().trim_end_matches('\r')))
            .collect();

        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(UniverseError::malformed("first grid row is empty"));
        }

        Ok(Self {
            name,
            description: description_parts.join(" "),
            rows,
            width,
        })
    }

    /// Parse a plain-text universe from a single string.
    ///
    /// # Errors
    ///
    /// Same as [`PlainText::parse`].
    pub fn parse_str(text: &str) -> Result<Self, UniverseError> {
        let lines: Vec<&str> = text.lines().collect();
        Self::parse(&lines)
    }

    /// Grid width (length of the first grid row).
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of grid rows).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell `(x, y)` of the grid, or `None` if that row is too short.
    pub fn cell(&self, x: usize, y: usize) -> Option<bool> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Iterate over every cell present in the input as `(x, y, alive)`.
    ///
    /// Cells beyond the first row's width are not reported, and neither are
    /// cells missing from a short row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let width = self.width;
        self.rows.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .take(width)
                .enumerate()
                .map(move |(x, &alive)| (x, y, alive))
        })
    }

    /// Build a fresh board sized to the grid.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidDimension`] if the grid is too large
    /// to allocate.
    pub fn to_board(&self) -> Result<Board, UniverseError> {
        let mut board =
            Board::dead(self.width, self.height()).ok_or(UniverseError::InvalidDimension {
                width: self.width,
                height: self.height(),
            })?;
        for (x, y, alive) in self.cells() {
            if alive {
                board.set(x, y, true);
            }
        }
        Ok(board)
    }
}

/// Decode one grid row: `O` is alive, everything else is dead.
pub fn decode_row(line: &str) -> Vec<bool> {
    line.chars().map(|ch| ch == ALIVE).collect()
}

/// Append one encoded row to `out` (no line terminator).
fn encode_row(row: &[bool], out: &mut String) {
    out.extend(row.iter().map(|&alive| if alive { ALIVE } else { DEAD }));
}

/// Encode a single row as a string.
pub fn row_string(row: &[bool]) -> String {
    let mut out = String::with_capacity(row.len());
    encode_row(row, &mut out);
    out
}

/// Flatten a possibly multi-line description to one line.
pub fn flatten_description(description: &str) -> String {
    description
        .lines()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encode a board with its name and description header.
///
/// Every row, including the last, ends with a newline.
pub fn encode(board: &Board, name: &str, description: &str) -> String {
    let name = name.lines().next().unwrap_or_default();
    let description = flatten_description(description);
    let capacity = board
        .width()
        .saturating_add(1)
        .saturating_mul(board.height())
        .saturating_add(name.len())
        .saturating_add(description.len())
        .saturating_add(NAME_PREFIX.len())
        .saturating_add(4);
    let mut out = String::with_capacity(capacity);

    out.push_str(NAME_PREFIX);
    out.push_str(name);
    out.push('\n');
    out.push(HEADER_PREFIX);
    // A description that reads like a name header is shifted by a space;
    // parsing trims it back off.
    if description.starts_with(NAME_TAG) {
        out.push(' ');
    }
    out.push_str(&description);
    out.push('\n');
    for row in board.rows() {
        encode_row(row, &mut out);
        out.push('\n');
    }
    out
}

/// Encode only the grid rows, joined by newlines with no trailing newline.
pub fn encode_cells(board: &Board) -> String {
    board.rows().map(row_string).collect::<Vec<_>>().join("\n")
}
