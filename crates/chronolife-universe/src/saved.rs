//! Saved-universe records.
//!
//! A [`SavedUniverse`] is the self-contained JSON form of a universe: shape,
//! boundary flag, name and description, and either the viewed board alone or
//! the full generation history with its cursor. Boards are stored as `O`/`.`
//! row strings so the file stays readable.
//!
//! Every record carries a `format` tag. Loading rejects tags it does not
//! recognize instead of guessing.

use serde::{Deserialize, Serialize};

use chronolife_types::Board;

use crate::error::UniverseError;
use crate::plaintext;

/// Format tag written into every saved record.
pub const SAVED_FORMAT: &str = "chronolife/1";

/// Serializable snapshot of a universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedUniverse {
    /// Format tag; must equal [`SAVED_FORMAT`].
    pub format: String,
    /// Universe name.
    #[serde(default)]
    pub name: String,
    /// Universe description (single line).
    #[serde(default)]
    pub description: String,
    /// Board width.
    pub width: usize,
    /// Board height.
    pub height: usize,
    /// Whether the universe wraps at its edges.
    pub toroidal: bool,
    /// Index of the viewed generation within `generations`.
    #[serde(default)]
    pub current: usize,
    /// Generations, oldest first, each as `height` rows of `width` characters.
    pub generations: Vec<Vec<String>>,
}

impl SavedUniverse {
    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, UniverseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON and check the format tag.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::Serialization`] for invalid JSON and
    /// [`UniverseError::MalformedFile`] for an unknown format tag.
    pub fn from_json(json: &str) -> Result<Self, UniverseError> {
        let saved: Self = serde_json::from_str(json)?;
        if saved.format != SAVED_FORMAT {
            return Err(UniverseError::malformed(format!(
                "unsupported saved format {:?}, expected {SAVED_FORMAT:?}",
                saved.format
            )));
        }
        Ok(saved)
    }

    /// Encode a board as row strings.
    pub fn encode_board(board: &Board) -> Vec<String> {
        board.rows().map(plaintext::row_string).collect()
    }

    /// Decode the row strings of one generation into a board.
    ///
    /// Unlike plain-text import this is strict: the row count and every row
    /// length must match the recorded dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidDimension`] for zero dimensions and
    /// [`UniverseError::MalformedFile`] for a shape mismatch.
    pub fn decode_board(&self, rows: &[String]) -> Result<Board, UniverseError> {
        if self.width == 0 || self.height == 0 {
            return Err(UniverseError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if rows.len() != self.height {
            return Err(UniverseError::malformed(format!(
                "generation has {} rows, expected {}",
                rows.len(),
                self.height
            )));
        }
        let decoded: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| plaintext::decode_row(row))
            .collect();
        for (y, cells) in decoded.iter().enumerate() {
            if cells.len() != self.width {
                return Err(UniverseError::malformed(format!(
                    "row {y} has {} cells, expected {}",
                    cells.len(),
                    self.width
                )));
            }
        }

        // Shape now matches rows that exist in memory.
        let mut board = Board::dead(self.width, self.height).ok_or(
            UniverseError::InvalidDimension {
                width: self.width,
                height: self.height,
            },
        )?;
        for (y, cells) in decoded.into_iter().enumerate() {
            for (x, alive) in cells.into_iter().enumerate() {
                if alive {
                    board.set(x, y, true);
                }
            }
        }
        Ok(board)
    }
}
