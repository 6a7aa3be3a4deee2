//! The universe: authoritative board state plus time-indexed history.
//!
//! A [`Universe`] owns a [`History`] of full-board generations and the
//! [`BoundaryMode`] chosen at construction. It exposes two clearly separate
//! kinds of mutation:
//!
//! - **Editing the present** ([`Universe::set`], [`Universe::click_cell`],
//!   [`Universe::paste`], [`Universe::stamp`], overlay import). These change
//!   the viewed board in place. Any generations computed after it are
//!   discarded, since they no longer follow from the edited state.
//! - **Computing the future** ([`Universe::calculate_next_generation`],
//!   [`Universe::goto`]). These apply the Life rule to the newest board and
//!   append the result.
//!
//! Navigation within already computed history never recomputes anything.
//!
//! # Addressing
//!
//! Public coordinates are signed so callers can address cells past the
//! edges. In a finite universe, reads outside the board fail with
//! [`UniverseError::IndexOutOfRange`] and writes outside the board are
//! dropped. In a toroidal universe both reads and writes reduce the
//! coordinate with a true (Euclidean) modulo of the board dimension.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use chronolife_types::{Board, BoundaryMode, GenerationStatus, NeighborCounts, Region};

use crate::error::UniverseError;
use crate::history::History;
use crate::pattern::Pattern;
use crate::plaintext::{self, PlainText};
use crate::rules;
use crate::saved::{SAVED_FORMAT, SavedUniverse};

/// Default board width for a new session.
pub const DEFAULT_WIDTH: usize = 20;

/// Default board height for a new session.
pub const DEFAULT_HEIGHT: usize = 20;

/// A randomized cell is alive with probability `1 / RANDOM_ALIVE_ONE_IN`.
const RANDOM_ALIVE_ONE_IN: u32 = 3;

/// Add an unsigned offset to a signed origin.
fn offset(origin: i64, delta: usize) -> Option<i64> {
    i64::try_from(delta)
        .ok()
        .and_then(|delta| origin.checked_add(delta))
}

/// Reduce `coord` into `[0, len)` with a Euclidean modulo.
fn wrap(coord: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    usize::try_from(coord.checked_rem_euclid(len)?).ok()
}

/// Seed derived from the wall clock, used when the caller gives none.
fn time_seed() -> u64 {
    Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
        .unsigned_abs()
}

/// A Life universe with full generation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    /// Edge handling, fixed at construction.
    boundary: BoundaryMode,
    /// Every computed generation and the cursor.
    history: History,
}

impl Universe {
    // -------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------

    /// Create a universe with a single all-dead generation.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidDimension`] if either dimension is 0.
    pub fn new(width: usize, height: usize, boundary: BoundaryMode) -> Result<Self, UniverseError> {
        let board =
            Board::dead(width, height).ok_or(UniverseError::InvalidDimension { width, height })?;
        Ok(Self::from_board(board, boundary))
    }

    /// Create a universe whose only generation is `board`.
    pub const fn from_board(board: Board, boundary: BoundaryMode) -> Self {
        Self {
            boundary,
            history: History::new(board),
        }
    }

    /// Create a universe from plain text, sized to the parsed grid.
    ///
    /// Returns the universe with the parsed name and description.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::MalformedFile`] if the text cannot be parsed.
    pub fn from_plain_text(
        text: &str,
        boundary: BoundaryMode,
    ) -> Result<(Self, String, String), UniverseError> {
        let parsed = PlainText::parse_str(text)?;
        let board = parsed.to_board()?;
        Ok((
            Self::from_board(board, boundary),
            parsed.name,
            parsed.description,
        ))
    }

    /// Rebuild a universe from a saved record, history and cursor included.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::MalformedFile`] for an unknown format tag,
    /// an empty generation list, a cursor past the end, or any generation
    /// whose shape does not match the recorded dimensions.
    pub fn from_saved(saved: &SavedUniverse) -> Result<Self, UniverseError> {
        if saved.format != SAVED_FORMAT {
            return Err(UniverseError::malformed(format!(
                "unsupported saved format {:?}",
                saved.format
            )));
        }
        let boards = saved
            .generations
            .iter()
            .map(|rows| saved.decode_board(rows))
            .collect::<Result<Vec<_>, _>>()?;
        if boards.is_empty() {
            return Err(UniverseError::malformed("saved universe has no generations"));
        }
        let history = History::from_generations(boards, saved.current).ok_or_else(|| {
            UniverseError::malformed(format!(
                "saved cursor {} is past the last generation",
                saved.current
            ))
        })?;
        Ok(Self {
            boundary: BoundaryMode::from_toroidal(saved.toroidal),
            history,
        })
    }

    // -------------------------------------------------------------------
    // Queries (side-effect free)
    // -------------------------------------------------------------------

    /// Board width.
    pub const fn width(&self) -> usize {
        self.history.present().width()
    }

    /// Board height.
    pub const fn height(&self) -> usize {
        self.history.present().height()
    }

    /// Edge handling of this universe.
    pub const fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Whether this universe wraps at its edges.
    pub const fn is_toroidal(&self) -> bool {
        self.boundary.is_toroidal()
    }

    /// Index of the viewed generation.
    pub fn current(&self) -> usize {
        self.history.current()
    }

    /// Number of generations in history.
    pub fn total_generations(&self) -> usize {
        self.history.len()
    }

    /// The viewed board.
    pub const fn board(&self) -> &Board {
        self.history.present()
    }

    /// Generation `index` from history, if it has been computed.
    pub fn generation(&self, index: usize) -> Option<&Board> {
        self.history.get(index)
    }

    /// Read-only access to the history store.
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Number of live cells on the viewed board.
    pub fn total_living(&self) -> usize {
        self.history.present().living()
    }

    /// Live-neighbor count of every cell on the viewed board.
    pub fn neighbor_count(&self) -> NeighborCounts {
        rules::neighbor_counts(self.history.present(), self.boundary)
    }

    /// Position, population, and shape of the viewed generation.
    pub fn status(&self) -> GenerationStatus {
        GenerationStatus {
            current: self.current(),
            total: self.total_generations(),
            living: self.total_living(),
            width: self.width(),
            height: self.height(),
            boundary: self.boundary,
        }
    }

    /// Read the cell at `(x, y)` on the viewed board.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::IndexOutOfRange`] for a coordinate outside
    /// a finite universe. Toroidal universes wrap and never fail.
    pub fn get(&self, x: i64, y: i64) -> Result<bool, UniverseError> {
        self.resolve(x, y)
            .and_then(|(cx, cy)| self.history.present().get(cx, cy))
            .ok_or_else(|| UniverseError::IndexOutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
    }

    /// Map a public coordinate to a board coordinate under the boundary rule.
    fn resolve(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let (width, height) = (self.width(), self.height());
        match self.boundary {
            BoundaryMode::Finite => {
                let cx = usize::try_from(x).ok().filter(|&cx| cx < width)?;
                let cy = usize::try_from(y).ok().filter(|&cy| cy < height)?;
                Some((cx, cy))
            }
            BoundaryMode::Toroidal => Some((wrap(x, width)?, wrap(y, height)?)),
        }
    }

    // -------------------------------------------------------------------
    // Editing the present
    // -------------------------------------------------------------------

    /// Write the cell at `(x, y)` on the viewed board.
    ///
    /// Finite universes silently drop writes outside the board. Toroidal
    /// universes wrap the coordinate. A write that changes the board
    /// discards any generations after the viewed one.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let Some((cx, cy)) = self.resolve(x, y) else {
            return;
        };
        if self.history.present().get(cx, cy) == Some(alive) {
            return;
        }
        self.history.present_mut().set(cx, cy, alive);
        self.discard_future();
    }

    /// Jump to the newest generation (without computing a new one) and
    /// toggle the cell at `(x, y)`.
    ///
    /// Returns the cell's new state, or `None` if the click fell outside a
    /// finite universe.
    pub fn click_cell(&mut self, x: i64, y: i64) -> Option<bool> {
        self.history.seek_last();
        let (cx, cy) = self.resolve(x, y)?;
        self.history.present_mut().toggle(cx, cy)
    }

    /// Copy a rectangle of the viewed board.
    ///
    /// Cells of the region that fall off a finite board read as dead;
    /// toroidal universes wrap.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidDimension`] for an empty region.
    pub fn copy_region(&self, region: Region) -> Result<Pattern, UniverseError> {
        let mut cells =
            Board::dead(region.width, region.height).ok_or(UniverseError::InvalidDimension {
                width: region.width,
                height: region.height,
            })?;
        for (dx, dy) in region.offsets() {
            let alive = offset(region.x, dx)
                .zip(offset(region.y, dy))
                .and_then(|(x, y)| self.resolve(x, y))
                .and_then(|(x, y)| self.history.present().get(x, y))
                .unwrap_or(false);
            if alive {
                cells.set(dx, dy, true);
            }
        }
        Ok(Pattern::from_board(cells))
    }

    /// Copy a rectangle of the viewed board, then clear it.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidDimension`] for an empty region.
    pub fn cut_region(&mut self, region: Region) -> Result<Pattern, UniverseError> {
        let pattern = self.copy_region(region)?;
        for (dx, dy) in region.offsets() {
            if let Some((x, y)) = offset(region.x, dx).zip(offset(region.y, dy)) {
                self.set(x, y, false);
            }
        }
        Ok(pattern)
    }

    /// Write every cell of `pattern` (alive and dead) with its top-left
    /// corner at `(x, y)`, using [`Universe::set`] addressing.
    pub fn paste(&mut self, pattern: &Pattern, x: i64, y: i64) {
        for (dx, dy, alive) in pattern.cells() {
            if let Some((px, py)) = offset(x, dx).zip(offset(y, dy)) {
                self.set(px, py, alive);
            }
        }
    }

    /// Bring the live cells of `pattern` to life with its top-left corner at
    /// `(x, y)`. Dead pattern cells leave the board untouched.
    pub fn stamp(&mut self, pattern: &Pattern, x: i64, y: i64) {
        for (dx, dy, alive) in pattern.cells() {
            if !alive {
                continue;
            }
            if let Some((px, py)) = offset(x, dx).zip(offset(y, dy)) {
                self.set(px, py, true);
            }
        }
    }

    /// Drop generations after the viewed one, logging if any existed.
    fn discard_future(&mut self) {
        let dropped = self.history.truncate_future();
        if dropped > 0 {
            debug!(
                current = self.history.current(),
                dropped, "Edit discarded forward generations"
            );
        }
    }

    // -------------------------------------------------------------------
    // Computing the future and moving through time
    // -------------------------------------------------------------------

    /// Apply the Life rule to the newest generation and append the result.
    ///
    /// The cursor moves to the newly computed generation.
    pub fn calculate_next_generation(&mut self) {
        self.history.seek_last();
        let next = rules::next_generation(self.history.present(), self.boundary);
        self.history.push(next);
        debug!(
            generation = self.history.current(),
            living = self.history.present().living(),
            "Generation computed"
        );
    }

    /// View generation `generation`.
    ///
    /// Within computed history this only moves the cursor. Past the end,
    /// generations are computed one at a time until `generation` exists, so
    /// `goto(current + n)` equals `n` calls to
    /// [`Universe::calculate_next_generation`] from the newest board.
    ///
    /// There is no upper bound on `generation`: time and memory grow
    /// linearly with the distance past the newest generation, one full board
    /// per step. Callers taking targets from untrusted input should bound
    /// them first.
    pub fn goto(&mut self, generation: usize) {
        if generation <= self.history.last_index() {
            self.history.seek(generation);
            return;
        }
        self.history.seek_last();
        while self.history.last_index() < generation {
            self.calculate_next_generation();
        }
    }

    /// View the previous generation. No-op at generation 0.
    pub fn step_back(&mut self) {
        self.history.back();
    }

    /// View the next generation, computing it if necessary.
    pub fn step_forward(&mut self) {
        self.goto(self.current().saturating_add(1));
    }

    // -------------------------------------------------------------------
    // Whole-universe resets
    // -------------------------------------------------------------------

    /// Replace history with one random board; each cell is alive with
    /// probability 1/3.
    ///
    /// Uses `seed` when given, otherwise a clock-derived seed. Returns the
    /// seed actually used so a run can be reproduced.
    pub fn randomize(&mut self, seed: Option<u64>) -> u64 {
        let seed = seed.unwrap_or_else(time_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = self.history.present().dead_like();
        for y in 0..board.height() {
            for x in 0..board.width() {
                if rng.random_ratio(1, RANDOM_ALIVE_ONE_IN) {
                    board.set(x, y, true);
                }
            }
        }
        self.history.reset(board);
        debug!(seed, living = self.total_living(), "Universe randomized");
        seed
    }

    /// Collapse history to the viewed board, which becomes generation 0.
    pub fn clear_diff_map(&mut self) {
        let discarded = self.history.len().saturating_sub(1);
        self.history.collapse();
        debug!(discarded, "History cleared");
    }

    /// Alias for [`Universe::clear_diff_map`].
    pub fn clear_history(&mut self) {
        self.clear_diff_map();
    }

    /// Change either dimension (`None` keeps it).
    ///
    /// The overlapping region of the viewed board is kept, new cells start
    /// dead, and history is reset to the reshaped board.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::InvalidDimension`] if a new dimension is 0.
    /// The universe is unchanged on error.
    pub fn resize(
        &mut self,
        width: Option<usize>,
        height: Option<usize>,
    ) -> Result<(), UniverseError> {
        let width = width.unwrap_or_else(|| self.width());
        let height = height.unwrap_or_else(|| self.height());
        let board = self
            .history
            .present()
            .reshaped(width, height)
            .ok_or(UniverseError::InvalidDimension { width, height })?;
        self.history.reset(board);
        debug!(width, height, "Universe resized");
        Ok(())
    }

    // -------------------------------------------------------------------
    // Text and saved formats
    // -------------------------------------------------------------------

    /// Encode the viewed board as plain text with a name/description header.
    pub fn save_to_plain_text(&self, name: &str, description: &str) -> String {
        plaintext::encode(self.history.present(), name, description)
    }

    /// Encode only the grid rows of the viewed board.
    pub fn to_cells_text(&self) -> String {
        plaintext::encode_cells(self.history.present())
    }

    /// Load plain-text lines into this universe.
    ///
    /// With `is_import == false` the whole universe is replaced: dimensions
    /// come from the parsed grid and history restarts at that board. With
    /// `is_import == true` the parsed grid is laid over the viewed board at
    /// the origin. Cells outside the board (or missing from short rows) are
    /// skipped, dimensions are kept, and generations after the viewed one
    /// are discarded if anything changed.
    ///
    /// Returns the parsed `(name, description)`.
    ///
    /// # Errors
    ///
    /// Returns [`UniverseError::MalformedFile`] if parsing fails. The
    /// universe is not modified on error.
    pub fn load_from_file<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        is_import: bool,
    ) -> Result<(String, String), UniverseError> {
        let parsed = PlainText::parse(lines)?;
        if is_import {
            let mut changed = false;
            let board = self.history.present_mut();
            for (x, y, alive) in parsed.cells() {
                if board.get(x, y).is_some_and(|current| current != alive) {
                    board.set(x, y, alive);
                    changed = true;
                }
            }
            if changed {
                self.discard_future();
            }
            debug!(
                width = parsed.width(),
                height = parsed.height(),
                "Plain-text grid imported"
            );
        } else {
            let board = parsed.to_board()?;
            self.history.reset(board);
            debug!(
                width = self.width(),
                height = self.height(),
                "Plain-text universe loaded"
            );
        }
        Ok((parsed.name, parsed.description))
    }

    /// [`Universe::load_from_file`] on a single string.
    ///
    /// # Errors
    ///
    /// Same as [`Universe::load_from_file`].
    pub fn load_from_str(
        &mut self,
        text: &str,
        is_import: bool,
    ) -> Result<(String, String), UniverseError> {
        let lines: Vec<&str> = text.lines().collect();
        self.load_from_file(&lines, is_import)
    }

    /// Build a saved record of this universe.
    ///
    /// With `include_history` every generation and the cursor are stored;
    /// otherwise only the viewed board, as generation 0.
    pub fn to_saved(&self, name: &str, description: &str, include_history: bool) -> SavedUniverse {
        let (generations, current) = if include_history {
            (
                self.history.iter().map(SavedUniverse::encode_board).collect(),
                self.current(),
            )
        } else {
            (
                vec![SavedUniverse::encode_board(self.history.present())],
                0,
            )
        };
        SavedUniverse {
            format: SAVED_FORMAT.to_owned(),
            name: name.to_owned(),
            description: plaintext::flatten_description(description),
            width: self.width(),
            height: self.height(),
            toroidal: self.is_toroidal(),
            current,
            generations,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn finite(width: usize, height: usize) -> Universe {
        Universe::new(width, height, BoundaryMode::Finite).unwrap()
    }

    fn toroidal(width: usize, height: usize) -> Universe {
        Universe::new(width, height, BoundaryMode::Toroidal).unwrap()
    }

    fn living_cells(universe: &Universe) -> Vec<(usize, usize)> {
        let board = universe.board();
        let mut cells = Vec::new();
        for y in 0..board.height() {
            for x in 0..board.width() {
                if board.get(x, y) == Some(true) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Universe::new(0, 5, BoundaryMode::Finite),
            Err(UniverseError::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(Universe::new(5, 0, BoundaryMode::Toroidal).is_err());
    }

    #[test]
    fn new_universe_is_single_dead_generation() {
        let universe = finite(4, 3);
        assert_eq!(universe.width(), 4);
        assert_eq!(universe.height(), 3);
        assert_eq!(universe.current(), 0);
        assert_eq!(universe.total_generations(), 1);
        assert_eq!(universe.total_living(), 0);
        assert!(!universe.is_toroidal());
    }

    #[test]
    fn finite_get_out_of_range_fails() {
        let universe = finite(5, 5);
        assert!(matches!(
            universe.get(5, 0),
            Err(UniverseError::IndexOutOfRange { x: 5, y: 0, .. })
        ));
        assert!(universe.get(-1, 0).is_err());
        assert!(!universe.get(4, 4).unwrap());
    }

    #[test]
    fn finite_out_of_bounds_writes_are_dropped() {
        let mut universe = finite(5, 5);
        universe.set(-1, 0, true);
        universe.set(5, 0, true);
        universe.set(0, 5, true);
        assert_eq!(universe.total_living(), 0);
        assert_eq!(universe.total_generations(), 1);
    }

    #[test]
    fn toroidal_wraps_reads_and_writes() {
        let mut universe = toroidal(5, 5);
        universe.set(-1, 5, true);
        assert!(universe.get(4, 0).unwrap());
        assert!(universe.get(-1, 0).unwrap());
        assert!(universe.get(9, 10).unwrap());
        universe.set(5, 5, true);
        assert!(universe.get(0, 0).unwrap());
        assert_eq!(universe.total_living(), 2);
    }

    #[test]
    fn click_toggles_at_last_generation_without_computing() {
        let mut universe = finite(5, 5);
        universe.calculate_next_generation();
        universe.calculate_next_generation();
        universe.goto(0);

        assert_eq!(universe.click_cell(2, 2), Some(true));
        assert_eq!(universe.current(), 2);
        assert_eq!(universe.total_generations(), 3);
        assert!(universe.get(2, 2).unwrap());
        // Earlier generations are untouched.
        assert_eq!(universe.generation(0).unwrap().living(), 0);

        assert_eq!(universe.click_cell(2, 2), Some(false));
        assert_eq!(universe.click_cell(9, 9), None);
    }

    #[test]
    fn blinker_flips_and_returns() {
        let mut universe = finite(5, 5);
        for x in 1..=3 {
            universe.set(x, 2, true);
        }
        universe.calculate_next_generation();
        assert_eq!(living_cells(&universe), vec![(2, 1), (2, 2), (2, 3)]);
        universe.calculate_next_generation();
        assert_eq!(living_cells(&universe), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(universe.total_generations(), 3);
    }

    #[test]
    fn goto_current_is_a_no_op() {
        let mut universe = finite(5, 5);
        universe.randomize(Some(7));
        universe.calculate_next_generation();
        let before = universe.clone();
        universe.goto(universe.current());
        assert_eq!(universe, before);
    }

    #[test]
    fn goto_past_end_computes_every_generation() {
        let mut stepped = finite(8, 8);
        stepped.randomize(Some(42));
        let mut jumped = stepped.clone();

        for _ in 0..5 {
            stepped.calculate_next_generation();
        }
        jumped.goto(5);

        assert_eq!(jumped.total_generations(), 6);
        assert_eq!(jumped.current(), 5);
        assert_eq!(jumped.board(), stepped.board());
    }

    #[test]
    fn navigation_reuses_history() {
        let mut universe = finite(6, 6);
        universe.randomize(Some(3));
        universe.goto(3);
        let third = universe.board().clone();

        universe.goto(1);
        assert_eq!(universe.current(), 1);
        universe.goto(3);
        assert_eq!(universe.board(), &third);
        assert_eq!(universe.total_generations(), 4);
    }

    #[test]
    fn step_back_and_forward() {
        let mut universe = finite(4, 4);
        universe.step_back();
        assert_eq!(universe.current(), 0);

        universe.step_forward();
        assert_eq!(universe.current(), 1);
        assert_eq!(universe.total_generations(), 2);

        universe.step_back();
        assert_eq!(universe.current(), 0);
        universe.step_forward();
        assert_eq!(universe.total_generations(), 2);
    }

    #[test]
    fn calculate_from_middle_appends_at_tail() {
        let mut universe = finite(5, 5);
        universe.randomize(Some(11));
        universe.goto(3);
        universe.goto(1);
        universe.calculate_next_generation();
        assert_eq!(universe.total_generations(), 5);
        assert_eq!(universe.current(), 4);
    }

    #[test]
    fn edit_in_past_discards_future() {
        let mut universe = finite(5, 5);
        universe.randomize(Some(5));
        universe.goto(4);
        universe.goto(1);

        let value = universe.get(0, 0).unwrap();
        universe.set(0, 0, value);
        assert_eq!(universe.total_generations(), 5, "no-op write keeps future");

        universe.set(0, 0, !value);
        assert_eq!(universe.total_generations(), 2);
        assert_eq!(universe.current(), 1);

        let edited = universe.board().clone();
        universe.goto(2);
        assert_eq!(
            universe.board(),
            &rules::next_generation(&edited, BoundaryMode::Finite)
        );
    }

    #[test]
    fn randomize_is_seeded_and_resets_history() {
        let mut a = finite(30, 30);
        let mut b = finite(30, 30);
        a.calculate_next_generation();
        assert_eq!(a.randomize(Some(99)), 99);
        b.randomize(Some(99));
        assert_eq!(a.board(), b.board());
        assert_eq!(a.total_generations(), 1);
        assert_eq!(a.current(), 0);

        // Roughly a third of 900 cells should be alive.
        let living = a.total_living();
        assert!((200..400).contains(&living), "living = {living}");
    }

    #[test]
    fn clear_diff_map_keeps_viewed_board() {
        let mut universe = finite(6, 6);
        universe.randomize(Some(1));
        universe.goto(3);
        universe.goto(2);
        let viewed = universe.board().clone();

        universe.clear_diff_map();
        assert_eq!(universe.total_generations(), 1);
        assert_eq!(universe.current(), 0);
        assert_eq!(universe.board(), &viewed);
    }

    #[test]
    fn resize_preserves_overlap() {
        let mut universe = finite(6, 6);
        universe.set(1, 1, true);
        universe.set(5, 5, true);
        universe.set(5, 0, true);
        universe.calculate_next_generation();
        universe.goto(0);

        universe.resize(Some(3), None).unwrap();
        assert_eq!((universe.width(), universe.height()), (3, 6));
        assert_eq!(universe.total_generations(), 1);
        assert_eq!(living_cells(&universe), vec![(1, 1)]);

        universe.resize(Some(6), Some(6)).unwrap();
        assert_eq!(living_cells(&universe), vec![(1, 1)]);
    }

    #[test]
    fn resize_to_zero_fails_without_change() {
        let mut universe = finite(4, 4);
        universe.set(0, 0, true);
        assert!(universe.resize(Some(0), None).is_err());
        assert_eq!(universe.width(), 4);
        assert!(universe.get(0, 0).unwrap());
    }

    #[test]
    fn neighbor_count_respects_boundary() {
        let mut ring = toroidal(5, 5);
        ring.set(4, 4, true);
        ring.set(4, 0, true);
        ring.set(0, 4, true);
        assert_eq!(ring.neighbor_count().get(0, 0), Some(3));

        let mut flat = finite(5, 5);
        flat.set(4, 4, true);
        flat.set(4, 0, true);
        flat.set(0, 4, true);
        assert_eq!(flat.neighbor_count().get(0, 0), Some(0));
    }

    #[test]
    fn status_reports_cursor_and_population() {
        let mut universe = toroidal(3, 4);
        universe.set(0, 0, true);
        let status = universe.status();
        assert_eq!(status.current, 0);
        assert_eq!(status.total, 1);
        assert_eq!(status.living, 1);
        assert_eq!((status.width, status.height), (3, 4));
        assert_eq!(status.boundary, BoundaryMode::Toroidal);
    }
}
