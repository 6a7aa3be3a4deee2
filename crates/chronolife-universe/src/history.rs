//! Generation history store.
//!
//! Every generation is kept as a full [`Board`] snapshot so the universe can
//! move backward and forward without recomputing anything. The store is a
//! zipper over the generation sequence:
//!
//! ```text
//! past (0 .. current)   present (current)   future (current + 1 ..)
//! [B0, B1, B2]          B3                  [B5, B4]   <- stack, top = next
//! ```
//!
//! The viewed board is always owned directly (`present`), so reads and edits
//! of the current generation never go through a fallible index. Moving the
//! cursor shuffles boards between the two stacks.
//!
//! Growth only happens at the tail ([`History::push`]). Everything else that
//! shrinks the sequence (reset, collapse, truncation after an edit) leaves
//! at least the present board behind.

use chronolife_types::Board;

/// Ordered full-board snapshots with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Generations before the cursor, oldest first.
    past: Vec<Board>,
    /// The generation under the cursor.
    present: Board,
    /// Generations after the cursor, newest first (top of stack is next).
    future: Vec<Board>,
}

impl History {
    /// Start a history whose only generation is `board`.
    pub const fn new(board: Board) -> Self {
        Self {
            past: Vec::new(),
            present: board,
            future: Vec::new(),
        }
    }

    /// Rebuild a history from an ordered list of generations and a cursor.
    ///
    /// Returns `None` if the list is empty or `current` is past its end.
    pub fn from_generations(mut generations: Vec<Board>, current: usize) -> Option<Self> {
        if current >= generations.len() {
            return None;
        }
        let mut future = generations.split_off(current.checked_add(1)?);
        future.reverse();
        let present = generations.pop()?;
        Some(Self {
            past: generations,
            present,
            future,
        })
    }

    /// Total number of generations held.
    pub fn len(&self) -> usize {
        self.past
            .len()
            .saturating_add(1)
            .saturating_add(self.future.len())
    }

    /// A history always holds at least one generation.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Index of the generation under the cursor.
    pub fn current(&self) -> usize {
        self.past.len()
    }

    /// Index of the newest generation.
    pub fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Whether the cursor is on the newest generation.
    pub fn at_last(&self) -> bool {
        self.future.is_empty()
    }

    /// The generation under the cursor.
    pub const fn present(&self) -> &Board {
        &self.present
    }

    /// Mutable access to the generation under the cursor.
    ///
    /// Callers that change the board are responsible for discarding the
    /// now-stale future with [`History::truncate_future`].
    pub const fn present_mut(&mut self) -> &mut Board {
        &mut self.present
    }

    /// Generation `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Board> {
        let current = self.current();
        if index < current {
            return self.past.get(index);
        }
        if index == current {
            return Some(&self.present);
        }
        let ahead = index.checked_sub(current)?.checked_sub(1)?;
        let slot = self.future.len().checked_sub(1)?.checked_sub(ahead)?;
        self.future.get(slot)
    }

    /// Iterate over all generations, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.past
            .iter()
            .chain(core::iter::once(&self.present))
            .chain(self.future.iter().rev())
    }

    /// Move the cursor one generation forward. Returns `false` at the end.
    pub fn forward(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let previous = core::mem::replace(&mut self.present, next);
                self.past.push(previous);
                true
            }
            None => false,
        }
    }

    /// Move the cursor one generation back. Returns `false` at generation 0.
    pub fn back(&mut self) -> bool {
        match self.past.pop() {
            Some(prev) => {
                let later = core::mem::replace(&mut self.present, prev);
                self.future.push(later);
                true
            }
            None => false,
        }
    }

    /// Move the cursor to `index`, clamped to the last generation.
    pub fn seek(&mut self, index: usize) {
        while self.current() < index && self.forward() {}
        while self.current() > index && self.back() {}
    }

    /// Move the cursor to the newest generation.
    pub fn seek_last(&mut self) {
        while self.forward() {}
    }

    /// Append a generation after the newest one and move the cursor onto it.
    pub fn push(&mut self, board: Board) {
        self.seek_last();
        let previous = core::mem::replace(&mut self.present, board);
        self.past.push(previous);
    }

    /// Drop every generation after the cursor. Returns how many were dropped.
    pub fn truncate_future(&mut self) -> usize {
        let dropped = self.future.len();
        self.future.clear();
        dropped
    }

    /// Keep only the generation under the cursor, which becomes generation 0.
    pub fn collapse(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Replace the whole history with a single generation.
    pub fn reset(&mut self, board: Board) {
        self.past.clear();
        self.future.clear();
        self.present = board;
    }
}
