//! Universe grid, Life rule, and generation history for Chronolife.
//!
//! This crate owns every piece of simulation state: the board, the boundary
//! rule, and the full list of computed generations. Nothing here performs I/O;
//! file contents come in and go out as strings.
//!
//! # Modules
//!
//! - [`universe`] -- [`Universe`], the authoritative state with editing,
//!   time travel, resize, randomize, and import/export.
//! - [`history`] -- Full-snapshot generation store with a cursor.
//! - [`rules`] -- The B3/S23 rule, neighbor counting, and whole-board steps
//!   under finite or toroidal boundaries.
//! - [`plaintext`] -- `!Name:` header plus `O`/`.` grid codec.
//! - [`pattern`] -- Detached cell blocks for copy, cut, paste, and stamp.
//! - [`saved`] -- Tagged JSON records that keep history and cursor.
//! - [`error`] -- Error types for universe operations.

pub mod error;
pub mod history;
pub mod pattern;
pub mod plaintext;
pub mod rules;
pub mod saved;
pub mod universe;

// Re-export primary types at crate root.
pub use error::UniverseError;
pub use history::History;
pub use pattern::Pattern;
pub use plaintext::PlainText;
pub use saved::{SAVED_FORMAT, SavedUniverse};
pub use universe::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Universe};
