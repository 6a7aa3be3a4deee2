//! Enumeration types for the Chronolife simulation.

use serde::{Deserialize, Serialize};

/// How a universe treats its edges.
///
/// The mode is fixed when a universe is constructed. It controls both the
/// neighbor-counting rule and how out-of-range coordinates are addressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Cells beyond the edge do not exist. Neighbors off the board are not
    /// counted and writes off the board are dropped.
    #[default]
    Finite,
    /// The board wraps on both axes. Coordinates are reduced modulo the
    /// board dimensions on read and write.
    Toroidal,
}

impl BoundaryMode {
    /// Map a `toroidal` flag (as stored in settings files) to a mode.
    pub const fn from_toroidal(toroidal: bool) -> Self {
        if toroidal { Self::Toroidal } else { Self::Finite }
    }

    /// Whether this mode wraps at the edges.
    pub const fn is_toroidal(self) -> bool {
        matches!(self, Self::Toroidal)
    }
}

impl core::fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Finite => write!(f, "finite"),
            Self::Toroidal => write!(f, "toroidal"),
        }
    }
}
