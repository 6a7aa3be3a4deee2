//! Read-only generation status.
//!
//! [`GenerationStatus`] is the snapshot a rendering or logging collaborator
//! reads after each step: position in history, population, and shape. It is
//! cheap to build and carries no references into the universe.

use serde::{Deserialize, Serialize};

use crate::enums::BoundaryMode;

/// Which fields appear in a rendered status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct StatusFields {
    /// Show the current generation (1-based).
    pub current: bool,
    /// Show the total number of computed generations.
    pub total: bool,
    /// Show the live cell count.
    pub living: bool,
}

impl Default for StatusFields {
    fn default() -> Self {
        Self {
            current: true,
            total: true,
            living: true,
        }
    }
}

/// Position, population, and shape of a universe at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStatus {
    /// Zero-based index of the generation being viewed.
    pub current: usize,
    /// Number of generations in history.
    pub total: usize,
    /// Live cells on the viewed board.
    pub living: usize,
    /// Board width.
    pub width: usize,
    /// Board height.
    pub height: usize,
    /// Edge handling of the universe.
    pub boundary: BoundaryMode,
}

impl GenerationStatus {
    /// Whether the viewed generation is the newest one in history.
    pub const fn at_latest(&self) -> bool {
        self.current.saturating_add(1) == self.total
    }

    /// Render the status line, e.g. `Current: 3 | Total: 5 | Living: 12`.
    ///
    /// The current generation is shown 1-based. Disabled fields are omitted
    /// along with their separators.
    pub fn status_line(&self, fields: StatusFields) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        if fields.current {
            parts.push(format!("Current: {}", self.current.saturating_add(1)));
        }
        if fields.total {
            parts.push(format!("Total: {}", self.total));
        }
        if fields.living {
            parts.push(format!("Living: {}", self.living));
        }
        parts.join(" | ")
    }
}

impl core::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.status_line(StatusFields::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenerationStatus {
        GenerationStatus {
            current: 2,
            total: 5,
            living: 12,
            width: 20,
            height: 20,
            boundary: BoundaryMode::Finite,
        }
    }

    #[test]
    fn full_status_line() {
        assert_eq!(sample().to_string(), "Current: 3 | Total: 5 | Living: 12");
    }

    #[test]
    fn disabled_fields_drop_separators() {
        let fields = StatusFields {
            current: false,
            total: true,
            living: true,
        };
        assert_eq!(sample().status_line(fields), "Total: 5 | Living: 12");

        let fields = StatusFields {
            current: false,
            total: false,
            living: false,
        };
        assert_eq!(sample().status_line(fields), "");
    }

    #[test]
    fn at_latest_tracks_cursor() {
        let mut status = sample();
        assert!(!status.at_latest());
        status.current = 4;
        assert!(status.at_latest());
    }
}
