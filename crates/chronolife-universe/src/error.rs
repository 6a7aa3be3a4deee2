//! Error types for the `chronolife-universe` crate.
//!
//! All fallible operations in this crate return [`UniverseError`] through the
//! standard [`Result`] type alias.

/// Errors that can occur while building, editing, or loading a universe.
#[derive(Debug, thiserror::Error)]
pub enum UniverseError {
    /// A board dimension was zero (or the cell count overflowed).
    #[error("invalid universe dimensions {width}x{height}")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A plain-text or saved universe could not be parsed.
    #[error("malformed universe file: {reason}")]
    MalformedFile {
        /// What was wrong with the input.
        reason: String,
    },

    /// A read landed outside a finite universe.
    #[error("cell ({x}, {y}) is outside the {width}x{height} universe")]
    IndexOutOfRange {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Universe width.
        width: usize,
        /// Universe height.
        height: usize,
    },

    /// JSON encoding or decoding of a saved universe failed.
    #[error("saved universe serialization failed: {source}")]
    Serialization {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

impl UniverseError {
    /// Shorthand for a [`UniverseError::MalformedFile`] with the given reason.
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFile {
            reason: reason.into(),
        }
    }
}
