//! Error types for the Chronolife engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup, the run, and the final save.

use std::path::PathBuf;

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: chronolife_core::config::ConfigError,
    },

    /// Building, loading, or encoding the universe failed.
    #[error("universe error: {source}")]
    Universe {
        /// The underlying universe error.
        #[from]
        source: chronolife_universe::UniverseError,
    },

    /// The ticker failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: chronolife_core::runner::RunnerError,
    },

    /// Reading or writing a universe file failed.
    #[error("file error at {}: {source}", path.display())]
    File {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
