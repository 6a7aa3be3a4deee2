//! Configuration loading and typed config structures for Chronolife.
//!
//! The configuration lives in `chronolife-config.yaml` next to the binary's
//! working directory. Every field has a default, so an empty file (or no
//! file at all) yields a runnable 20x20 finite universe ticking once per
//! second.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use chronolife_types::{BoundaryMode, StatusFields};

/// Environment variable that overrides `ticker.interval_ms`.
pub const TICK_INTERVAL_ENV: &str = "CHRONOLIFE_TICK_INTERVAL_MS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Which value was rejected and why.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `chronolife-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Initial universe shape and contents.
    #[serde(default)]
    pub universe: UniverseConfig,

    /// Generation ticker timing and bounds.
    #[serde(default)]
    pub ticker: TickerConfig,

    /// Where and how to write the universe on exit.
    #[serde(default)]
    pub output: OutputConfig,

    /// Which fields appear in the status line.
    #[serde(default)]
    pub status: StatusConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The environment variable [`TICK_INTERVAL_ENV`] overrides
    /// `ticker.interval_ms` when set to a valid integer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(TICK_INTERVAL_ENV) {
            self.ticker.override_interval(&val);
        }
    }

    /// Check values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero board dimension or a zero
    /// tick interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.universe.width == 0 || self.universe.height == 0 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "universe dimensions must be at least 1x1, got {}x{}",
                    self.universe.width, self.universe.height
                ),
            });
        }
        if self.ticker.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: String::from("ticker.interval_ms must be at least 1"),
            });
        }
        Ok(())
    }
}

/// Initial universe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UniverseConfig {
    /// Board width in cells.
    #[serde(default = "default_dimension")]
    pub width: usize,

    /// Board height in cells.
    #[serde(default = "default_dimension")]
    pub height: usize,

    /// Whether the board wraps at its edges.
    #[serde(default)]
    pub toroidal: bool,

    /// Seed for the initial random board (clock-derived when absent).
    #[serde(default)]
    pub seed: Option<u64>,

    /// File to load instead of randomizing: plain text, or a saved JSON
    /// record when the extension is `.json`.
    #[serde(default)]
    pub load_path: Option<PathBuf>,
}

impl UniverseConfig {
    /// Boundary mode selected by `toroidal`.
    pub const fn boundary(&self) -> BoundaryMode {
        BoundaryMode::from_toroidal(self.toroidal)
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: default_dimension(),
            height: default_dimension(),
            toroidal: false,
            seed: None,
            load_path: None,
        }
    }
}

/// Generation ticker configuration.
///
/// A value of 0 for `max_generations` means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TickerConfig {
    /// Real-time milliseconds between generations.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Number of generations to compute before stopping (0 = unlimited).
    #[serde(default)]
    pub max_generations: u64,
}

impl TickerConfig {
    /// Replace `interval_ms` with `raw` if it parses as an integer.
    fn override_interval(&mut self, raw: &str) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => self.interval_ms = ms,
            Err(e) => warn!(
                variable = TICK_INTERVAL_ENV,
                value = raw,
                error = %e,
                "Ignoring unparseable tick interval override"
            ),
        }
    }
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            max_generations: 0,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Plain-text file written on exit (nothing is written when absent).
    #[serde(default)]
    pub save_path: Option<PathBuf>,

    /// Name written into the `!Name:` header.
    #[serde(default = "default_output_name")]
    pub name: String,

    /// Description written into the header.
    #[serde(default)]
    pub description: String,

    /// Also write a JSON record with every generation beside the text file.
    #[serde(default)]
    pub include_history: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            name: default_output_name(),
            description: String::new(),
            include_history: false,
        }
    }
}

/// Status line configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[allow(clippy::struct_field_names)]
pub struct StatusConfig {
    /// Show the current generation.
    #[serde(default = "default_true")]
    pub show_current: bool,

    /// Show the total number of generations.
    #[serde(default = "default_true")]
    pub show_total: bool,

    /// Show the live cell count.
    #[serde(default = "default_true")]
    pub show_living: bool,
}

impl StatusConfig {
    /// The status-line field selection.
    pub const fn fields(self) -> StatusFields {
        StatusFields {
            current: self.show_current,
            total: self.show_total,
            living: self.show_living,
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            show_current: true,
            show_total: true,
            show_living: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_dimension() -> usize {
    20
}

const fn default_interval_ms() -> u64 {
    1000
}

fn default_output_name() -> String {
    String::from("Chronolife")
}

fn default_log_level() -> String {
    String::from("info")
}

const fn default_true() -> bool {
    true
}
