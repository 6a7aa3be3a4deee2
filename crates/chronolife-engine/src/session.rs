//! Building the starting universe and writing it back out.
//!
//! The starting universe comes from `universe.load_path` when set: a plain
//! text file, or a saved JSON record (by `.json` extension) that also
//! restores history. Otherwise a board of the configured size is
//! randomized. On exit the viewed board is written as plain text to
//! `output.save_path`, and with `include_history` a JSON record of every
//! generation is written beside it.

use std::path::{Path, PathBuf};

use chronolife_core::config::{OutputConfig, UniverseConfig};
use chronolife_universe::{SavedUniverse, Universe};
use tracing::{info, warn};

use crate::error::EngineError;

/// Extension that marks a saved JSON record.
const SAVED_EXTENSION: &str = "json";

/// Extension given to the history record written beside the text file.
const HISTORY_EXTENSION: &str = "history.json";

fn read_file(path: &Path) -> Result<String, EngineError> {
    std::fs::read_to_string(path).map_err(|source| EngineError::File {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), EngineError> {
    std::fs::write(path, contents).map_err(|source| EngineError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the universe the run starts from.
///
/// # Errors
///
/// Returns [`EngineError::File`] if `load_path` cannot be read and
/// [`EngineError::Universe`] if its contents are malformed or the
/// configured dimensions are invalid.
pub fn build_universe(config: &UniverseConfig) -> Result<Universe, EngineError> {
    let boundary = config.boundary();

    let Some(path) = config.load_path.as_deref() else {
        let mut universe = Universe::new(config.width, config.height, boundary)?;
        let seed = universe.randomize(config.seed);
        info!(
            width = config.width,
            height = config.height,
            boundary = %boundary,
            seed,
            living = universe.total_living(),
            "Random universe created"
        );
        return Ok(universe);
    };

    let contents = read_file(path)?;
    let is_saved = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SAVED_EXTENSION));

    if is_saved {
        let saved = SavedUniverse::from_json(&contents)?;
        let universe = Universe::from_saved(&saved)?;
        if universe.boundary() != boundary {
            warn!(
                path = %path.display(),
                saved = %universe.boundary(),
                configured = %boundary,
                "Saved record boundary overrides configuration"
            );
        }
        info!(
            path = %path.display(),
            name = saved.name,
            generations = universe.total_generations(),
            current = universe.current(),
            "Saved universe loaded"
        );
        return Ok(universe);
    }

    let (universe, name, description) = Universe::from_plain_text(&contents, boundary)?;
    info!(
        path = %path.display(),
        name,
        description,
        width = universe.width(),
        height = universe.height(),
        living = universe.total_living(),
        "Plain-text universe loaded"
    );
    Ok(universe)
}

/// Path of the history record written beside `save_path`.
pub fn history_path(save_path: &Path) -> PathBuf {
    save_path.with_extension(HISTORY_EXTENSION)
}

/// Write the universe as configured. Returns the paths written.
///
/// # Errors
///
/// Returns [`EngineError::File`] if a file cannot be written and
/// [`EngineError::Universe`] if the JSON record cannot be encoded.
pub fn save_outputs(
    universe: &Universe,
    output: &OutputConfig,
) -> Result<Vec<PathBuf>, EngineError> {
    let Some(save_path) = output.save_path.as_deref() else {
        info!("No save path configured, skipping output");
        return Ok(Vec::new());
    };

    let mut written = Vec::with_capacity(2);

    let text = universe.save_to_plain_text(&output.name, &output.description);
    write_file(save_path, &text)?;
    info!(path = %save_path.display(), "Universe saved as plain text");
    written.push(save_path.to_path_buf());

    if output.include_history {
        let record = universe.to_saved(&output.name, &output.description, true);
        let path = history_path(save_path);
        write_file(&path, &record.to_json()?)?;
        info!(
            path = %path.display(),
            generations = record.generations.len(),
            "Universe history saved"
        );
        written.push(path);
    }

    Ok(written)
}
