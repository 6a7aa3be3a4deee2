//! Headless engine binary for the Chronolife simulation.
//!
//! This is the main entry point that wires together configuration, the
//! starting universe, operator controls, and the generation ticker. It runs
//! until the generation limit is reached or Ctrl-C requests a stop, then
//! writes the universe out.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `chronolife-config.yaml`
//! 2. Initialize structured logging (tracing) at the configured level
//! 3. Build the starting universe (load a file or randomize)
//! 4. Create operator state from the ticker config
//! 5. Install the Ctrl-C stop handler
//! 6. Run the ticker
//! 7. Save the universe and log the result

mod error;
mod session;
mod status_callback;

use std::path::Path;
use std::sync::Arc;

use chronolife_core::config::SimulationConfig;
use chronolife_core::operator::OperatorState;
use chronolife_core::runner;
use tokio::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::status_callback::StatusCallback;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "chronolife-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if any initialization step, the run, or the final save
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("chronolife-engine starting");
    if !from_file {
        info!(path = CONFIG_PATH, "Config file not found, using defaults");
    }
    info!(
        width = config.universe.width,
        height = config.universe.height,
        toroidal = config.universe.toroidal,
        interval_ms = config.ticker.interval_ms,
        max_generations = config.ticker.max_generations,
        "Configuration loaded"
    );

    // 3. Build the starting universe.
    let universe = Arc::new(Mutex::new(session::build_universe(&config.universe)?));

    // 4. Create operator state.
    let operator = Arc::new(OperatorState::new(&config.ticker));
    info!(
        max_generations = operator.max_generations(),
        tick_interval_ms = operator.tick_interval_ms(),
        "Operator state initialized"
    );

    // 5. Ctrl-C requests a clean stop.
    {
        let operator = Arc::clone(&operator);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Interrupt received, stopping after current generation");
                    operator.request_stop();
                }
                Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
            }
        });
    }

    // 6. Run the ticker.
    let mut callback = StatusCallback::new(config.status.fields());
    let result = runner::run_simulation(&universe, &operator, &mut callback)
        .await
        .map_err(EngineError::from)?;
    runner::log_simulation_end(&result);

    // 7. Save.
    let written = {
        let guard = universe.lock().await;
        session::save_outputs(&guard, &config.output)?
    };

    info!(
        end_reason = ?result.end_reason,
        generations_computed = result.generations_computed,
        files_written = written.len(),
        elapsed_seconds = operator.elapsed_seconds(),
        "chronolife-engine shutdown complete"
    );

    Ok(())
}

/// Load and validate the configuration from `chronolife-config.yaml`.
///
/// Looks for the config file relative to the current working directory and
/// falls back to defaults (with environment overrides) when it is missing.
/// Returns the config and whether it came from the file.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    let (config, from_file) = if config_path.exists() {
        (SimulationConfig::from_file(config_path)?, true)
    } else {
        let mut config = SimulationConfig::default();
        config.apply_env_overrides();
        (config, false)
    };
    config.validate()?;
    Ok((config, from_file))
}
