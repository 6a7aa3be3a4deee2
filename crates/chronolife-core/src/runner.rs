//! Generation ticker with operator controls.
//!
//! This module provides [`run_simulation`], the async loop that advances a
//! shared [`Universe`] one generation per tick with support for:
//!
//! - **Bounded runs**: stop after `max_generations`
//! - **Pause/resume**: the operator can park and continue the loop
//! - **Variable speed**: the tick interval is adjustable at runtime
//! - **Operator stop**: a stop request ends the loop at the next check,
//!   cutting any pending sleep short
//!
//! The universe is locked only while a generation is computed, so other
//! tasks can inspect or edit it between ticks.

use tokio::sync::Mutex;
use tracing::{info, warn};

use chronolife_types::GenerationStatus;
use chronolife_universe::Universe;

use crate::operator::{OperatorState, SimulationEndReason};

/// A callback's request to end the run early.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct CallbackAbort {
    /// Why the callback stopped the run.
    pub reason: String,
}

impl CallbackAbort {
    /// Create an abort with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during a ticker run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The tick callback aborted the run.
    #[error("tick callback aborted at generation {generation}: {source}")]
    Callback {
        /// Generation the universe was on when the callback aborted.
        generation: usize,
        /// The callback's reason.
        source: CallbackAbort,
    },
}

/// Result of a ticker run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// The reason the run ended.
    pub end_reason: SimulationEndReason,
    /// Number of generations computed during this run.
    pub generations_computed: u64,
    /// Universe status when the run ended.
    pub final_status: GenerationStatus,
}

/// Callback invoked after each generation is computed.
///
/// Implementations can log, render, or persist the status. Returning an
/// error ends the run with [`RunnerError::Callback`].
pub trait TickCallback: Send {
    /// Called after a generation is computed and the universe unlocked.
    ///
    /// # Errors
    ///
    /// Returns [`CallbackAbort`] to stop the run.
    fn on_generation(&mut self, status: &GenerationStatus) -> Result<(), CallbackAbort>;
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_generation(&mut self, _status: &GenerationStatus) -> Result<(), CallbackAbort> {
        Ok(())
    }
}

/// Run the ticker until the generation limit or an operator stop.
///
/// Each tick locks `universe`, calls
/// [`Universe::calculate_next_generation`], releases the lock, notifies
/// `callback`, then sleeps for the operator's current interval.
///
/// # Errors
///
/// Returns [`RunnerError::Callback`] if the callback aborts the run.
pub async fn run_simulation(
    universe: &Mutex<Universe>,
    operator: &OperatorState,
    callback: &mut dyn TickCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut generations_computed: u64 = 0;

    info!(
        max_generations = operator.max_generations(),
        tick_interval_ms = operator.tick_interval_ms(),
        "Ticker starting"
    );

    loop {
        // --- Check pause ---
        if operator.is_paused() {
            info!("Ticker paused, waiting for resume...");
            operator.wait_if_paused().await;
            info!("Ticker resumed");
        }

        // --- Check stop request (before tick) ---
        if operator.is_stop_requested() {
            info!(generations_computed, "Operator stop requested");
            let reason = SimulationEndReason::OperatorStop;
            operator.set_end_reason(reason).await;
            return Ok(SimulationResult {
                end_reason: reason,
                generations_computed,
                final_status: universe.lock().await.status(),
            });
        }

        // --- Compute one generation ---
        let status = {
            let mut guard = universe.lock().await;
            guard.calculate_next_generation();
            guard.status()
        };
        generations_computed = generations_computed.saturating_add(1);

        // --- Notify callback ---
        callback
            .on_generation(&status)
            .map_err(|source| RunnerError::Callback {
                generation: status.current,
                source,
            })?;

        // --- Check generation limit (after tick) ---
        if operator.generation_limit_reached(generations_computed) {
            info!(
                generation = status.current,
                max_generations = operator.max_generations(),
                "Generation limit reached"
            );
            let reason = SimulationEndReason::MaxGenerationsReached;
            operator.set_end_reason(reason).await;
            return Ok(SimulationResult {
                end_reason: reason,
                generations_computed,
                final_status: status,
            });
        }

        // --- Sleep for tick interval ---
        operator.sleep_interval().await;
    }
}

/// Log the end of a run.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        generations_computed = result.generations_computed,
        generation = result.final_status.current,
        living = result.final_status.living,
        "Ticker ended"
    );

    if result.generations_computed == 0 {
        warn!("Ticker ended with no generations computed");
    }
}
