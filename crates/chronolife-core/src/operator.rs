//! Operator control state for a running ticker.
//!
//! The operator can pause and resume the ticker, change its speed, and
//! request a clean stop, all while the loop is running. The binary wires
//! Ctrl-C to [`OperatorState::request_stop`].
//!
//! # Architecture
//!
//! Control flags are atomics so the tick loop reads them without locking.
//! Two [`Notify`] handles wake the loop early: one when it is parked on a
//! pause, one when it is sleeping between generations and a stop arrives.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, Notify};

use crate::config::TickerConfig;

/// Reason why the ticker ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationEndReason {
    /// Computed the configured `max_generations`.
    MaxGenerationsReached,
    /// An operator issued a stop command.
    OperatorStop,
}

/// Shared operator control state.
///
/// Wrap in [`Arc`](std::sync::Arc) to share between the tick loop and
/// whatever issues commands (a signal handler, a test task).
#[derive(Debug)]
pub struct OperatorState {
    /// Whether the ticker is currently paused.
    paused: AtomicBool,

    /// Wakes the loop when resumed or stopped while paused.
    resume_notify: Notify,

    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Wakes the loop when stopped while sleeping between generations.
    stop_notify: Notify,

    /// Current tick interval in milliseconds (runtime-adjustable).
    tick_interval_ms: AtomicU64,

    /// Wall-clock time when the operator state was created.
    started_at: DateTime<Utc>,

    /// Maximum number of generations to compute (0 = unlimited).
    max_generations: u64,

    /// Reason the ticker ended, if it has.
    end_reason: Mutex<Option<SimulationEndReason>>,
}

impl OperatorState {
    /// Create a new operator state from ticker configuration.
    pub fn new(ticker: &TickerConfig) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            stop_notify: Notify::new(),
            tick_interval_ms: AtomicU64::new(ticker.interval_ms),
            started_at: Utc::now(),
            max_generations: ticker.max_generations,
            end_reason: Mutex::new(None),
        }
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Check whether the ticker is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause the ticker. The loop parks until resumed or stopped.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume the ticker and wake the loop.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Wait until the ticker is no longer paused or a stop is requested.
    pub async fn wait_if_paused(&self) {
        while self.is_paused() && !self.is_stop_requested() {
            self.resume_notify.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop. Wakes the loop if it is paused or sleeping.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.resume_notify.notify_one();
        self.stop_notify.notify_one();
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Record the reason the ticker ended.
    pub async fn set_end_reason(&self, reason: SimulationEndReason) {
        let mut guard = self.end_reason.lock().await;
        *guard = Some(reason);
    }

    /// Get the reason the ticker ended, if it has.
    pub async fn end_reason(&self) -> Option<SimulationEndReason> {
        *self.end_reason.lock().await
    }

    // -----------------------------------------------------------------------
    // Tick Speed
    // -----------------------------------------------------------------------

    /// Get the current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.load(Ordering::Acquire)
    }

    /// Set the tick interval in milliseconds. Must be at least 1ms.
    ///
    /// Returns the previous interval on success, or `None` if the value
    /// was rejected.
    pub fn set_tick_interval_ms(&self, ms: u64) -> Option<u64> {
        if ms == 0 {
            return None;
        }
        let prev = self.tick_interval_ms.swap(ms, Ordering::AcqRel);
        Some(prev)
    }

    /// Sleep for the current tick interval, returning early on a stop
    /// request.
    pub async fn sleep_interval(&self) {
        let interval_ms = self.tick_interval_ms();
        if interval_ms == 0 || self.is_stop_requested() {
            return;
        }
        tokio::select! {
            () = tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)) => {}
            () = self.stop_notify.notified() => {}
        }
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    /// Check whether the generation limit has been reached.
    ///
    /// Returns `true` if `max_generations > 0` and
    /// `generations_computed >= max_generations`.
    pub const fn generation_limit_reached(&self, generations_computed: u64) -> bool {
        self.max_generations > 0 && generations_computed >= self.max_generations
    }

    /// Get the configured generation limit.
    pub const fn max_generations(&self) -> u64 {
        self.max_generations
    }

    /// Return the wall-clock start time.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Return elapsed seconds since the operator state was created.
    pub fn elapsed_seconds(&self) -> u64 {
        let elapsed = Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds();
        u64::try_from(elapsed.max(0)).unwrap_or(u64::MAX)
    }
}
