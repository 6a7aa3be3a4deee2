//! Tick callback that logs the status line.
//!
//! After each generation this callback emits the configured status line
//! (`Current: n | Total: m | Living: k`) at info level. It also warns, once,
//! when the population dies out.

use chronolife_core::runner::{CallbackAbort, TickCallback};
use chronolife_types::{GenerationStatus, StatusFields};
use tracing::{info, warn};

/// Callback that logs a status line for every generation.
pub struct StatusCallback {
    fields: StatusFields,
    reported_extinct: bool,
}

impl StatusCallback {
    /// Create a callback rendering the given status fields.
    pub const fn new(fields: StatusFields) -> Self {
        Self {
            fields,
            reported_extinct: false,
        }
    }

    /// Whether an extinction has been reported.
    #[cfg(test)]
    pub const fn reported_extinct(&self) -> bool {
        self.reported_extinct
    }
}

impl TickCallback for StatusCallback {
    fn on_generation(&mut self, status: &GenerationStatus) -> Result<(), CallbackAbort> {
        info!(
            generation = status.current,
            living = status.living,
            "{}",
            status.status_line(self.fields)
        );

        if status.living == 0 && !self.reported_extinct {
            warn!(generation = status.current, "Population died out");
            self.reported_extinct = true;
        }
        Ok(())
    }
}
