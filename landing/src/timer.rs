//! Cancel-and-replace timeout for transient messages.

use std::time::Duration;

use leptos::prelude::*;

/// Holds at most one pending browser timeout.
///
/// Scheduling a new callback clears the previous one first, and the pending
/// timeout is cleared when the owning view is disposed.
#[derive(Clone, Copy)]
pub struct ResetTimer {
    pending: StoredValue<Option<TimeoutHandle>>,
}

impl ResetTimer {
    /// Must be created inside a reactive owner (i.e. in a component body).
    pub fn new() -> Self {
        let timer = Self {
            pending: StoredValue::new(None),
        };
        on_cleanup(move || timer.cancel());
        timer
    }

    /// Clears any pending timeout, then runs `callback` after `delay`.
    pub fn replace(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => self.pending.set_value(Some(handle)),
            Err(err) => tracing::warn!(?err, "failed to schedule timeout"),
        }
    }

    /// Clears the pending timeout, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}

impl Default for ResetTimer {
    fn default() -> Self {
        Self::new()
    }
}
