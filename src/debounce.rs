//! Quiescence-window debouncing for text edits.
//!
//! The debouncer itself never sleeps. Each submitted value hands back a
//! ticket; the caller waits out the window (the app uses a timer task) and
//! presents the ticket again. Only the newest ticket settles.

use std::time::Duration;

/// Window applied to text edits before the transform pipeline runs.
pub const EDIT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
}

impl DebounceTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value and restart the window.
    pub fn submit(&mut self, value: T) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        DebounceTicket {
            generation: self.generation,
        }
    }

    /// Take the pending value if `ticket` is still the latest submission.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.generation != self.generation {
            tracing::trace!(
                ticket = ticket.generation,
                current = self.generation,
                "Dropping superseded debounce ticket"
            );
            return None;
        }
        self.pending.take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
