//! Cosmetic delays layered over the session
//!
//! Two timers exist: one clears the invalid-word signal, the other holds
//! back the end-of-round view for a moment. They are plain deadlines polled
//! by the event loop; cancelling a timer or dropping its owner guarantees it
//! never fires against stale state.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    InvalidWordFlash,
    EndOfRoundReveal,
}

/// Pending deadlines, at most one per kind
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<(TimerKind, Instant)>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` to fire `delay` after `now`, replacing any pending deadline
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, delay: Duration) {
        self.cancel(kind);
        self.pending.push((kind, now + delay));
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        self.pending.retain(|&(pending, _)| pending != kind);
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|&(pending, _)| pending == kind)
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(_, deadline)| deadline).min()
    }

    /// Remove and return every timer whose deadline is at or before `now`,
    /// earliest first
    pub fn fire_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<(TimerKind, Instant)> = Vec::new();
        self.pending.retain(|&(kind, deadline)| {
            if deadline <= now {
                due.push((kind, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, deadline)| deadline);
        due.into_iter().map(|(kind, _)| kind).collect()
    }
}
