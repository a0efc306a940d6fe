use std::time::{Duration, Instant};

/// Runs the search at most once per idle period of text input.
///
/// Time is passed in rather than read, so the policy is independent of any
/// timer primitive: the event loop calls [`Debouncer::input`] on each
/// keystroke and [`Debouncer::fire`] whenever it wakes up.
#[derive(Debug, Clone)]
pub struct Debouncer {
    idle: Duration,
    last_input: Option<Instant>,
}

impl Debouncer {
    pub fn new(idle: Duration) -> Self {
        Self {
            idle,
            last_input: None,
        }
    }

    pub fn idle(&self) -> Duration {
        self.idle
    }

    /// Record an input event, restarting the idle window
    pub fn input(&mut self, now: Instant) {
        self.last_input = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.last_input.is_some()
    }

    /// When the pending run becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.last_input.map(|t| t + self.idle)
    }

    /// `true` exactly once per burst, after `idle` has passed since the last input
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.last_input = None;
                true
            }
            _ => false,
        }
    }

    /// Drop a pending run, e.g. when a discrete control already re-ran the search
    pub fn cancel(&mut self) {
        self.last_input = None;
    }
}
