//! Trailing debounce for scroll-end detection.

use std::time::{Duration, Instant};

/// Quiet period after the last scroll tick before the end fires.
pub const SCROLL_END_DELAY: Duration = Duration::from_millis(150);

/// Coalesces scroll ticks into one start/end pair per burst.
///
/// Owns the single pending deadline. Every tick replaces it, so at most
/// one end-notification is outstanding at any instant (debounce, not
/// throttle).
#[derive(Debug, Default)]
pub struct ScrollDebouncer {
    deadline: Option<Instant>,
    in_cycle: bool,
}

impl ScrollDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll tick and reschedule the end deadline to
    /// `now + SCROLL_END_DELAY`.
    ///
    /// Returns true when this tick opens a new scroll cycle.
    pub fn tick(&mut self, now: Instant) -> bool {
        let opened = !self.in_cycle;
        self.in_cycle = true;
        self.deadline = Some(now + SCROLL_END_DELAY);
        opened
    }

    /// Fire the pending end if the quiet period has elapsed.
    ///
    /// Returns true exactly once per burst; the cycle is closed and the
    /// deadline cleared.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.in_cycle = false;
                true
            }
            _ => false,
        }
    }

    /// The pending end deadline, if a burst is in flight.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a scroll cycle is currently open.
    pub fn in_cycle(&self) -> bool {
        self.in_cycle
    }

    /// Discard any pending deadline without firing it.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.in_cycle = false;
    }
}
