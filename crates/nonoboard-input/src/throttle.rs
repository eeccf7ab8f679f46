#![forbid(unsafe_code)]

//! Rate limiting for pointer-move events.
//!
//! Move events arrive far faster than a redraw is useful. [`MoveThrottle`]
//! is a leading-edge rate limiter: the first event in a window is admitted
//! and the rest are dropped, never queued, so the consumer always acts on
//! the most recently admitted position and never works through a stale
//! backlog. Logical correctness upstream must not depend on observing every
//! intermediate position (the release handler re-reads the pointer anyway).

use std::time::{Duration, Instant};

/// Default window between admitted move events.
pub const DEFAULT_MOVE_INTERVAL: Duration = Duration::from_millis(20);

/// Leading-edge rate limiter for move events.
#[derive(Debug, Clone)]
pub struct MoveThrottle {
    interval: Duration,
    last_admitted: Option<Instant>,
}

impl Default for MoveThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_INTERVAL)
    }
}

impl MoveThrottle {
    /// Create a throttle with the given window.
    ///
    /// A zero window admits every event (useful in tests).
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_admitted: None,
        }
    }

    /// Admit or drop an event observed at `now`.
    ///
    /// Admits when nothing has been admitted yet, or when the window has
    /// elapsed since the last admitted event. Dropped events are gone;
    /// there is no queue.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.last_admitted {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_admitted = Some(now);
                true
            }
        }
    }

    /// Forget the window so the next event is admitted immediately.
    pub fn reset(&mut self) {
        self.last_admitted = None;
    }

    /// The configured window.
    #[inline]
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}
