//! Clock and timing utilities for movement scheduling.
//!
//! All Ghosthand timelines are anchored to a monotonic clock epoch recorded
//! when the engine is created. Movement deadlines, queue end-times, and
//! emitted event timestamps all live on this single millisecond timeline.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Milliseconds since the engine clock epoch.
pub type TimestampMs = u64;

/// Source of "now" for the gesture engine.
///
/// The dispatcher never reads `Instant::now()` directly; every flush asks
/// its clock. Tests drive the engine deterministically with [`ManualClock`].
pub trait Clock {
    /// Milliseconds elapsed since the clock epoch.
    fn now_ms(&self) -> TimestampMs;
}

/// A monotonic clock anchored to a fixed epoch (the moment the engine
/// was created).
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    /// The instant the engine started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl MonotonicClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Wall-clock time at the epoch.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> TimestampMs {
        self.epoch.elapsed().as_millis() as TimestampMs
    }
}

/// A hand-advanced clock for deterministic tests.
///
/// Clones share the same underlying cell, so a test can hold one copy and
/// hand another to the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<TimestampMs>>,
}

impl ManualClock {
    /// Create a clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at the given timestamp.
    pub fn at(now: TimestampMs) -> Self {
        let clock = Self::new();
        clock.set(now);
        clock
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get() + delta_ms);
    }

    /// Set the clock to an absolute timestamp.
    pub fn set(&self, now: TimestampMs) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now.get()
    }
}
