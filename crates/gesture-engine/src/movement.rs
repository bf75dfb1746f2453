//! Queued movement units and their samplers.
//!
//! A movement is one span on a contact's timeline: it ends at an absolute
//! timestamp, carries the cumulative target state applied on completion,
//! and optionally a sampler that interpolates intermediate state while the
//! movement is in flight.

use ghosthand_common::clock::TimestampMs;
use ghosthand_pointer_model::{ContactState, StateDelta};

/// One queued unit of change on a contact's timeline.
///
/// Movements in a queue have non-decreasing `until_ms`; waits fill any
/// gaps, so the queue is a strictly sequential timeline.
#[derive(Debug, Clone)]
pub struct Movement {
    /// Time span of this movement. Zero means instantaneous.
    pub duration_ms: u64,

    /// Cumulative target snapshot, applied when the movement completes.
    pub final_state: ContactState,

    /// Interpolation over the movement's lifetime.
    pub sampler: Sampler,

    /// Absolute completion time on the engine timeline.
    pub until_ms: TimestampMs,
}

/// A pure function of "elapsed milliseconds since the movement started".
#[derive(Debug, Clone)]
pub enum Sampler {
    /// No interpolated state: instantaneous changes and waits.
    Hold,

    /// Linear position interpolation from a fixed start, rounded to whole
    /// surface units.
    Linear {
        from_x: i64,
        from_y: i64,
        dx: i64,
        dy: i64,
        duration_ms: u64,
    },
}

impl Sampler {
    /// Build a linear position sampler. A zero duration collapses to
    /// [`Sampler::Hold`] — the jump happens entirely at completion.
    pub fn linear(from: (i64, i64), dx: i64, dy: i64, duration_ms: u64) -> Self {
        if duration_ms == 0 {
            return Self::Hold;
        }
        Self::Linear {
            from_x: from.0,
            from_y: from.1,
            dx,
            dy,
            duration_ms,
        }
    }

    /// Sample interpolated state at `elapsed_ms` into the movement.
    /// Returns `None` when there is nothing to interpolate.
    pub fn sample(&self, elapsed_ms: u64) -> Option<StateDelta> {
        match *self {
            Self::Hold => None,
            Self::Linear {
                from_x,
                from_y,
                dx,
                dy,
                duration_ms,
            } => {
                let t = elapsed_ms.min(duration_ms) as f64 / duration_ms as f64;
                let x = (from_x as f64 + dx as f64 * t).round() as i64;
                let y = (from_y as f64 + dy as f64 * t).round() as i64;
                Some(StateDelta::position(x, y))
            }
        }
    }
}
