//! Movable points: per-contact movement queues and the sampling algorithm.

use std::collections::VecDeque;

use ghosthand_common::clock::TimestampMs;
use ghosthand_pointer_model::{
    classify_transition, ContactState, PointerEventKind, PointerId, PointerKind, StateDelta,
    SyntheticPointerEvent,
};

use crate::movement::{Movement, Sampler};
use crate::surface::Marker;

/// One synthetic contact: an ordered movement queue plus its current and
/// cumulative-target state.
///
/// Points are owned by their dispatcher for the dispatcher's whole
/// lifetime; all queue operations take `now` from the dispatcher's clock.
pub struct MovablePoint {
    id: PointerId,
    kind: PointerKind,
    primary: bool,
    queue: VecDeque<Movement>,
    /// What was last emitted.
    current: ContactState,
    /// Cumulative target after all queued movements complete.
    target: ContactState,
    /// Elapsed-time origin of the head movement.
    moves_from: TimestampMs,
    /// End time of the last queued movement.
    moves_until: TimestampMs,
    marker: Box<dyn Marker>,
}

impl MovablePoint {
    pub fn new(
        id: PointerId,
        kind: PointerKind,
        primary: bool,
        initial: ContactState,
        marker: Box<dyn Marker>,
    ) -> Self {
        Self {
            id,
            kind,
            primary,
            queue: VecDeque::new(),
            current: initial,
            target: initial,
            moves_from: 0,
            moves_until: 0,
            marker,
        }
    }

    pub fn id(&self) -> PointerId {
        self.id
    }

    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// True iff no movements are queued.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Completion time of the head movement, if any.
    pub fn next_move_end(&self) -> Option<TimestampMs> {
        self.queue.front().map(|m| m.until_ms)
    }

    /// End time of the whole queued timeline. Stale while idle.
    pub fn moves_until(&self) -> TimestampMs {
        self.moves_until
    }

    /// Last emitted state.
    pub fn current(&self) -> &ContactState {
        &self.current
    }

    /// Cumulative target state.
    pub fn target(&self) -> &ContactState {
        &self.target
    }

    /// Re-anchor the timeline at `now` when the queue is empty, so stale
    /// end times from a previous burst never schedule into the past.
    fn anchor(&mut self, now: TimestampMs) {
        if self.queue.is_empty() {
            self.moves_from = now;
            self.moves_until = now;
        }
    }

    fn push(&mut self, duration_ms: u64, sampler: Sampler) {
        let until_ms = self.moves_until + duration_ms;
        self.queue.push_back(Movement {
            duration_ms,
            final_state: self.target,
            sampler,
            until_ms,
        });
        self.moves_until = until_ms;
    }

    /// Queue an instantaneous state change taking effect after `delay_ms`.
    pub fn queue_instant(&mut self, delta: StateDelta, delay_ms: u64, now: TimestampMs) {
        self.anchor(now);
        self.target.apply(&delta);
        self.push(delay_ms, Sampler::Hold);
    }

    /// Queue a linear position change over `duration_ms`. A zero duration
    /// is an instantaneous jump.
    pub fn queue_linear(&mut self, dx: i64, dy: i64, duration_ms: u64, now: TimestampMs) {
        self.anchor(now);
        let from = self.target.position();
        self.target
            .apply(&StateDelta::position(from.0 + dx, from.1 + dy));
        let sampler = Sampler::linear(from, dx, dy, duration_ms);
        self.push(duration_ms, sampler);
    }

    /// Queue a no-op movement holding the current target for `delay_ms`.
    pub fn wait(&mut self, delay_ms: u64, now: TimestampMs) {
        self.anchor(now);
        self.push(delay_ms, Sampler::Hold);
    }

    /// Pad the timeline so it ends at `at_ms`. Timestamps already passed
    /// (relative to the queue end, or to `now` when idle) clamp to a
    /// zero-duration wait.
    pub fn wait_until(&mut self, at_ms: TimestampMs, now: TimestampMs) {
        if self.queue.is_empty() {
            self.anchor(now);
            self.wait(at_ms.saturating_sub(now), now);
        } else {
            let delay = at_ms.saturating_sub(self.moves_until);
            self.wait(delay, now);
        }
    }

    /// Advance the queue to `now` and emit at most one semantic event.
    ///
    /// With `single_step` set, at most one state change is consumed per
    /// call (completed movement or interpolated sample), so close-together
    /// movements are never merged into one event.
    pub fn sample(&mut self, now: TimestampMs, single_step: bool) -> Option<SyntheticPointerEvent> {
        let previous = self.current;
        let mut changed = false;

        // Consume every movement that has completed by `now`.
        while let Some(head) = self.queue.front() {
            if head.until_ms > now || (changed && single_step) {
                break;
            }
            let movement = self.queue.pop_front().expect("head exists");
            self.current = movement.final_state;
            self.moves_from = movement.until_ms;
            changed = true;
        }

        // Interpolate within the movement now in flight.
        if !(changed && single_step) {
            if let Some(head) = self.queue.front() {
                let elapsed = now.saturating_sub(self.moves_from);
                if let Some(delta) = head.sampler.sample(elapsed) {
                    if delta.differs_from(&self.current) {
                        self.current.apply(&delta);
                        changed = true;
                    }
                }
            }
        }

        if !changed {
            return None;
        }

        let kind = classify_transition(&previous, &self.current)?;
        self.marker.move_to(self.current.x, self.current.y);
        match kind {
            PointerEventKind::Down => self.marker.show(),
            PointerEventKind::Up => self.marker.hide(),
            PointerEventKind::Move => {}
        }

        Some(SyntheticPointerEvent::from_state(
            kind,
            self.id,
            self.kind,
            self.primary,
            &self.current,
            now,
        ))
    }
}

impl std::fmt::Debug for MovablePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovablePoint")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("queued", &self.queue.len())
            .field("current", &self.current)
            .field("target", &self.target)
            .field("moves_until", &self.moves_until)
            .finish()
    }
}
