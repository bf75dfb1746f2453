//! The dispatcher: idle/busy tracking, timing strategies, and the flush loop.
//!
//! A dispatcher owns every movable point created under it. Queueing the
//! first movement wakes it (Idle → Active); it then flushes repeatedly per
//! its timing strategy until every point drains, at which moment it fires
//! the stop notification and goes back to sleep. Flushes never overlap:
//! the next one is decided only at the end of the current one.

use std::time::Duration;

use ghosthand_common::clock::{Clock, MonotonicClock, TimestampMs};
use ghosthand_common::config::{TimingConfig, DEFAULT_FRAME_INTERVAL_MS};
use ghosthand_pointer_model::{ContactState, PointerId, PointerSpec, StateDelta};

use crate::point::MovablePoint;
use crate::surface::{GesturePhase, MarkerProvider, NullMarkerProvider, NullSurface, Surface};

/// When the next flush is due. Realized by [`Dispatcher::run_until_idle`]
/// or an embedder driving [`Dispatcher::pump`]; replacing it (or dropping
/// the dispatcher) is the cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// Flush once the clock reaches this timestamp.
    At(TimestampMs),
    /// Flush on the next frame tick.
    NextFrame,
}

/// Observer callback invoked on dispatcher start/stop transitions.
pub type TransitionCallback = Box<dyn FnMut(&mut Dispatcher)>;

/// Coordinator for a set of synthetic contacts.
pub struct Dispatcher {
    timing: TimingConfig,
    clock: Box<dyn Clock>,
    surface: Box<dyn Surface>,
    markers: Box<dyn MarkerProvider>,
    points: Vec<MovablePoint>,
    next_id: PointerId,
    active: bool,
    pending: Option<Deadline>,
    on_start: Option<TransitionCallback>,
    on_stop: Option<TransitionCallback>,
}

impl Dispatcher {
    /// Build a dispatcher with explicit collaborators.
    pub fn new(
        timing: TimingConfig,
        clock: Box<dyn Clock>,
        surface: Box<dyn Surface>,
        markers: Box<dyn MarkerProvider>,
    ) -> Self {
        Self {
            timing,
            clock,
            surface,
            markers,
            points: Vec::new(),
            next_id: 1,
            active: false,
            pending: None,
            on_start: None,
            on_stop: None,
        }
    }

    /// Monotonic clock, no markers, the given surface.
    pub fn with_surface(timing: TimingConfig, surface: Box<dyn Surface>) -> Self {
        Self::new(
            timing,
            Box::new(MonotonicClock::start()),
            surface,
            Box::new(NullMarkerProvider),
        )
    }

    /// Fully inert collaborators; useful for dry runs.
    pub fn headless(timing: TimingConfig) -> Self {
        Self::with_surface(timing, Box::new(NullSurface))
    }

    /// Observer invoked on every Idle → Active transition.
    pub fn on_start(&mut self, callback: impl FnMut(&mut Dispatcher) + 'static) {
        self.on_start = Some(Box::new(callback));
    }

    /// Observer invoked on every Active → Idle transition.
    pub fn on_stop(&mut self, callback: impl FnMut(&mut Dispatcher) + 'static) {
        self.on_stop = Some(Box::new(callback));
    }

    /// Create a new contact. The first one ever created is the primary.
    pub fn create_point(&mut self, spec: PointerSpec) -> PointerId {
        let id = self.next_id;
        self.next_id += 1;
        let primary = self.points.is_empty() && id == 1;

        let initial = ContactState {
            x: spec.x,
            y: spec.y,
            down: false,
            pressure: spec.pressure.clamp(0.0, 1.0),
            tilt_x: spec.tilt_x,
            tilt_y: spec.tilt_y,
            width: spec.width,
            height: spec.height,
        };
        let marker = self.markers.create(spec.kind, id);

        tracing::debug!(id, kind = ?spec.kind, primary, "Point created");
        self.points
            .push(MovablePoint::new(id, spec.kind, primary, initial, marker));
        id
    }

    /// Borrow a contact for queueing. `None` for an unknown id.
    pub fn point(&mut self, id: PointerId) -> Option<PointHandle<'_>> {
        let index = self.points.iter().position(|p| p.id() == id)?;
        Some(PointHandle {
            dispatcher: self,
            index,
        })
    }

    /// Read-only view of a contact.
    pub fn get(&self, id: PointerId) -> Option<&MovablePoint> {
        self.points.iter().find(|p| p.id() == id)
    }

    /// All contacts, in creation order.
    pub fn points(&self) -> impl Iterator<Item = &MovablePoint> {
        self.points.iter()
    }

    /// Whether any point has pending movements.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The pending flush deadline, if scheduled.
    pub fn pending_deadline(&self) -> Option<Deadline> {
        self.pending
    }

    /// Current engine time.
    pub fn now_ms(&self) -> TimestampMs {
        self.clock.now_ms()
    }

    /// Pad every point's timeline so their next movements start together:
    /// the latest queued end time (or now, with nothing pending) plus
    /// `delay_ms`.
    pub fn sync(&mut self, delay_ms: u64) {
        let now = self.clock.now_ms();
        let until = self
            .points
            .iter()
            .filter(|p| !p.is_idle())
            .map(|p| p.moves_until())
            .max()
            .unwrap_or(now)
            + delay_ms;

        for point in &mut self.points {
            point.wait_until(until, now);
        }
        if !self.points.is_empty() {
            self.wake();
        }
    }

    /// Run one flush if its deadline has passed. Frame deadlines fire on
    /// any call, since the caller is the frame tick. Returns whether a
    /// flush ran.
    pub fn pump(&mut self, now: TimestampMs) -> bool {
        if !self.active {
            return false;
        }
        match self.pending {
            Some(Deadline::At(at)) if now >= at => {
                self.flush(now);
                true
            }
            Some(Deadline::NextFrame) => {
                self.flush(now);
                true
            }
            _ => false,
        }
    }

    /// Drive the dispatcher with tokio timers until every point is idle.
    ///
    /// Strictly sequential: one flush at a time, suspension between them.
    /// Dropping the returned future cancels the pending flush.
    pub async fn run_until_idle(&mut self) {
        while self.active {
            let Some(deadline) = self.pending else {
                break;
            };
            match deadline {
                Deadline::At(at) => {
                    let now = self.clock.now_ms();
                    if at > now {
                        tokio::time::sleep(Duration::from_millis(at - now)).await;
                    }
                }
                Deadline::NextFrame => {
                    tokio::time::sleep(Duration::from_millis(frame_interval(&self.timing))).await;
                }
            }
            let now = self.clock.now_ms();
            self.flush(now);
        }
    }

    /// One flush step: broadcast the tick, sample every point at `now`,
    /// deliver what they emit, then reschedule or go idle.
    pub fn flush(&mut self, now: TimestampMs) {
        if !self.active {
            return;
        }
        self.pending = None;
        self.surface.broadcast(GesturePhase::Ticked);

        let single_step = is_single_step(&self.timing);
        // Fast strategies land exactly on the soonest movement boundary
        // even when the timer fires marginally early.
        let now = if single_step {
            self.soonest_boundary().map_or(now, |b| now.max(b))
        } else {
            now
        };

        let mut emitted = 0usize;
        for i in 0..self.points.len() {
            if let Some(event) = self.points[i].sample(now, single_step) {
                emitted += 1;
                if let Err(e) = self.surface.deliver(&event) {
                    tracing::warn!(error = %e, pointer = event.pointer_id, "Event delivery failed");
                }
            }
        }
        tracing::trace!(now, emitted, "Flush complete");

        if self.points.iter().all(|p| p.is_idle()) {
            self.active = false;
            tracing::debug!(now, "Dispatcher idle");
            // Stopped goes out before the callback runs: the callback may
            // requeue and re-wake, and listeners must see the cycles in order.
            self.surface.broadcast(GesturePhase::Stopped);
            self.fire_stop();
        } else {
            self.pending = Some(self.next_deadline(now));
        }
    }

    /// Idle → Active transition; idempotent while active.
    fn wake(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        tracing::debug!("Dispatcher active");
        self.fire_start();
        self.surface.broadcast(GesturePhase::Started);

        if matches!(self.timing, TimingConfig::Instant) {
            self.drain();
        } else {
            let now = self.clock.now_ms();
            self.pending = Some(self.next_deadline(now));
        }
    }

    /// Synchronous drain for the instant strategy: flush one step at a
    /// time, wall clock ignored, until everything is idle.
    fn drain(&mut self) {
        while self.active {
            let now = self.clock.now_ms();
            self.flush(now);
        }
    }

    fn next_deadline(&self, now: TimestampMs) -> Deadline {
        match self.timing {
            TimingConfig::FixedInterval { interval_ms } => Deadline::At(now + interval_ms),
            TimingConfig::Minimal | TimingConfig::Instant => {
                Deadline::At(self.soonest_boundary().unwrap_or(now).max(now))
            }
            TimingConfig::PeriodicFrame { .. } | TimingConfig::FastPeriodicFrame { .. } => {
                Deadline::NextFrame
            }
        }
    }

    /// Earliest head-movement end time among busy points.
    fn soonest_boundary(&self) -> Option<TimestampMs> {
        self.points.iter().filter_map(|p| p.next_move_end()).min()
    }

    fn fire_start(&mut self) {
        if let Some(mut callback) = self.on_start.take() {
            callback(self);
            if self.on_start.is_none() {
                self.on_start = Some(callback);
            }
        }
    }

    fn fire_stop(&mut self) {
        if let Some(mut callback) = self.on_stop.take() {
            callback(self);
            if self.on_stop.is_none() {
                self.on_stop = Some(callback);
            }
        }
    }
}

fn is_single_step(timing: &TimingConfig) -> bool {
    matches!(
        timing,
        TimingConfig::Minimal | TimingConfig::Instant | TimingConfig::FastPeriodicFrame { .. }
    )
}

fn frame_interval(timing: &TimingConfig) -> u64 {
    match timing {
        TimingConfig::PeriodicFrame { frame_interval_ms }
        | TimingConfig::FastPeriodicFrame { frame_interval_ms } => *frame_interval_ms,
        _ => DEFAULT_FRAME_INTERVAL_MS,
    }
}

/// A borrowed contact plus its dispatcher, so every queue call can run the
/// busy notification. Methods chain.
pub struct PointHandle<'a> {
    dispatcher: &'a mut Dispatcher,
    index: usize,
}

impl PointHandle<'_> {
    pub fn id(&self) -> PointerId {
        self.dispatcher.points[self.index].id()
    }

    pub fn is_idle(&self) -> bool {
        self.dispatcher.points[self.index].is_idle()
    }

    pub fn moves_until(&self) -> TimestampMs {
        self.dispatcher.points[self.index].moves_until()
    }

    /// Press the contact down immediately.
    pub fn down(&mut self) -> &mut Self {
        self.down_after(0)
    }

    /// Press the contact down after `delay_ms`.
    pub fn down_after(&mut self, delay_ms: u64) -> &mut Self {
        self.queue_instant(StateDelta::pressed(true), delay_ms)
    }

    /// Release the contact immediately.
    pub fn up(&mut self) -> &mut Self {
        self.up_after(0)
    }

    /// Release the contact after `delay_ms`.
    pub fn up_after(&mut self, delay_ms: u64) -> &mut Self {
        self.queue_instant(StateDelta::pressed(false), delay_ms)
    }

    /// Linearly move by a delta over `duration_ms`.
    pub fn move_by(&mut self, dx: i64, dy: i64, duration_ms: u64) -> &mut Self {
        let now = self.dispatcher.clock.now_ms();
        self.dispatcher.points[self.index].queue_linear(dx, dy, duration_ms, now);
        self.dispatcher.wake();
        self
    }

    /// Linearly move to an absolute position over `duration_ms`, relative
    /// to wherever the queued timeline ends.
    pub fn move_to(&mut self, x: i64, y: i64, duration_ms: u64) -> &mut Self {
        let (tx, ty) = self.dispatcher.points[self.index].target().position();
        self.move_by(x - tx, y - ty, duration_ms)
    }

    /// Apply an instantaneous attribute change after `delay_ms`.
    pub fn update(&mut self, delta: StateDelta, delay_ms: u64) -> &mut Self {
        self.queue_instant(delta, delay_ms)
    }

    /// Hold the current target state for `delay_ms`.
    pub fn wait(&mut self, delay_ms: u64) -> &mut Self {
        let now = self.dispatcher.clock.now_ms();
        self.dispatcher.points[self.index].wait(delay_ms, now);
        self.dispatcher.wake();
        self
    }

    /// Pad the timeline to end at the absolute timestamp `at_ms`.
    pub fn wait_until(&mut self, at_ms: TimestampMs) -> &mut Self {
        let now = self.dispatcher.clock.now_ms();
        self.dispatcher.points[self.index].wait_until(at_ms, now);
        self.dispatcher.wake();
        self
    }

    fn queue_instant(&mut self, delta: StateDelta, delay_ms: u64) -> &mut Self {
        let now = self.dispatcher.clock.now_ms();
        self.dispatcher.points[self.index].queue_instant(delta, delay_ms, now);
        self.dispatcher.wake();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use ghosthand_common::clock::ManualClock;
    use ghosthand_pointer_model::PointerEventKind;
    use std::cell::Cell;
    use std::rc::Rc;

    fn manual_dispatcher(timing: TimingConfig) -> (Dispatcher, ManualClock, RecordingSurface) {
        let clock = ManualClock::new();
        let surface = RecordingSurface::new();
        let dispatcher = Dispatcher::new(
            timing,
            Box::new(clock.clone()),
            Box::new(surface.clone()),
            Box::new(NullMarkerProvider),
        );
        (dispatcher, clock, surface)
    }

    #[test]
    fn test_never_queued_never_starts() {
        let (mut dispatcher, _clock, surface) = manual_dispatcher(TimingConfig::default());
        dispatcher.create_point(PointerSpec::default());

        assert!(!dispatcher.is_active());
        assert_eq!(dispatcher.pending_deadline(), None);
        assert!(surface.phases().is_empty());
        assert!(!dispatcher.pump(10_000));
    }

    #[test]
    fn test_first_queue_fires_start_once() {
        let (mut dispatcher, _clock, surface) =
            manual_dispatcher(TimingConfig::FixedInterval { interval_ms: 16 });
        let id = dispatcher.create_point(PointerSpec::default());

        dispatcher.point(id).unwrap().down().up_after(10);

        assert!(dispatcher.is_active());
        assert_eq!(surface.phases(), vec![GesturePhase::Started]);
        assert_eq!(dispatcher.pending_deadline(), Some(Deadline::At(16)));
    }

    #[test]
    fn test_fixed_interval_gesture_flow() {
        let (mut dispatcher, clock, surface) =
            manual_dispatcher(TimingConfig::FixedInterval { interval_ms: 16 });
        let id = dispatcher.create_point(PointerSpec::default());

        dispatcher
            .point(id)
            .unwrap()
            .down()
            .move_by(100, 150, 2000)
            .up();

        let mut guard = 0;
        while dispatcher.is_active() {
            clock.advance(16);
            dispatcher.pump(clock.now_ms());
            guard += 1;
            assert!(guard < 1000, "dispatcher never went idle");
        }

        let kinds = surface.event_kinds();
        assert_eq!(kinds.first(), Some(&PointerEventKind::Down));
        assert_eq!(kinds.last(), Some(&PointerEventKind::Up));
        assert!(kinds
            .iter()
            .filter(|k| **k == PointerEventKind::Move)
            .count()
            > 10);

        let last = surface.events().last().cloned().unwrap();
        assert_eq!(last.position(), (100, 150));
        assert_eq!(surface.phases().last(), Some(&GesturePhase::Stopped));
    }

    #[test]
    fn test_instant_drains_synchronously() {
        let (mut dispatcher, _clock, surface) = manual_dispatcher(TimingConfig::Instant);
        let id = dispatcher.create_point(PointerSpec::default());

        dispatcher
            .point(id)
            .unwrap()
            .down()
            .move_by(100, 150, 2000)
            .up();

        // Everything already played out during the queue calls
        assert!(!dispatcher.is_active());
        assert_eq!(
            surface.event_kinds(),
            vec![
                PointerEventKind::Down,
                PointerEventKind::Move,
                PointerEventKind::Up
            ]
        );
        let positions: Vec<_> = surface.events().iter().map(|e| e.position()).collect();
        assert_eq!(positions, vec![(0, 0), (100, 150), (100, 150)]);
    }

    #[test]
    fn test_instant_start_stop_per_queue_call() {
        let (mut dispatcher, _clock, surface) = manual_dispatcher(TimingConfig::Instant);
        let id = dispatcher.create_point(PointerSpec::default());

        dispatcher.point(id).unwrap().down();
        dispatcher.point(id).unwrap().up();

        let starts = surface
            .phases()
            .iter()
            .filter(|p| **p == GesturePhase::Started)
            .count();
        let stops = surface
            .phases()
            .iter()
            .filter(|p| **p == GesturePhase::Stopped)
            .count();
        assert_eq!(starts, 2);
        assert_eq!(stops, 2);
    }

    #[test]
    fn test_minimal_never_merges_separated_movements() {
        let (mut dispatcher, _clock, surface) = manual_dispatcher(TimingConfig::Minimal);
        let id = dispatcher.create_point(PointerSpec::default());

        dispatcher.point(id).unwrap().down().up_after(10);

        // Pump far past both deadlines: still two distinct events
        assert!(dispatcher.pump(50));
        assert_eq!(surface.event_kinds(), vec![PointerEventKind::Down]);
        assert!(dispatcher.is_active());

        assert!(dispatcher.pump(50));
        assert_eq!(
            surface.event_kinds(),
            vec![PointerEventKind::Down, PointerEventKind::Up]
        );
        assert!(!dispatcher.is_active());
    }

    #[test]
    fn test_minimal_schedules_on_movement_boundary() {
        let (mut dispatcher, clock, _surface) = manual_dispatcher(TimingConfig::Minimal);
        let id = dispatcher.create_point(PointerSpec::default());
        clock.set(100);

        dispatcher.point(id).unwrap().down_after(40);
        assert_eq!(dispatcher.pending_deadline(), Some(Deadline::At(140)));

        // Not due yet
        assert!(!dispatcher.pump(120));
        assert!(dispatcher.pump(140));
    }

    #[test]
    fn test_fast_periodic_frame_jumps_to_movement_boundary() {
        let (mut dispatcher, _clock, surface) =
            manual_dispatcher(TimingConfig::FastPeriodicFrame {
                frame_interval_ms: 16,
            });
        let id = dispatcher.create_point(PointerSpec::default());

        dispatcher.point(id).unwrap().down_after(40).up_after(10);
        assert_eq!(dispatcher.pending_deadline(), Some(Deadline::NextFrame));

        // Frame ticks arrive before either movement boundary; the sampled
        // time jumps forward to each boundary, one movement per tick
        assert!(dispatcher.pump(16));
        assert_eq!(surface.event_kinds(), vec![PointerEventKind::Down]);
        assert_eq!(surface.events()[0].timestamp_ms, 40);
        assert!(dispatcher.is_active());

        assert!(dispatcher.pump(32));
        assert_eq!(
            surface.event_kinds(),
            vec![PointerEventKind::Down, PointerEventKind::Up]
        );
        assert_eq!(surface.events()[1].timestamp_ms, 50);
        assert!(!dispatcher.is_active());
    }

    #[test]
    fn test_stop_broadcast_precedes_requeue_from_callback() {
        let (mut dispatcher, clock, surface) =
            manual_dispatcher(TimingConfig::FixedInterval { interval_ms: 16 });
        let id = dispatcher.create_point(PointerSpec::default());

        let requeued = Rc::new(Cell::new(false));
        let flag = requeued.clone();
        dispatcher.on_stop(move |d| {
            if !flag.get() {
                flag.set(true);
                d.point(id).unwrap().up();
            }
        });

        dispatcher.point(id).unwrap().down();
        clock.advance(16);
        dispatcher.pump(clock.now_ms());

        // The callback requeued, so a second cycle began after the first
        // one closed; listeners see Stopped before the new Started
        assert!(requeued.get());
        assert!(dispatcher.is_active());
        assert_eq!(
            surface.phases(),
            vec![
                GesturePhase::Started,
                GesturePhase::Ticked,
                GesturePhase::Stopped,
                GesturePhase::Started,
            ]
        );

        clock.advance(16);
        dispatcher.pump(clock.now_ms());
        assert!(!dispatcher.is_active());
        assert_eq!(surface.phases().last(), Some(&GesturePhase::Stopped));
    }

    #[test]
    fn test_sync_aligns_end_times() {
        let (mut dispatcher, _clock, _surface) =
            manual_dispatcher(TimingConfig::FixedInterval { interval_ms: 16 });
        let a = dispatcher.create_point(PointerSpec::default());
        let b = dispatcher.create_point(PointerSpec::default());

        dispatcher.point(a).unwrap().down().move_by(10, 0, 300);
        dispatcher.point(b).unwrap().down().move_by(0, 10, 1200);

        let longest = dispatcher.get(b).unwrap().moves_until();
        dispatcher.sync(500);

        let until_a = dispatcher.get(a).unwrap().moves_until();
        let until_b = dispatcher.get(b).unwrap().moves_until();
        assert_eq!(until_a, until_b);
        assert!(until_a >= longest + 500);
    }

    #[test]
    fn test_start_stop_callbacks_fire() {
        let (mut dispatcher, _clock, _surface) = manual_dispatcher(TimingConfig::Instant);
        let starts = Rc::new(Cell::new(0u32));
        let stops = Rc::new(Cell::new(0u32));

        let counter = starts.clone();
        dispatcher.on_start(move |_| counter.set(counter.get() + 1));
        let counter = stops.clone();
        dispatcher.on_stop(move |_| counter.set(counter.get() + 1));

        let id = dispatcher.create_point(PointerSpec::default());
        dispatcher.point(id).unwrap().down();
        dispatcher.point(id).unwrap().up();

        assert_eq!(starts.get(), 2);
        assert_eq!(stops.get(), 2);
    }

    #[test]
    fn test_move_to_equals_move_by_from_origin() {
        let (mut by_dispatcher, _c1, by_surface) = manual_dispatcher(TimingConfig::Instant);
        let (mut to_dispatcher, _c2, to_surface) = manual_dispatcher(TimingConfig::Instant);

        let a = by_dispatcher.create_point(PointerSpec::default());
        let b = to_dispatcher.create_point(PointerSpec::default());

        by_dispatcher.point(a).unwrap().move_by(40, 60, 100);
        to_dispatcher.point(b).unwrap().move_to(40, 60, 100);

        let by_positions: Vec<_> = by_surface.events().iter().map(|e| e.position()).collect();
        let to_positions: Vec<_> = to_surface.events().iter().map(|e| e.position()).collect();
        assert_eq!(by_positions, to_positions);
        assert_eq!(by_positions, vec![(40, 60)]);
    }

    #[test]
    fn test_first_point_is_primary() {
        let (mut dispatcher, _clock, _surface) = manual_dispatcher(TimingConfig::default());
        let a = dispatcher.create_point(PointerSpec::default());
        let b = dispatcher.create_point(PointerSpec::default());

        assert!(dispatcher.get(a).unwrap().is_primary());
        assert!(!dispatcher.get(b).unwrap().is_primary());
    }

    #[test]
    fn test_periodic_frame_flushes_on_every_pump() {
        let (mut dispatcher, clock, surface) =
            manual_dispatcher(TimingConfig::PeriodicFrame {
                frame_interval_ms: 16,
            });
        let id = dispatcher.create_point(PointerSpec::default());
        dispatcher.point(id).unwrap().move_by(60, 0, 60);

        assert_eq!(dispatcher.pending_deadline(), Some(Deadline::NextFrame));
        for _ in 0..5 {
            clock.advance(16);
            dispatcher.pump(clock.now_ms());
        }

        assert!(!dispatcher.is_active());
        let last = surface.events().last().cloned().unwrap();
        assert_eq!(last.position(), (60, 0));
    }

    #[tokio::test]
    async fn test_run_until_idle_drives_to_completion() {
        let surface = RecordingSurface::new();
        let mut dispatcher = Dispatcher::with_surface(
            TimingConfig::FixedInterval { interval_ms: 5 },
            Box::new(surface.clone()),
        );
        let id = dispatcher.create_point(PointerSpec::default());

        dispatcher
            .point(id)
            .unwrap()
            .down()
            .move_by(10, 0, 200)
            .up();
        dispatcher.run_until_idle().await;

        assert!(!dispatcher.is_active());
        let kinds = surface.event_kinds();
        assert_eq!(kinds.first(), Some(&PointerEventKind::Down));
        assert_eq!(kinds.last(), Some(&PointerEventKind::Up));
    }
}
