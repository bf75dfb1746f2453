//! Collaborator seams: contact markers and the event delivery surface.
//!
//! The engine core never renders anything and never constructs platform
//! events. It drives a [`Marker`] per contact and hands semantic
//! [`SyntheticPointerEvent`]s to a [`Surface`], which owns hit-testing and
//! whatever platform event construction the embedder needs.

use std::cell::RefCell;
use std::rc::Rc;

use ghosthand_common::error::GhosthandResult;
use ghosthand_pointer_model::{PointerEventKind, PointerId, PointerKind, SyntheticPointerEvent};

/// A rendered indicator for one synthetic contact.
pub trait Marker {
    fn show(&mut self);
    fn hide(&mut self);
    fn move_to(&mut self, x: i64, y: i64);
}

/// Creates one marker per contact, keyed by device category.
pub trait MarkerProvider {
    fn create(&mut self, kind: PointerKind, id: PointerId) -> Box<dyn Marker>;
}

/// Lifecycle notification broadcast by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// The dispatcher went Idle → Active.
    Started,
    /// A flush is about to sample the points.
    Ticked,
    /// The dispatcher went Active → Idle.
    Stopped,
}

/// Receives synthesized events and lifecycle broadcasts.
///
/// `deliver` resolves whatever lies under the event's coordinates and
/// forwards the event there; an empty spot is the surface's own boundary
/// condition, not the engine's.
pub trait Surface {
    fn deliver(&mut self, event: &SyntheticPointerEvent) -> GhosthandResult<()>;
    fn broadcast(&mut self, phase: GesturePhase);
}

/// Marker that renders nothing.
#[derive(Debug, Default)]
pub struct NullMarker;

impl Marker for NullMarker {
    fn show(&mut self) {}
    fn hide(&mut self) {}
    fn move_to(&mut self, _x: i64, _y: i64) {}
}

/// Provider handing out [`NullMarker`]s.
#[derive(Debug, Default)]
pub struct NullMarkerProvider;

impl MarkerProvider for NullMarkerProvider {
    fn create(&mut self, _kind: PointerKind, _id: PointerId) -> Box<dyn Marker> {
        Box::new(NullMarker)
    }
}

/// Surface that drops everything. Useful when only the marker side effects
/// or the recorded output of another collaborator matter.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn deliver(&mut self, _event: &SyntheticPointerEvent) -> GhosthandResult<()> {
        Ok(())
    }

    fn broadcast(&mut self, _phase: GesturePhase) {}
}

/// Surface that captures everything it receives.
///
/// Clones share storage, so a test can keep one copy and box another into
/// the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Rc<RefCell<Vec<SyntheticPointerEvent>>>,
    phases: Rc<RefCell<Vec<GesturePhase>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of delivered events.
    pub fn events(&self) -> Vec<SyntheticPointerEvent> {
        self.events.borrow().clone()
    }

    /// Snapshot of broadcast phases.
    pub fn phases(&self) -> Vec<GesturePhase> {
        self.phases.borrow().clone()
    }

    /// Just the event kinds, in delivery order.
    pub fn event_kinds(&self) -> Vec<PointerEventKind> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }
}

impl Surface for RecordingSurface {
    fn deliver(&mut self, event: &SyntheticPointerEvent) -> GhosthandResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }

    fn broadcast(&mut self, phase: GesturePhase) {
        self.phases.borrow_mut().push(phase);
    }
}

/// What a [`RecordingMarker`] saw, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCall {
    Show,
    Hide,
    MoveTo(i64, i64),
}

/// Marker that records its calls; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingMarker {
    calls: Rc<RefCell<Vec<MarkerCall>>>,
}

impl RecordingMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<MarkerCall> {
        self.calls.borrow().clone()
    }
}

impl Marker for RecordingMarker {
    fn show(&mut self) {
        self.calls.borrow_mut().push(MarkerCall::Show);
    }

    fn hide(&mut self) {
        self.calls.borrow_mut().push(MarkerCall::Hide);
    }

    fn move_to(&mut self, x: i64, y: i64) {
        self.calls.borrow_mut().push(MarkerCall::MoveTo(x, y));
    }
}
