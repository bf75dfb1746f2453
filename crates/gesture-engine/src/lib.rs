//! Ghosthand Gesture Engine
//!
//! Synthesizes pointer/touch gestures by scheduling timed movements per
//! synthetic contact and sampling them against a clock:
//!
//! - **Movable points:** per-contact movement queues and the sampling
//!   algorithm that turns state changes into down/up/move events
//! - **Dispatcher:** idle/busy tracking, five timing strategies, and the
//!   flush loop that delivers events to a surface
//! - **Collaborators:** marker rendering and event delivery live behind
//!   traits; the engine itself is headless
//!
//! Single-threaded cooperative scheduling: flushes never overlap, and all
//! mutation happens inside a flush or a synchronous queue call.

pub mod dispatcher;
pub mod movement;
pub mod point;
pub mod script;
pub mod surface;
pub mod writer;

pub use dispatcher::{Deadline, Dispatcher, PointHandle};
pub use movement::{Movement, Sampler};
pub use point::MovablePoint;
pub use script::run_script;
pub use surface::{
    GesturePhase, Marker, MarkerProvider, NullMarker, NullMarkerProvider, NullSurface,
    RecordingSurface, Surface,
};
pub use writer::{EventWriter, GestureStreamHeader, JsonlSurface};
