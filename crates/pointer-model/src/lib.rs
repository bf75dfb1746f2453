//! Ghosthand Pointer Model
//!
//! Pure data types for the gesture engine:
//! - **Contact state:** attribute snapshots and partial overrides
//! - **Events:** synthetic pointer events with JSONL serialization
//! - **Scripts:** serializable multi-contact gesture descriptions
//!
//! This crate has no clocks and no scheduling — all inputs are data,
//! all outputs are data.

pub mod event;
pub mod script;
pub mod state;

pub use event::{
    classify_transition, parse_events, serialize_events, PointerEventKind, PointerId, PointerKind,
    SyntheticPointerEvent,
};
pub use script::{GestureScript, PointerSpec, ScriptCommand};
pub use state::{ContactState, StateDelta};
