//! Synthetic pointer event types and transition classification.
//!
//! The engine emits at most one semantic event per contact per flush.
//! Events serialize to JSONL (one JSON object per line) so gesture runs
//! can be logged and replayed.

use serde::{Deserialize, Serialize};

use crate::state::ContactState;

/// Stable identifier for a synthetic contact, assigned in creation order.
pub type PointerId = u64;

/// Pointer device category. Affects only event tagging and how a marker
/// is rendered, never scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Mouse,
    Pen,
    #[default]
    Touch,
}

/// Semantic event classification for one sampled state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEventKind {
    Down,
    Up,
    Move,
}

/// One synthetic pointer event, carrying the emitting contact's full
/// attribute snapshot at emission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticPointerEvent {
    /// Milliseconds since the engine clock epoch.
    #[serde(rename = "t")]
    pub timestamp_ms: u64,

    /// Event classification.
    pub kind: PointerEventKind,

    /// Stable per-contact identifier.
    pub pointer_id: PointerId,

    /// Device category tag.
    pub pointer_kind: PointerKind,

    /// True iff this is the first contact created under its dispatcher.
    pub is_primary: bool,

    pub x: i64,
    pub y: i64,
    pub pressure: f64,
    pub tilt_x: i32,
    pub tilt_y: i32,
    pub width: u32,
    pub height: u32,
}

impl SyntheticPointerEvent {
    /// Build an event from a contact's current state.
    pub fn from_state(
        kind: PointerEventKind,
        pointer_id: PointerId,
        pointer_kind: PointerKind,
        is_primary: bool,
        state: &ContactState,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            timestamp_ms,
            kind,
            pointer_id,
            pointer_kind,
            is_primary,
            x: state.x,
            y: state.y,
            pressure: state.pressure,
            tilt_x: state.tilt_x,
            tilt_y: state.tilt_y,
            width: state.width,
            height: state.height,
        }
    }

    /// Event position.
    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

/// Classify the transition between two contact snapshots.
///
/// Precedence: a released contact (`down` true→false) is `Up` and a fresh
/// press (false→true) is `Down`, both ahead of any position change; a
/// position change alone is `Move`; anything else (pressure, tilt or
/// geometry only) emits nothing.
pub fn classify_transition(prev: &ContactState, next: &ContactState) -> Option<PointerEventKind> {
    if prev.down && !next.down {
        return Some(PointerEventKind::Up);
    }
    if !prev.down && next.down {
        return Some(PointerEventKind::Down);
    }
    if prev.x != next.x || prev.y != next.y {
        return Some(PointerEventKind::Move);
    }
    None
}

/// Parse events from JSONL content (one JSON object per line).
/// Lines starting with `#` are headers/comments and are skipped.
pub fn parse_events(jsonl: &str) -> Result<Vec<SyntheticPointerEvent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize events to JSONL format.
pub fn serialize_events(events: &[SyntheticPointerEvent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}
