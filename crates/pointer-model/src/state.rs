//! Contact state for synthetic pointers.
//!
//! Each synthetic contact carries a full attribute snapshot
//! ([`ContactState`]) and is mutated exclusively by applying partial
//! overrides ([`StateDelta`]). Merging is explicit per field; there is no
//! open-ended attribute bag.

use serde::{Deserialize, Serialize};

/// Full attribute snapshot for one synthetic contact.
///
/// Coordinates are integer surface units; `pressure` is `[0.0, 1.0]`;
/// `width`/`height` describe the contact geometry in the same units as
/// the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactState {
    pub x: i64,
    pub y: i64,
    pub down: bool,
    pub pressure: f64,
    pub tilt_x: i32,
    pub tilt_y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            down: false,
            pressure: 0.0,
            tilt_x: 0,
            tilt_y: 0,
            width: 1,
            height: 1,
        }
    }
}

impl ContactState {
    /// A released contact at the given position with default attributes.
    pub fn at(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Apply a partial override, field by field. Absent fields are left
    /// untouched. Pressure is clamped to `[0.0, 1.0]`.
    pub fn apply(&mut self, delta: &StateDelta) {
        if let Some(x) = delta.x {
            self.x = x;
        }
        if let Some(y) = delta.y {
            self.y = y;
        }
        if let Some(down) = delta.down {
            self.down = down;
        }
        if let Some(pressure) = delta.pressure {
            self.pressure = pressure.clamp(0.0, 1.0);
        }
        if let Some(tilt_x) = delta.tilt_x {
            self.tilt_x = tilt_x;
        }
        if let Some(tilt_y) = delta.tilt_y {
            self.tilt_y = tilt_y;
        }
        if let Some(width) = delta.width {
            self.width = width;
        }
        if let Some(height) = delta.height {
            self.height = height;
        }
    }

    /// Current position.
    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

/// Partial state override with named optional fields.
///
/// A `None` field means "leave unchanged"; only present fields take part
/// in merging and comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDelta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilt_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilt_y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl StateDelta {
    /// A position-only override.
    pub fn position(x: i64, y: i64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// A contact-down-only override.
    pub fn pressed(down: bool) -> Self {
        Self {
            down: Some(down),
            ..Self::default()
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge `later` over `self`: fields present in `later` win.
    pub fn merged_with(&self, later: &StateDelta) -> Self {
        Self {
            x: later.x.or(self.x),
            y: later.y.or(self.y),
            down: later.down.or(self.down),
            pressure: later.pressure.or(self.pressure),
            tilt_x: later.tilt_x.or(self.tilt_x),
            tilt_y: later.tilt_y.or(self.tilt_y),
            width: later.width.or(self.width),
            height: later.height.or(self.height),
        }
    }

    /// Shallow difference check: compare only the fields present in this
    /// delta against the corresponding fields of `state`. Fields absent
    /// here are never treated as differences.
    pub fn differs_from(&self, state: &ContactState) -> bool {
        if self.x.is_some_and(|x| x != state.x) {
            return true;
        }
        if self.y.is_some_and(|y| y != state.y) {
            return true;
        }
        if self.down.is_some_and(|down| down != state.down) {
            return true;
        }
        if self.pressure.is_some_and(|p| p != state.pressure) {
            return true;
        }
        if self.tilt_x.is_some_and(|t| t != state.tilt_x) {
            return true;
        }
        if self.tilt_y.is_some_and(|t| t != state.tilt_y) {
            return true;
        }
        if self.width.is_some_and(|w| w != state.width) {
            return true;
        }
        if self.height.is_some_and(|h| h != state.height) {
            return true;
        }
        false
    }
}
