//! Gesture scripts: a serializable description of a multi-contact gesture.
//!
//! A script declares its synthetic pointers up front, then lists commands
//! in the order they should be queued. Commands address pointers by index
//! into the declaration list. Scripts are pure data; the engine crate
//! turns them into queued movements.

use serde::{Deserialize, Serialize};

use crate::event::PointerKind;

/// A complete gesture script.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureScript {
    /// Pointers created before any command runs, in creation order
    /// (the first declared pointer is the primary contact).
    pub pointers: Vec<PointerSpec>,

    /// Commands queued in order.
    pub commands: Vec<ScriptCommand>,
}

/// Initial attributes for one declared pointer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointerSpec {
    #[serde(default)]
    pub kind: PointerKind,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
    #[serde(default)]
    pub pressure: f64,
    #[serde(default)]
    pub tilt_x: i32,
    #[serde(default)]
    pub tilt_y: i32,
    #[serde(default = "default_contact_extent")]
    pub width: u32,
    #[serde(default = "default_contact_extent")]
    pub height: u32,
}

fn default_contact_extent() -> u32 {
    1
}

impl Default for PointerSpec {
    fn default() -> Self {
        Self {
            kind: PointerKind::default(),
            x: 0,
            y: 0,
            pressure: 0.0,
            tilt_x: 0,
            tilt_y: 0,
            width: 1,
            height: 1,
        }
    }
}

impl PointerSpec {
    pub fn touch_at(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
}

/// One queued action. `pointer` is an index into the script's pointer
/// declarations; `sync` addresses every pointer at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptCommand {
    Down {
        pointer: usize,
        #[serde(default)]
        delay_ms: u64,
    },
    Up {
        pointer: usize,
        #[serde(default)]
        delay_ms: u64,
    },
    MoveTo {
        pointer: usize,
        x: i64,
        y: i64,
        duration_ms: u64,
    },
    MoveBy {
        pointer: usize,
        dx: i64,
        dy: i64,
        duration_ms: u64,
    },
    Wait {
        pointer: usize,
        delay_ms: u64,
    },
    WaitUntil {
        pointer: usize,
        at_ms: u64,
    },
    /// Update non-position attributes (pressure, tilt, contact geometry).
    Set {
        pointer: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        pressure: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tilt_x: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tilt_y: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<u32>,
        #[serde(default)]
        delay_ms: u64,
    },
    /// Pad every pointer's timeline so their next movements start together.
    Sync {
        #[serde(default)]
        delay_ms: u64,
    },
}

impl ScriptCommand {
    /// The pointer index this command addresses, if any.
    pub fn pointer(&self) -> Option<usize> {
        match self {
            Self::Down { pointer, .. }
            | Self::Up { pointer, .. }
            | Self::MoveTo { pointer, .. }
            | Self::MoveBy { pointer, .. }
            | Self::Wait { pointer, .. }
            | Self::WaitUntil { pointer, .. }
            | Self::Set { pointer, .. } => Some(*pointer),
            Self::Sync { .. } => None,
        }
    }
}

impl GestureScript {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check internal consistency. Returns human-readable problems.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.pointers.is_empty() {
            problems.push("script declares no pointers".to_string());
        }

        for (i, spec) in self.pointers.iter().enumerate() {
            if !(0.0..=1.0).contains(&spec.pressure) {
                problems.push(format!(
                    "pointer {i}: pressure {} outside [0.0, 1.0]",
                    spec.pressure
                ));
            }
        }

        for (i, command) in self.commands.iter().enumerate() {
            if let Some(pointer) = command.pointer() {
                if pointer >= self.pointers.len() {
                    problems.push(format!(
                        "command {i}: pointer index {pointer} out of range ({} declared)",
                        self.pointers.len()
                    ));
                }
            }
        }

        problems
    }
}
