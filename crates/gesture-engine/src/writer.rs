//! Append-only JSONL logging for synthesized event streams.
//!
//! Gesture runs are logged one JSON object per line with a `# {header}`
//! comment first, so a playback log survives a crash mid-gesture and can
//! be parsed back with `ghosthand_pointer_model::parse_events`.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use ghosthand_common::error::{GhosthandError, GhosthandResult};
use ghosthand_pointer_model::SyntheticPointerEvent;

use crate::surface::{GesturePhase, Surface};

/// Metadata written as the stream's header line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at the engine clock epoch (ISO 8601).
    pub epoch_wall: String,

    /// Name of the timing strategy that produced this stream.
    pub timing: String,
}

impl GestureStreamHeader {
    pub fn new(epoch_wall: impl Into<String>, timing: impl Into<String>) -> Self {
        Self {
            schema_version: "1.0".to_string(),
            epoch_wall: epoch_wall.into(),
            timing: timing.into(),
        }
    }
}

/// Writes synthesized events to a JSONL file.
pub struct EventWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    events_written: u64,
}

impl EventWriter {
    /// Create a new event writer, writing the header as the first line.
    pub fn new(path: PathBuf, header: &GestureStreamHeader) -> GhosthandResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let mut writer = BufWriter::new(file);

        let header_json = serde_json::to_string(header)?;
        writeln!(writer, "# {header_json}")
            .map_err(|e| GhosthandError::surface(format!("Failed to write header: {e}")))?;

        Ok(Self {
            writer,
            path,
            events_written: 0,
        })
    }

    /// Write a single event as a JSONL line.
    pub fn write_event(&mut self, event: &SyntheticPointerEvent) -> GhosthandResult<()> {
        let json = serde_json::to_string(event)?;
        writeln!(self.writer, "{json}")
            .map_err(|e| GhosthandError::surface(format!("Failed to write event: {e}")))?;
        self.events_written += 1;

        // Keep the log usable if the embedder dies mid-gesture
        if self.events_written % 256 == 0 {
            self.flush()?;
        }

        Ok(())
    }

    /// Flush buffered writes to disk.
    pub fn flush(&mut self) -> GhosthandResult<()> {
        self.writer
            .flush()
            .map_err(|e| GhosthandError::surface(format!("Failed to flush events: {e}")))?;
        Ok(())
    }

    /// Number of events written.
    pub fn events_written(&self) -> u64 {
        self.events_written
    }

    /// Path to the output file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for EventWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// A surface that logs every delivered event to a JSONL stream.
/// Lifecycle broadcasts go to tracing, not the file.
pub struct JsonlSurface {
    writer: EventWriter,
}

impl JsonlSurface {
    pub fn create(path: PathBuf, header: &GestureStreamHeader) -> GhosthandResult<Self> {
        Ok(Self {
            writer: EventWriter::new(path, header)?,
        })
    }

    pub fn events_written(&self) -> u64 {
        self.writer.events_written()
    }
}

impl Surface for JsonlSurface {
    fn deliver(&mut self, event: &SyntheticPointerEvent) -> GhosthandResult<()> {
        self.writer.write_event(event)
    }

    fn broadcast(&mut self, phase: GesturePhase) {
        tracing::debug!(?phase, "Gesture phase");
        if phase == GesturePhase::Stopped {
            if let Err(e) = self.writer.flush() {
                tracing::warn!(error = %e, "Failed to flush event log");
            }
        }
    }
}
