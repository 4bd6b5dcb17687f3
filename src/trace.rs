//! Recorded input traces.
//!
//! A trace is a JSON array of key-state changes stamped with the time they
//! happened, relative to the engine start:
//!
//! ```json
//! [
//!   { "at_ms": 0.0, "signal": "Right", "active": true },
//!   { "at_ms": 500.0, "signal": "Right", "active": false }
//! ]
//! ```
//!
//! Replaying the same trace against the same frame times always produces the
//! same simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::error::SimError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Milliseconds after start at which the change is observed.
    pub at_ms: f64,
    pub signal: String,
    pub active: bool,
}

/// Input trace sorted by time, replayed incrementally.
#[derive(Debug, Clone, Default)]
pub struct InputTrace {
    events: Vec<TraceEvent>,
    cursor: usize,
}

impl InputTrace {
    /// Build a trace; events are stably sorted by `at_ms`.
    pub fn new(mut events: Vec<TraceEvent>) -> Self {
        events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
        Self { events, cursor: 0 }
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let events: Vec<TraceEvent> =
            serde_json::from_str(json).map_err(|e| SimError::Trace(e.to_string()))?;
        Ok(Self::new(events))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::Trace(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether every event has been delivered.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// Forward every pending event stamped at or before `elapsed_ms`.
    ///
    /// Returns how many events were delivered.
    pub fn apply_until(&mut self, engine: &mut Engine, elapsed_ms: f64) -> usize {
        let start = self.cursor;
        while let Some(event) = self.events.get(self.cursor) {
            if event.at_ms > elapsed_ms {
                break;
            }
            engine.set_signal(&event.signal, event.active);
            self.cursor += 1;
        }
        self.cursor - start
    }
}
