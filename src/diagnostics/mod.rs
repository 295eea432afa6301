// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for the lens subsystem's activity log.
//!
//! Events are captured in a memory-bounded ring buffer and can be exported
//! as JSON for support reports. Recording never fails and never blocks; the
//! log is plain state mutated on the event loop like everything else here.

mod buffer;
mod events;

pub use buffer::{capacity_bounds, ActivityBuffer, BufferCapacity};
pub use events::LensEvent;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One event with its wall-clock timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: LensEvent,
}

/// Bounded, in-memory log of coordination events.
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    buffer: ActivityBuffer<RecordedEvent>,
}

impl ActivityLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: ActivityBuffer::new(capacity),
        }
    }

    /// Records an event with the current timestamp.
    pub fn record(&mut self, event: LensEvent) {
        self.buffer.push(RecordedEvent {
            at: Utc::now(),
            event,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordedEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports the log as a JSON array, oldest event first.
    ///
    /// # Errors
    ///
    /// Returns a serialization error message when encoding fails.
    pub fn export_json(&self) -> Result<String, String> {
        let events: Vec<&RecordedEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events).map_err(|e| e.to_string())
    }
}
