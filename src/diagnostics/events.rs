// SPDX-License-Identifier: MPL-2.0
//! Activity event types for the lens subsystem.
//!
//! These events describe what the coordination layer did, not what the user
//! saw; hosts can export them alongside their own diagnostics when filing
//! support reports.

use crate::domain::analysis::SequenceNumber;
use serde::{Deserialize, Serialize};

/// One recorded coordination event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LensEvent {
    /// A drag session started from the palette.
    DragStarted { lens: String },

    /// A drag was rejected (already dragging, or unknown lens id).
    DragRejected { lens: String, reason: String },

    /// The drag ended without a drop.
    DragCancelled,

    /// A drop landed on a zone id that is no longer registered.
    DropOnMissingZone { zone: String },

    /// An analysis request was submitted to the backend.
    AnalysisSubmitted {
        sequence: SequenceNumber,
        lens: String,
        zone: String,
    },

    /// A resolution passed the sequence guard and was applied.
    AnalysisApplied {
        sequence: SequenceNumber,
        success: bool,
    },

    /// A stale or cancelled resolution was discarded on arrival.
    AnalysisDiscarded { sequence: SequenceNumber },

    /// The pending request was cancelled by the user.
    AnalysisCancelled { sequence: SequenceNumber },

    /// A request failed before reaching the backend.
    AnalysisFailedEarly {
        sequence: SequenceNumber,
        error: String,
    },
}
