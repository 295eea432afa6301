// SPDX-License-Identifier: MPL-2.0
//! Analysis requests and sequencing.
//!
//! Every accepted drop creates an [`AnalysisRequest`] carrying a strictly
//! increasing [`SequenceNumber`]. Completions are applied only when their
//! sequence number still matches the latest one, so an earlier-submitted,
//! later-arriving response can never overwrite newer state.

use crate::domain::lens::LensId;
use crate::domain::zone::{WorkspaceSnapshot, ZoneDataType, ZoneId};
use crate::error::AnalysisError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic request sequence number, allocated per analysis session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SequenceNumber(u64);

impl SequenceNumber {
    /// The first sequence number handed out by a session.
    pub const FIRST: SequenceNumber = SequenceNumber(1);

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the next number in the sequence.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle status of an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Success,
    Error,
    Cancelled,
}

/// Result content returned by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub content: String,
}

/// One analysis request, from drop to resolution.
///
/// The zone label and data type are frozen here alongside the snapshot so a
/// retry still works after the originating view has unmounted.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub sequence: SequenceNumber,
    pub lens_id: LensId,
    pub zone_id: ZoneId,
    pub zone_label: String,
    pub zone_data_type: ZoneDataType,
    pub zone_summary: Option<String>,
    pub snapshot: WorkspaceSnapshot,
    pub submitted_at: DateTime<Utc>,
    pub status: RequestStatus,
    pub result: Option<AnalysisOutcome>,
    pub error: Option<AnalysisError>,
}

impl AnalysisRequest {
    /// Creates a pending request with the snapshot frozen as captured.
    #[must_use]
    pub fn pending(
        sequence: SequenceNumber,
        lens_id: LensId,
        zone_id: ZoneId,
        zone_label: String,
        zone_data_type: ZoneDataType,
        zone_summary: Option<String>,
        snapshot: WorkspaceSnapshot,
    ) -> Self {
        Self {
            sequence,
            lens_id,
            zone_id,
            zone_label,
            zone_data_type,
            zone_summary,
            snapshot,
            submitted_at: Utc::now(),
            status: RequestStatus::Pending,
            result: None,
            error: None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Marks the request cancelled. Its eventual resolution will be ignored.
    pub fn mark_cancelled(&mut self) {
        self.status = RequestStatus::Cancelled;
    }

    /// Applies a successful resolution.
    pub fn apply_success(&mut self, outcome: AnalysisOutcome) {
        self.status = RequestStatus::Success;
        self.result = Some(outcome);
        self.error = None;
    }

    /// Applies a failed resolution.
    pub fn apply_error(&mut self, error: AnalysisError) {
        self.status = RequestStatus::Error;
        self.error = Some(error);
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(sequence: SequenceNumber) -> AnalysisRequest {
        AnalysisRequest::pending(
            sequence,
            LensId::new("risk-scanner"),
            ZoneId::new("dash"),
            "Dashboard".to_string(),
            ZoneDataType::Tasks,
            None,
            WorkspaceSnapshot::default(),
        )
    }

    #[test]
    fn sequence_numbers_are_strictly_increasing() {
        let first = SequenceNumber::FIRST;
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.value(), 2);
    }

    #[test]
    fn new_request_is_pending() {
        let req = request(SequenceNumber::FIRST);
        assert!(req.is_pending());
        assert!(req.result.is_none());
        assert!(req.error.is_none());
    }

    #[test]
    fn success_resolution_stores_outcome() {
        let mut req = request(SequenceNumber::FIRST);
        req.apply_success(AnalysisOutcome {
            content: "ok".into(),
        });
        assert_eq!(req.status, RequestStatus::Success);
        assert_eq!(req.result.as_ref().map(|o| o.content.as_str()), Some("ok"));
    }

    #[test]
    fn error_resolution_clears_result() {
        let mut req = request(SequenceNumber::FIRST);
        req.apply_success(AnalysisOutcome {
            content: "ok".into(),
        });
        req.apply_error(AnalysisError::Timeout);
        assert_eq!(req.status, RequestStatus::Error);
        assert!(req.result.is_none());
        assert_eq!(req.error, Some(AnalysisError::Timeout));
    }

    #[test]
    fn cancelled_request_is_no_longer_pending() {
        let mut req = request(SequenceNumber::FIRST);
        req.mark_cancelled();
        assert!(!req.is_pending());
        assert_eq!(req.status, RequestStatus::Cancelled);
    }
}
