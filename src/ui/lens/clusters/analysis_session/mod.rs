// SPDX-License-Identifier: MPL-2.0
//! Analysis session cluster - request lifecycle, supersession, and the
//! sequence guard, managed together.
//!
//! At most one request is pending at any time. Starting a new one marks the
//! prior pending request cancelled and flips its cancellation token; the
//! prior call keeps running until the transport notices, but its resolution
//! is discarded on arrival. Network responses may arrive out of submission
//! order, so resolutions are applied only under a monotonic sequence-number
//! comparison - promise ordering is never relied on.

use crate::application::port::analysis::{
    new_cancellation_token, trigger_cancellation, AnalysisJob, CancellationToken,
};
use crate::domain::analysis::{AnalysisOutcome, AnalysisRequest, RequestStatus, SequenceNumber};
use crate::domain::lens::LensId;
use crate::domain::zone::{WorkspaceSnapshot, ZoneDataType, ZoneId};
use crate::error::AnalysisError;

/// Analysis session state.
///
/// Holds the latest request only; a superseded request is overwritten once
/// its replacement is created. The design intentionally keeps no history.
#[derive(Debug, Default)]
pub struct State {
    last_sequence: Option<SequenceNumber>,
    request: Option<AnalysisRequest>,
    cancel_token: Option<CancellationToken>,
}

/// Messages for the analysis session cluster.
#[derive(Debug, Clone)]
pub enum Message {
    /// A drop finalized over a registered zone; start a new request.
    Start {
        lens: LensId,
        zone: ZoneId,
        zone_label: String,
        zone_data_type: ZoneDataType,
        zone_summary: Option<String>,
        snapshot: WorkspaceSnapshot,
    },
    /// A drop finalized but the request cannot be submitted (for example the
    /// zone has no data accessor). Creates a request already in error state
    /// so the overlay can surface it.
    Fail {
        lens: LensId,
        zone: ZoneId,
        zone_label: String,
        zone_data_type: ZoneDataType,
        zone_summary: Option<String>,
        error: AnalysisError,
    },
    /// A submitted call resolved. May arrive out of order or after
    /// cancellation; the guard decides whether it is applied.
    Completed {
        sequence: SequenceNumber,
        outcome: Result<AnalysisOutcome, AnalysisError>,
    },
    /// User-initiated cancel of the pending request.
    Cancel,
    /// Re-submit the failed request with its originally captured snapshot.
    Retry,
}

/// Effects produced by session operations.
#[derive(Debug)]
pub enum Effect {
    /// No effect.
    None,
    /// A new pending request exists; the orchestrator opens the overlay in
    /// loading state and performs the service call.
    Submit {
        sequence: SequenceNumber,
        job: AnalysisJob,
        cancel: CancellationToken,
        /// The pending request this one superseded, if any.
        superseded: Option<SequenceNumber>,
    },
    /// A request was created directly in error state; the orchestrator opens
    /// the overlay to show it.
    Failed { sequence: SequenceNumber },
    /// A resolution passed the guard and was applied.
    Applied {
        sequence: SequenceNumber,
        success: bool,
    },
    /// A stale or cancelled resolution arrived and was discarded.
    Discarded { sequence: SequenceNumber },
    /// The pending request was cancelled by the user.
    Cancelled { sequence: SequenceNumber },
}

impl State {
    /// Handle a session message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start {
                lens,
                zone,
                zone_label,
                zone_data_type,
                zone_summary,
                snapshot,
            } => self.start(lens, zone, zone_label, zone_data_type, zone_summary, snapshot),
            Message::Fail {
                lens,
                zone,
                zone_label,
                zone_data_type,
                zone_summary,
                error,
            } => {
                let _ = self.supersede_pending();
                let sequence = self.allocate_sequence();
                let mut request = AnalysisRequest::pending(
                    sequence,
                    lens,
                    zone,
                    zone_label,
                    zone_data_type,
                    zone_summary,
                    WorkspaceSnapshot::default(),
                );
                request.apply_error(error);
                self.request = Some(request);
                self.cancel_token = None;
                Effect::Failed { sequence }
            }
            Message::Completed { sequence, outcome } => self.complete(sequence, outcome),
            Message::Cancel => {
                let Some(request) = self.request.as_mut() else {
                    return Effect::None;
                };
                if !request.is_pending() {
                    return Effect::None;
                }
                request.mark_cancelled();
                if let Some(token) = self.cancel_token.take() {
                    trigger_cancellation(&token);
                }
                Effect::Cancelled {
                    sequence: request.sequence,
                }
            }
            Message::Retry => {
                let Some(request) = self.request.as_ref() else {
                    return Effect::None;
                };
                if request.status != RequestStatus::Error {
                    return Effect::None;
                }
                // A SnapshotUnavailable failure never captured data; the
                // stored snapshot is a placeholder, not something the user
                // saw. Recapturing is the orchestrator's job.
                if request.error == Some(AnalysisError::SnapshotUnavailable) {
                    return Effect::None;
                }
                let lens = request.lens_id.clone();
                let zone = request.zone_id.clone();
                let label = request.zone_label.clone();
                let data_type = request.zone_data_type;
                let summary = request.zone_summary.clone();
                let snapshot = request.snapshot.clone();
                self.start(lens, zone, label, data_type, summary, snapshot)
            }
        }
    }

    fn start(
        &mut self,
        lens: LensId,
        zone: ZoneId,
        zone_label: String,
        zone_data_type: ZoneDataType,
        zone_summary: Option<String>,
        snapshot: WorkspaceSnapshot,
    ) -> Effect {
        let superseded = self.supersede_pending();

        let sequence = self.allocate_sequence();
        let request = AnalysisRequest::pending(
            sequence,
            lens,
            zone,
            zone_label,
            zone_data_type,
            zone_summary,
            snapshot,
        );
        let job = AnalysisJob {
            lens_id: request.lens_id.clone(),
            zone_label: request.zone_label.clone(),
            zone_data_type: request.zone_data_type,
            zone_summary: request.zone_summary.clone(),
            snapshot: request.snapshot.clone(),
        };
        let cancel = new_cancellation_token();
        self.request = Some(request);
        self.cancel_token = Some(cancel.clone());

        Effect::Submit {
            sequence,
            job,
            cancel,
            superseded,
        }
    }

    fn complete(
        &mut self,
        sequence: SequenceNumber,
        outcome: Result<AnalysisOutcome, AnalysisError>,
    ) -> Effect {
        let Some(request) = self.request.as_mut() else {
            return Effect::Discarded { sequence };
        };
        // The guard: only the latest, still-pending request may be resolved.
        if request.sequence != sequence || !request.is_pending() {
            return Effect::Discarded { sequence };
        }
        self.cancel_token = None;
        match outcome {
            Ok(result) => {
                request.apply_success(result);
                Effect::Applied {
                    sequence,
                    success: true,
                }
            }
            Err(AnalysisError::Cancelled) => {
                // The transport observed its token; treat like a cancel.
                request.mark_cancelled();
                Effect::Discarded { sequence }
            }
            Err(error) => {
                request.apply_error(error);
                Effect::Applied {
                    sequence,
                    success: false,
                }
            }
        }
    }

    /// Marks a pending request cancelled and flips its token.
    fn supersede_pending(&mut self) -> Option<SequenceNumber> {
        let superseded = match self.request.as_mut() {
            Some(request) if request.is_pending() => {
                request.mark_cancelled();
                Some(request.sequence)
            }
            _ => None,
        };
        if superseded.is_some() {
            if let Some(token) = self.cancel_token.take() {
                trigger_cancellation(&token);
            }
        }
        superseded
    }

    fn allocate_sequence(&mut self) -> SequenceNumber {
        let next = self
            .last_sequence
            .map_or(SequenceNumber::FIRST, SequenceNumber::next);
        self.last_sequence = Some(next);
        next
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// The latest request, regardless of status.
    #[must_use]
    pub fn request(&self) -> Option<&AnalysisRequest> {
        self.request.as_ref()
    }

    /// Whether a request is currently pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.request.as_ref().is_some_and(AnalysisRequest::is_pending)
    }

    /// The sequence number most recently handed out.
    #[must_use]
    pub fn last_sequence(&self) -> Option<SequenceNumber> {
        self.last_sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::analysis::is_cancelled;
    use crate::domain::zone::TaskItem;

    fn start_message(lens: &str, zone: &str) -> Message {
        Message::Start {
            lens: LensId::new(lens),
            zone: ZoneId::new(zone),
            zone_label: "Dashboard".into(),
            zone_data_type: ZoneDataType::Tasks,
            zone_summary: Some("2 open tasks".into()),
            snapshot: WorkspaceSnapshot {
                tasks: vec![TaskItem {
                    id: "t1".into(),
                    title: "Prune block A".into(),
                    done: false,
                    due: None,
                }],
                ..WorkspaceSnapshot::default()
            },
        }
    }

    fn submit_effect(effect: Effect) -> (SequenceNumber, AnalysisJob, CancellationToken) {
        match effect {
            Effect::Submit {
                sequence,
                job,
                cancel,
                ..
            } => (sequence, job, cancel),
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn start_creates_pending_request_with_frozen_snapshot() {
        let mut state = State::default();
        let (sequence, job, _) = submit_effect(state.handle(start_message("risk-scanner", "dash")));

        assert_eq!(sequence, SequenceNumber::FIRST);
        assert_eq!(job.snapshot.tasks.len(), 1);
        let request = state.request().expect("request exists");
        assert!(request.is_pending());
        assert_eq!(request.zone_id.as_str(), "dash");
        assert_eq!(request.snapshot.tasks.len(), 1);
    }

    #[test]
    fn sequence_numbers_increase_across_requests() {
        let mut state = State::default();
        let (first, _, _) = submit_effect(state.handle(start_message("risk-scanner", "dash")));
        let (second, _, _) = submit_effect(state.handle(start_message("risk-scanner", "vines")));
        assert!(second > first);
    }

    #[test]
    fn starting_supersedes_pending_request() {
        let mut state = State::default();
        let (first, _, token) = submit_effect(state.handle(start_message("risk-scanner", "dash")));

        let effect = state.handle(start_message("yield-forecast", "vines"));
        match effect {
            Effect::Submit { superseded, .. } => assert_eq!(superseded, Some(first)),
            other => panic!("expected Submit, got {other:?}"),
        }
        // The superseded call was asked to stop early.
        assert!(is_cancelled(&token));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut state = State::default();
        let (first, _, _) = submit_effect(state.handle(start_message("risk-scanner", "dash")));
        let (second, _, _) = submit_effect(state.handle(start_message("yield-forecast", "vines")));

        // Second request resolves first.
        let effect = state.handle(Message::Completed {
            sequence: second,
            outcome: Ok(AnalysisOutcome {
                content: "newer".into(),
            }),
        });
        assert!(matches!(effect, Effect::Applied { success: true, .. }));

        // First request's late response must not clobber the newer state.
        let effect = state.handle(Message::Completed {
            sequence: first,
            outcome: Ok(AnalysisOutcome {
                content: "older".into(),
            }),
        });
        assert!(matches!(effect, Effect::Discarded { .. }));

        let request = state.request().expect("request exists");
        assert_eq!(request.sequence, second);
        assert_eq!(
            request.result.as_ref().map(|o| o.content.as_str()),
            Some("newer")
        );
    }

    #[test]
    fn error_resolution_is_applied() {
        let mut state = State::default();
        let (sequence, _, _) = submit_effect(state.handle(start_message("risk-scanner", "dash")));

        let effect = state.handle(Message::Completed {
            sequence,
            outcome: Err(AnalysisError::Timeout),
        });
        assert!(matches!(effect, Effect::Applied { success: false, .. }));
        let request = state.request().expect("request exists");
        assert_eq!(request.status, RequestStatus::Error);
        assert_eq!(request.error, Some(AnalysisError::Timeout));
    }

    #[test]
    fn cancel_prevents_late_application() {
        let mut state = State::default();
        let (sequence, _, token) = submit_effect(state.handle(start_message("risk-scanner", "dash")));

        let effect = state.handle(Message::Cancel);
        assert!(matches!(effect, Effect::Cancelled { .. }));
        assert!(is_cancelled(&token));

        // Resolution arrives after the cancel: discarded even though the
        // sequence number matches.
        let effect = state.handle(Message::Completed {
            sequence,
            outcome: Ok(AnalysisOutcome {
                content: "late".into(),
            }),
        });
        assert!(matches!(effect, Effect::Discarded { .. }));
        assert_eq!(
            state.request().map(|r| r.status),
            Some(RequestStatus::Cancelled)
        );
    }

    #[test]
    fn cancel_without_pending_request_is_a_no_op() {
        let mut state = State::default();
        assert!(matches!(state.handle(Message::Cancel), Effect::None));
    }

    #[test]
    fn retry_reuses_original_snapshot_under_new_sequence() {
        let mut state = State::default();
        let (first, job, _) = submit_effect(state.handle(start_message("risk-scanner", "dash")));
        let original_snapshot = job.snapshot.clone();

        state.handle(Message::Completed {
            sequence: first,
            outcome: Err(AnalysisError::ServiceFailure("backend down".into())),
        });

        let (second, retry_job, _) = submit_effect(state.handle(Message::Retry));
        assert!(second > first);
        assert_eq!(retry_job.snapshot, original_snapshot);
        assert_eq!(retry_job.lens_id.as_str(), "risk-scanner");
        assert!(state.is_pending());
    }

    #[test]
    fn retry_is_a_no_op_unless_failed() {
        let mut state = State::default();
        assert!(matches!(state.handle(Message::Retry), Effect::None));

        let (sequence, _, _) = submit_effect(state.handle(start_message("risk-scanner", "dash")));
        // Still pending: no retry.
        assert!(matches!(state.handle(Message::Retry), Effect::None));

        state.handle(Message::Completed {
            sequence,
            outcome: Ok(AnalysisOutcome { content: "ok".into() }),
        });
        // Succeeded: no retry.
        assert!(matches!(state.handle(Message::Retry), Effect::None));
    }

    #[test]
    fn fail_creates_visible_error_request() {
        let mut state = State::default();
        let effect = state.handle(Message::Fail {
            lens: LensId::new("risk-scanner"),
            zone: ZoneId::new("git"),
            zone_label: "Repository".into(),
            zone_data_type: ZoneDataType::Git,
            zone_summary: Some("3 branches".into()),
            error: AnalysisError::SnapshotUnavailable,
        });
        assert!(matches!(effect, Effect::Failed { .. }));

        let request = state.request().expect("request exists");
        assert_eq!(request.status, RequestStatus::Error);
        assert_eq!(request.error, Some(AnalysisError::SnapshotUnavailable));
        assert_eq!(request.zone_summary.as_deref(), Some("3 branches"));
    }

    #[test]
    fn retry_refuses_when_no_snapshot_was_captured() {
        let mut state = State::default();
        state.handle(Message::Fail {
            lens: LensId::new("risk-scanner"),
            zone: ZoneId::new("git"),
            zone_label: "Repository".into(),
            zone_data_type: ZoneDataType::Git,
            zone_summary: None,
            error: AnalysisError::SnapshotUnavailable,
        });

        // The placeholder snapshot must never reach the backend.
        assert!(matches!(state.handle(Message::Retry), Effect::None));
        let request = state.request().expect("request exists");
        assert_eq!(request.status, RequestStatus::Error);
        assert_eq!(request.error, Some(AnalysisError::SnapshotUnavailable));
    }

    #[test]
    fn transport_observed_cancel_is_discarded_silently() {
        let mut state = State::default();
        let (sequence, _, _) = submit_effect(state.handle(start_message("risk-scanner", "dash")));

        let effect = state.handle(Message::Completed {
            sequence,
            outcome: Err(AnalysisError::Cancelled),
        });
        assert!(matches!(effect, Effect::Discarded { .. }));
        assert_eq!(
            state.request().map(|r| r.status),
            Some(RequestStatus::Cancelled)
        );
    }
}
