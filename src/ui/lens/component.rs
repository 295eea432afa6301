// SPDX-License-Identifier: MPL-2.0
//! Lens workspace orchestrator.
//!
//! `LensWorkspace` owns the catalog, the zone registry, the drag state, the
//! analysis session, the overlay, and the activity log, and wires their
//! effects together. Hosting views talk to it exclusively through
//! [`Message`] values and the read-only accessors; all mutation happens in
//! [`LensWorkspace::update`] on the UI event loop.

use crate::application::port::analysis::{AnalysisJob, AnalysisService, CancellationToken};
use crate::catalog::LensCatalog;
use crate::config::Config;
use crate::diagnostics::{ActivityLog, LensEvent};
use crate::domain::analysis::{AnalysisOutcome, AnalysisRequest, RequestStatus, SequenceNumber};
use crate::domain::lens::LensId;
use crate::domain::zone::ZoneId;
use crate::error::AnalysisError;
use crate::registry::{DropZone, ZoneRegistry};
use crate::ui::lens::clusters::analysis_session;
use crate::ui::lens::subcomponents::{drag, overlay};
use iced::Task;
use std::sync::Arc;
use std::time::Duration;

/// Messages consumed by [`LensWorkspace::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Start dragging a lens from the palette.
    BeginDrag(LensId),
    /// The pointer entered a zone during a drag.
    ZoneEntered(ZoneId),
    /// The pointer left a zone during a drag.
    ZoneLeft(ZoneId),
    /// The lens was released over a zone.
    DroppedOnZone(ZoneId),
    /// The lens was released outside any zone, or the drag was aborted.
    CancelDrag,
    /// A submitted analysis call resolved.
    AnalysisCompleted {
        sequence: SequenceNumber,
        outcome: Result<AnalysisOutcome, AnalysisError>,
    },
    /// Close the overlay. Does not cancel a pending request.
    CloseOverlay,
    /// Cancel the pending request (typically sent together with
    /// `CloseOverlay` when the user dismisses a loading overlay).
    CancelAnalysis,
    /// Re-submit the failed request shown in the overlay.
    RetryAnalysis,
}

/// Observable overlay state, derived for the hosting view each frame.
#[derive(Debug, Clone, Default)]
pub struct OverlayView {
    pub is_open: bool,
    pub lens_name: Option<String>,
    pub zone_label: Option<String>,
    pub status: Option<RequestStatus>,
    pub result: Option<AnalysisOutcome>,
    /// i18n key of the error to display, if the request failed.
    pub error_key: Option<&'static str>,
    pub can_retry: bool,
}

/// The lens drag-target coordination component.
pub struct LensWorkspace {
    catalog: LensCatalog,
    registry: ZoneRegistry,
    drag: drag::State,
    session: analysis_session::State,
    overlay: overlay::State,
    activity: ActivityLog,
    service: Arc<dyn AnalysisService>,
    analysis_timeout: Duration,
}

impl LensWorkspace {
    #[must_use]
    pub fn new(catalog: LensCatalog, service: Arc<dyn AnalysisService>, config: &Config) -> Self {
        Self {
            catalog,
            registry: ZoneRegistry::new(),
            drag: drag::State::default(),
            session: analysis_session::State::default(),
            overlay: overlay::State::default(),
            activity: ActivityLog::default(),
            service,
            analysis_timeout: config.analysis_timeout(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ZONE LIFECYCLE (called by views on mount/unmount)
    // ═══════════════════════════════════════════════════════════════════════

    /// Registers a zone. Idempotent upsert by id: a re-rendering page
    /// re-registers the same id to refresh its accessors.
    pub fn register_zone(&mut self, zone: DropZone) {
        self.registry.register(zone);
    }

    /// Unregisters a zone. Clears the hover highlight when the removed zone
    /// was the hovered one.
    pub fn unregister_zone(&mut self, id: &ZoneId) -> bool {
        let removed = self.registry.unregister(id);
        if removed {
            self.drag.handle(drag::Message::ZoneUnregistered(id.clone()));
        }
        removed
    }

    // ═══════════════════════════════════════════════════════════════════════
    // UPDATE
    // ═══════════════════════════════════════════════════════════════════════

    /// Handle a workspace message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BeginDrag(lens) => {
                if !self.catalog.contains(&lens) {
                    // Defensive: the palette only offers catalog lenses.
                    self.activity.record(LensEvent::DragRejected {
                        lens: lens.to_string(),
                        reason: "not in catalog".to_string(),
                    });
                    return Task::none();
                }
                match self.drag.handle(drag::Message::Begin(lens.clone())) {
                    drag::Effect::Started => {
                        self.activity.record(LensEvent::DragStarted {
                            lens: lens.to_string(),
                        });
                    }
                    drag::Effect::Rejected => {
                        self.activity.record(LensEvent::DragRejected {
                            lens: lens.to_string(),
                            reason: "drag already active".to_string(),
                        });
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::ZoneEntered(zone) => {
                self.drag.handle(drag::Message::ZoneEntered(zone));
                Task::none()
            }
            Message::ZoneLeft(zone) => {
                self.drag.handle(drag::Message::ZoneLeft(zone));
                Task::none()
            }
            Message::DroppedOnZone(zone) => {
                match self.drag.handle(drag::Message::Drop(zone)) {
                    drag::Effect::Dropped { lens, zone } => self.start_analysis(lens, zone),
                    _ => Task::none(),
                }
            }
            Message::CancelDrag => {
                if let drag::Effect::Cancelled = self.drag.handle(drag::Message::Cancel) {
                    self.activity.record(LensEvent::DragCancelled);
                }
                Task::none()
            }
            Message::AnalysisCompleted { sequence, outcome } => {
                match self
                    .session
                    .handle(analysis_session::Message::Completed { sequence, outcome })
                {
                    analysis_session::Effect::Applied { sequence, success } => {
                        self.activity
                            .record(LensEvent::AnalysisApplied { sequence, success });
                    }
                    analysis_session::Effect::Discarded { sequence } => {
                        self.activity.record(LensEvent::AnalysisDiscarded { sequence });
                    }
                    _ => {}
                }
                // The overlay is never touched here: a resolution must not
                // reopen a closed overlay, and an open one shows the request
                // state directly.
                Task::none()
            }
            Message::CloseOverlay => {
                self.overlay.handle(overlay::Message::Close);
                Task::none()
            }
            Message::CancelAnalysis => {
                if let analysis_session::Effect::Cancelled { sequence } =
                    self.session.handle(analysis_session::Message::Cancel)
                {
                    self.activity.record(LensEvent::AnalysisCancelled { sequence });
                }
                Task::none()
            }
            Message::RetryAnalysis => self.retry_analysis(),
        }
    }

    /// Resolves the drop target and starts (or fails) a new request.
    fn start_analysis(&mut self, lens: LensId, zone_id: ZoneId) -> Task<Message> {
        let Some(zone) = self.registry.get(&zone_id) else {
            // The view navigated away mid-drag. The coordinator is already
            // back to idle; no request, no overlay.
            self.activity.record(LensEvent::DropOnMissingZone {
                zone: zone_id.to_string(),
            });
            return Task::none();
        };

        let zone_label = zone.label().to_string();
        let zone_data_type = zone.data_type();
        let zone_summary = zone.summary();

        let effect = match zone.capture() {
            Ok(snapshot) => self.session.handle(analysis_session::Message::Start {
                lens,
                zone: zone_id,
                zone_label,
                zone_data_type,
                zone_summary,
                snapshot,
            }),
            Err(error) => self.session.handle(analysis_session::Message::Fail {
                lens,
                zone: zone_id,
                zone_label,
                zone_data_type,
                zone_summary,
                error,
            }),
        };
        self.run_session_effect(effect)
    }

    fn retry_analysis(&mut self) -> Task<Message> {
        // A zone registered without an accessor never produced a snapshot,
        // so there is nothing original to re-submit. If the zone has been
        // re-registered with an accessor since, re-drive the whole drop.
        let recapture = self.session.request().and_then(|request| {
            if request.status == RequestStatus::Error
                && request.error == Some(AnalysisError::SnapshotUnavailable)
                && self.registry.contains(&request.zone_id)
            {
                Some((request.lens_id.clone(), request.zone_id.clone()))
            } else {
                None
            }
        });
        if let Some((lens, zone)) = recapture {
            return self.start_analysis(lens, zone);
        }

        let effect = self.session.handle(analysis_session::Message::Retry);
        self.run_session_effect(effect)
    }

    fn run_session_effect(&mut self, effect: analysis_session::Effect) -> Task<Message> {
        match effect {
            analysis_session::Effect::Submit {
                sequence,
                job,
                cancel,
                superseded: _,
            } => {
                self.activity.record(LensEvent::AnalysisSubmitted {
                    sequence,
                    lens: job.lens_id.to_string(),
                    zone: job.zone_label.clone(),
                });
                self.overlay.handle(overlay::Message::Show(sequence));
                self.perform_submit(sequence, job, cancel)
            }
            analysis_session::Effect::Failed { sequence } => {
                let error = self
                    .session
                    .request()
                    .and_then(|r| r.error.clone())
                    .map_or_else(String::new, |e| e.to_string());
                self.activity
                    .record(LensEvent::AnalysisFailedEarly { sequence, error });
                self.overlay.handle(overlay::Message::Show(sequence));
                Task::none()
            }
            _ => Task::none(),
        }
    }

    /// Runs the service call with the configured timeout bound.
    fn perform_submit(
        &self,
        sequence: SequenceNumber,
        job: AnalysisJob,
        cancel: CancellationToken,
    ) -> Task<Message> {
        let future = submit_with_timeout(
            Arc::clone(&self.service),
            job,
            cancel,
            self.analysis_timeout,
        );
        Task::perform(future, move |outcome| Message::AnalysisCompleted {
            sequence,
            outcome,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS (read-only observable surface)
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn catalog(&self) -> &LensCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// Whether the given zone should render its drop highlight.
    #[must_use]
    pub fn is_highlighted(&self, zone: &ZoneId) -> bool {
        self.drag.is_highlighted(zone)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The lens being dragged, if any.
    #[must_use]
    pub fn active_lens(&self) -> Option<&LensId> {
        self.drag.active_lens()
    }

    /// The latest analysis request, regardless of overlay visibility.
    #[must_use]
    pub fn current_request(&self) -> Option<&AnalysisRequest> {
        self.session.request()
    }

    #[must_use]
    pub fn activity_log(&self) -> &ActivityLog {
        &self.activity
    }

    /// Derives the overlay state the hosting view renders.
    #[must_use]
    pub fn overlay_view(&self) -> OverlayView {
        if !self.overlay.is_open() {
            return OverlayView::default();
        }
        let request = self
            .overlay
            .shown()
            .and_then(|sequence| {
                self.session
                    .request()
                    .filter(|request| request.sequence == sequence)
            });
        let Some(request) = request else {
            // Attached request no longer tracked; render an empty open shell.
            return OverlayView {
                is_open: true,
                ..OverlayView::default()
            };
        };

        let lens_name = Some(
            self.catalog
                .get(&request.lens_id)
                .map_or_else(|| request.lens_id.to_string(), |l| l.display_name().to_string()),
        );
        let error = request.error.as_ref().filter(|e| e.is_user_visible());
        OverlayView {
            is_open: true,
            lens_name,
            zone_label: Some(request.zone_label.clone()),
            status: Some(request.status),
            result: request.result.clone(),
            error_key: error.map(AnalysisError::i18n_key),
            can_retry: error.is_some_and(AnalysisError::is_retryable),
        }
    }
}

/// Bounds one service call. Expiry maps to the timeout error; unbounded
/// waits are never allowed.
async fn submit_with_timeout(
    service: Arc<dyn AnalysisService>,
    job: AnalysisJob,
    cancel: CancellationToken,
    timeout: Duration,
) -> Result<AnalysisOutcome, AnalysisError> {
    match tokio::time::timeout(timeout, service.submit(job, cancel)).await {
        Ok(Ok(outcome)) => Ok(outcome),
        Ok(Err(err)) => Err(AnalysisError::from(err)),
        Err(_) => Err(AnalysisError::Timeout),
    }
}
