// SPDX-License-Identifier: MPL-2.0
//! Analysis service port definition.
//!
//! This module defines the [`AnalysisService`] trait for the external
//! analysis backend. The backend is a black box: it receives the lens id,
//! the zone's label and data type, and the frozen snapshot, and resolves to
//! a text result or an error.
//!
//! # Design Notes
//!
//! - Completion delivery happens via messages, not in the trait
//! - Cancellation is cooperative: the token only asks the transport to stop
//!   early; correctness never depends on it
//! - The trait is `Send + Sync` so submissions can run on the executor

use crate::domain::analysis::AnalysisOutcome;
use crate::domain::lens::LensId;
use crate::domain::zone::{WorkspaceSnapshot, ZoneDataType};
use crate::error::AnalysisError;
use futures_util::future::BoxFuture;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation token shared between the session and an in-flight call.
pub type CancellationToken = Arc<AtomicBool>;

/// Creates a fresh, untriggered cancellation token.
#[must_use]
pub fn new_cancellation_token() -> CancellationToken {
    Arc::new(AtomicBool::new(false))
}

/// Checks if the cancellation token has been triggered.
#[inline]
#[must_use]
pub fn is_cancelled(token: &CancellationToken) -> bool {
    token.load(Ordering::SeqCst)
}

/// Triggers the cancellation token.
pub fn trigger_cancellation(token: &CancellationToken) {
    token.store(true, Ordering::SeqCst);
}

/// Everything the backend receives for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisJob {
    pub lens_id: LensId,
    pub zone_label: String,
    pub zone_data_type: ZoneDataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_summary: Option<String>,
    pub snapshot: WorkspaceSnapshot,
}

/// Errors an analysis backend can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The backend rejected the request (bad status, malformed reply).
    Rejected(String),

    /// The request never reached the backend.
    Transport(String),

    /// The call observed its cancellation token and stopped early.
    Cancelled,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Rejected(msg) => write!(f, "Service rejected request: {msg}"),
            ServiceError::Transport(msg) => write!(f, "Transport failure: {msg}"),
            ServiceError::Cancelled => write!(f, "Call cancelled"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ServiceError> for AnalysisError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Cancelled => AnalysisError::Cancelled,
            other => AnalysisError::ServiceFailure(other.to_string()),
        }
    }
}

/// Port for the external analysis backend.
///
/// Implementations must be `Send + Sync`; the returned future is driven by
/// the application executor and may resolve out of submission order.
pub trait AnalysisService: Send + Sync {
    /// Submits one analysis job.
    ///
    /// The `cancel` token may be flipped at any time by the session when the
    /// request is superseded or user-cancelled. Implementations should stop
    /// early when they can, but are free to ignore it; the session discards
    /// stale results regardless.
    fn submit(
        &self,
        job: AnalysisJob,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<AnalysisOutcome, ServiceError>>;
}
