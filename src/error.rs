// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Analysis(AnalysisError),
}

/// Specific error types for the lens analysis flow.
/// Used to provide user-friendly, localized error messages in the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The drop target vanished between hover and drop (view navigated away).
    ZoneNotFound(String),

    /// A drag was started with a lens id absent from the catalog.
    UnknownLens(String),

    /// The zone was registered without a data accessor.
    SnapshotUnavailable,

    /// The analysis backend rejected the request.
    ServiceFailure(String),

    /// No response arrived within the configured bound.
    Timeout,

    /// The request was cancelled or superseded; never shown to the user.
    Cancelled,
}

impl AnalysisError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AnalysisError::ZoneNotFound(_) => "error-analysis-zone-not-found",
            AnalysisError::UnknownLens(_) => "error-analysis-unknown-lens",
            AnalysisError::SnapshotUnavailable => "error-analysis-snapshot-unavailable",
            AnalysisError::ServiceFailure(_) => "error-analysis-service-failure",
            AnalysisError::Timeout => "error-analysis-timeout",
            AnalysisError::Cancelled => "error-analysis-cancelled",
        }
    }

    /// Whether this outcome may be surfaced in the overlay.
    /// Cancelled/superseded requests are silently discarded.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, AnalysisError::Cancelled)
    }

    /// Whether the overlay should offer a retry affordance for this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AnalysisError::SnapshotUnavailable
                | AnalysisError::ServiceFailure(_)
                | AnalysisError::Timeout
        )
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::ZoneNotFound(id) => write!(f, "Drop zone not found: {}", id),
            AnalysisError::UnknownLens(id) => write!(f, "Unknown lens: {}", id),
            AnalysisError::SnapshotUnavailable => write!(f, "Zone has no data accessor"),
            AnalysisError::ServiceFailure(msg) => write!(f, "Analysis service failed: {}", msg),
            AnalysisError::Timeout => write!(f, "Analysis timed out"),
            AnalysisError::Cancelled => write!(f, "Analysis cancelled"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Analysis(e) => write!(f, "Analysis Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for AnalysisError {}

impl From<AnalysisError> for Error {
    fn from(err: AnalysisError) -> Self {
        Error::Analysis(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
