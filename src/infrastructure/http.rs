// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the analysis service port.
//!
//! Posts the job as JSON to a single endpoint and reads back a `content`
//! string. The cancellation token is checked before the request goes out and
//! again before the body is decoded; an in-flight transfer is not aborted.

use crate::application::port::analysis::{
    is_cancelled, AnalysisJob, AnalysisService, CancellationToken, ServiceError,
};
use crate::domain::analysis::AnalysisOutcome;
use futures_util::future::BoxFuture;
use serde::Deserialize;

const USER_AGENT: &str = concat!("VineLens/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    content: String,
}

/// [`AnalysisService`] backed by a JSON-over-HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnalysisService {
    /// Builds the adapter with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] when the TLS backend cannot be
    /// initialized.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnalysisService for HttpAnalysisService {
    fn submit(
        &self,
        job: AnalysisJob,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<AnalysisOutcome, ServiceError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            if is_cancelled(&cancel) {
                return Err(ServiceError::Cancelled);
            }

            let response = client
                .post(&endpoint)
                .json(&job)
                .send()
                .await
                .map_err(|e| ServiceError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ServiceError::Rejected(format!("HTTP {status}")));
            }

            if is_cancelled(&cancel) {
                return Err(ServiceError::Cancelled);
            }

            let body: AnalysisResponse = response
                .json()
                .await
                .map_err(|e| ServiceError::Rejected(format!("malformed reply: {e}")))?;

            Ok(AnalysisOutcome {
                content: body.content,
            })
        })
    }
}
