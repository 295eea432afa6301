// SPDX-License-Identifier: MPL-2.0
//! Per-zone view adapter.
//!
//! A `ZoneAdapter` is the small handle a page view keeps for each of its
//! drop regions. It turns pointer events into workspace messages and answers
//! the highlight query, so view code never touches the drag state directly.

use crate::domain::zone::ZoneId;
use crate::ui::lens::component::{LensWorkspace, Message};

#[derive(Debug, Clone)]
pub struct ZoneAdapter {
    zone: ZoneId,
}

impl ZoneAdapter {
    #[must_use]
    pub fn new(zone: impl Into<ZoneId>) -> Self {
        Self { zone: zone.into() }
    }

    #[must_use]
    pub fn zone(&self) -> &ZoneId {
        &self.zone
    }

    /// Message for the pointer entering this zone.
    #[must_use]
    pub fn on_enter(&self) -> Message {
        Message::ZoneEntered(self.zone.clone())
    }

    /// Message for the pointer leaving this zone.
    #[must_use]
    pub fn on_leave(&self) -> Message {
        Message::ZoneLeft(self.zone.clone())
    }

    /// Message for a lens released over this zone.
    #[must_use]
    pub fn on_drop(&self) -> Message {
        Message::DroppedOnZone(self.zone.clone())
    }

    /// Whether this zone should render its drop highlight.
    #[must_use]
    pub fn is_highlighted(&self, workspace: &LensWorkspace) -> bool {
        workspace.is_highlighted(&self.zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::analysis::{AnalysisJob, AnalysisService, CancellationToken, ServiceError};
    use crate::catalog::LensCatalog;
    use crate::config::Config;
    use crate::domain::analysis::AnalysisOutcome;
    use crate::domain::lens::{Lens, LensId};
    use futures_util::future::BoxFuture;
    use std::sync::Arc;

    struct InertService;

    impl AnalysisService for InertService {
        fn submit(
            &self,
            _job: AnalysisJob,
            _cancel: CancellationToken,
        ) -> BoxFuture<'static, Result<AnalysisOutcome, ServiceError>> {
            Box::pin(async { Err(ServiceError::Cancelled) })
        }
    }

    #[test]
    fn adapter_messages_target_its_zone() {
        let adapter = ZoneAdapter::new("dash");
        assert!(matches!(adapter.on_enter(), Message::ZoneEntered(z) if z.as_str() == "dash"));
        assert!(matches!(adapter.on_leave(), Message::ZoneLeft(z) if z.as_str() == "dash"));
        assert!(matches!(adapter.on_drop(), Message::DroppedOnZone(z) if z.as_str() == "dash"));
    }

    #[test]
    fn highlight_tracks_the_workspace_hover() {
        let catalog = LensCatalog::new(vec![Lens::new("risk-scanner", "Risk Scanner")]);
        let mut workspace = LensWorkspace::new(catalog, Arc::new(InertService), &Config::default());
        let adapter = ZoneAdapter::new("dash");

        assert!(!adapter.is_highlighted(&workspace));
        let _ = workspace.update(Message::BeginDrag(LensId::new("risk-scanner")));
        let _ = workspace.update(adapter.on_enter());
        assert!(adapter.is_highlighted(&workspace));
        let _ = workspace.update(adapter.on_leave());
        assert!(!adapter.is_highlighted(&workspace));
    }
}
