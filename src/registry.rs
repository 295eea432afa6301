// SPDX-License-Identifier: MPL-2.0
//! The drop zone registry.
//!
//! A single shared map from zone id to zone descriptor, mutated only by
//! view mount/unmount. All mutation happens on the UI event loop, so no
//! locking is needed; sequential handler execution is the synchronization.
//!
//! No geometric lookup is performed here: each region reports its own
//! pointer enter/leave by id, because layout belongs to the view.

use crate::domain::zone::{WorkspaceSnapshot, ZoneDataType, ZoneId};
use crate::error::AnalysisError;
use std::collections::HashMap;
use std::fmt;

/// Accessor returning the zone's current data. Called exactly once, at drop
/// time, to freeze the snapshot.
pub type SnapshotFn = Box<dyn Fn() -> WorkspaceSnapshot + Send>;

/// Accessor returning a short descriptive string for the zone's content.
pub type SummaryFn = Box<dyn Fn() -> String + Send>;

/// Descriptor of a mounted drop zone.
///
/// The registry owns the descriptor; re-registering the same id replaces it
/// wholesale, which is how a re-rendered page refreshes its accessors.
pub struct DropZone {
    id: ZoneId,
    label: String,
    page_id: String,
    data_type: ZoneDataType,
    snapshot_fn: Option<SnapshotFn>,
    summary_fn: Option<SummaryFn>,
}

impl DropZone {
    #[must_use]
    pub fn new(
        id: impl Into<ZoneId>,
        label: impl Into<String>,
        page_id: impl Into<String>,
        data_type: ZoneDataType,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            page_id: page_id.into(),
            data_type,
            snapshot_fn: None,
            summary_fn: None,
        }
    }

    /// Attaches the data accessor used to freeze snapshots at drop time.
    #[must_use]
    pub fn with_snapshot(mut self, f: impl Fn() -> WorkspaceSnapshot + Send + 'static) -> Self {
        self.snapshot_fn = Some(Box::new(f));
        self
    }

    /// Attaches the summary accessor.
    #[must_use]
    pub fn with_summary(mut self, f: impl Fn() -> String + Send + 'static) -> Self {
        self.summary_fn = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    #[must_use]
    pub fn data_type(&self) -> ZoneDataType {
        self.data_type
    }

    /// Captures the zone's data as a frozen snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::SnapshotUnavailable`] when the zone was
    /// registered without a data accessor.
    pub fn capture(&self) -> Result<WorkspaceSnapshot, AnalysisError> {
        match &self.snapshot_fn {
            Some(f) => Ok(f()),
            None => Err(AnalysisError::SnapshotUnavailable),
        }
    }

    /// Reads the zone's summary, if an accessor was provided.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.summary_fn.as_ref().map(|f| f())
    }
}

impl fmt::Debug for DropZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropZone")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("page_id", &self.page_id)
            .field("data_type", &self.data_type)
            .field("has_snapshot_fn", &self.snapshot_fn.is_some())
            .field("has_summary_fn", &self.summary_fn.is_some())
            .finish()
    }
}

/// The shared zone map. `register` is an idempotent upsert keyed by id.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    zones: HashMap<ZoneId, DropZone>,
}

impl ZoneRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the descriptor for `zone.id()`.
    pub fn register(&mut self, zone: DropZone) {
        self.zones.insert(zone.id().clone(), zone);
    }

    /// Removes the descriptor. Returns whether an entry existed.
    ///
    /// Hover cleanup for the removed zone is the orchestrator's job; the
    /// registry itself stays a pure map.
    pub fn unregister(&mut self, id: &ZoneId) -> bool {
        self.zones.remove(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: &ZoneId) -> Option<&DropZone> {
        self.zones.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ZoneId) -> bool {
        self.zones.contains_key(id)
    }

    /// Snapshot of the currently registered zones. Order is unspecified.
    pub fn list(&self) -> impl Iterator<Item = &DropZone> {
        self.zones.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
