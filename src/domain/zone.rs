// SPDX-License-Identifier: MPL-2.0
//! Drop zone identity and workspace snapshots.
//!
//! A drop zone is a screen region owned by a hosting view. The coordination
//! layer only sees its stable id, a label, the kind of data it exposes, and
//! a point-in-time snapshot captured at drop time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a logical screen region.
///
/// Must survive re-renders of the same view; a page re-render re-registers
/// the same id with fresh accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ZoneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Kind of data a drop zone exposes for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneDataType {
    Tasks,
    Vines,
    Grapes,
    Project,
    Git,
}

impl ZoneDataType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneDataType::Tasks => "tasks",
            ZoneDataType::Vines => "vines",
            ZoneDataType::Grapes => "grapes",
            ZoneDataType::Project => "project",
            ZoneDataType::Git => "git",
        }
    }
}

impl fmt::Display for ZoneDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vineyard task as exposed by a zone's data accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
}

/// A planted vine row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VineRow {
    pub id: String,
    pub variety: String,
    pub planted_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_note: Option<String>,
}

/// A harvested grape lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrapeLot {
    pub id: String,
    pub variety: String,
    pub mass_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harvested_at: Option<DateTime<Utc>>,
}

/// High-level project information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An immutable, point-in-time capture of a zone's data.
///
/// Once captured at drop time the snapshot is never re-read or mutated;
/// later changes to the underlying data do not affect an in-flight analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    #[serde(default)]
    pub vines: Vec<VineRow>,
    #[serde(default)]
    pub grapes: Vec<GrapeLot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectInfo>,
}

impl WorkspaceSnapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
            && self.vines.is_empty()
            && self.grapes.is_empty()
            && self.project.is_none()
    }
}
