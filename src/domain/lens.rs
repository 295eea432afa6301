// SPDX-License-Identifier: MPL-2.0
//! Lens descriptors.
//!
//! A lens is a named analytical capability the user can drag onto a drop
//! zone. Lenses are defined once at startup and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a lens, unique within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LensId(String);

impl LensId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LensId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LensId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An immutable lens descriptor.
///
/// The icon reference is a symbolic name resolved by the hosting view; this
/// crate never touches icon assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lens {
    id: LensId,
    display_name: String,
    icon_ref: String,
    description: String,
}

impl Lens {
    /// Creates a lens with an empty icon reference and description.
    #[must_use]
    pub fn new(id: impl Into<LensId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            icon_ref: String::new(),
            description: String::new(),
        }
    }

    /// Sets the symbolic icon reference.
    #[must_use]
    pub fn with_icon(mut self, icon_ref: impl Into<String>) -> Self {
        self.icon_ref = icon_ref.into();
        self
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> &LensId {
        &self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn icon_ref(&self) -> &str {
        &self.icon_ref
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl From<String> for LensId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lens_id_display_matches_inner() {
        let id = LensId::new("risk-scanner");
        assert_eq!(id.to_string(), "risk-scanner");
        assert_eq!(id.as_str(), "risk-scanner");
    }

    #[test]
    fn builder_fills_optional_fields() {
        let lens = Lens::new("yield-forecast", "Yield Forecast")
            .with_icon("chart-line")
            .with_description("Projects harvest volume from vine data");

        assert_eq!(lens.id().as_str(), "yield-forecast");
        assert_eq!(lens.display_name(), "Yield Forecast");
        assert_eq!(lens.icon_ref(), "chart-line");
        assert!(lens.description().contains("harvest"));
    }

    #[test]
    fn defaults_are_empty_strings() {
        let lens = Lens::new("risk-scanner", "Risk Scanner");
        assert_eq!(lens.icon_ref(), "");
        assert_eq!(lens.description(), "");
    }
}
