// SPDX-License-Identifier: MPL-2.0
//! The lens catalog: an immutable, ordered set of lenses fixed at startup.

use crate::domain::lens::{Lens, LensId};

/// Ordered collection of the lenses available in this process.
///
/// The catalog is built once when the workspace is constructed and never
/// changes afterwards. Iteration order is the order the host supplied,
/// which is also the palette display order.
#[derive(Debug, Clone, Default)]
pub struct LensCatalog {
    lenses: Vec<Lens>,
}

impl LensCatalog {
    /// Builds a catalog from the supplied lenses.
    ///
    /// A duplicate id keeps the first occurrence; later duplicates are
    /// dropped so lookups stay unambiguous.
    #[must_use]
    pub fn new(lenses: Vec<Lens>) -> Self {
        let mut unique: Vec<Lens> = Vec::with_capacity(lenses.len());
        for lens in lenses {
            if !unique.iter().any(|l| l.id() == lens.id()) {
                unique.push(lens);
            }
        }
        Self { lenses: unique }
    }

    #[must_use]
    pub fn contains(&self, id: &LensId) -> bool {
        self.lenses.iter().any(|l| l.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: &LensId) -> Option<&Lens> {
        self.lenses.iter().find(|l| l.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lens> {
        self.lenses.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LensCatalog {
        LensCatalog::new(vec![
            Lens::new("risk-scanner", "Risk Scanner"),
            Lens::new("yield-forecast", "Yield Forecast"),
        ])
    }

    #[test]
    fn lookup_by_id() {
        let catalog = catalog();
        assert!(catalog.contains(&LensId::new("risk-scanner")));
        assert!(!catalog.contains(&LensId::new("unknown")));
        assert_eq!(
            catalog
                .get(&LensId::new("yield-forecast"))
                .map(|l| l.display_name()),
            Some("Yield Forecast")
        );
    }

    #[test]
    fn iteration_preserves_supplied_order() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.iter().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, vec!["risk-scanner", "yield-forecast"]);
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let catalog = LensCatalog::new(vec![
            Lens::new("risk-scanner", "First"),
            Lens::new("risk-scanner", "Second"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog
                .get(&LensId::new("risk-scanner"))
                .map(|l| l.display_name()),
            Some("First")
        );
    }
}
