//! Parsed glyph-grid documents.
//!
//! A document is built in full by one parse call and is read-only
//! afterwards. Glyphs live in a single name-keyed map for every dialect;
//! single-glyph dialects store their glyph under [`SOLE_GLYPH`] so that
//! lookups never special-case the dialect.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{GridError, Result};

use super::glyph::SOLE_GLYPH;
use super::{Dialect, Glyph, GlyphRef, GridSpec, Placement};

/// A fully parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Dialect the document was read from (and is written back in).
    pub dialect: Dialect,

    /// Declared grid size.
    pub grid: GridSpec,

    /// Glyphs keyed by name.
    pub glyphs: BTreeMap<String, Glyph>,

    /// Placements in document order.
    pub placements: Vec<Placement>,
}

impl ParsedDocument {
    pub fn new(dialect: Dialect, grid: GridSpec) -> Self {
        Self {
            dialect,
            grid,
            glyphs: BTreeMap::new(),
            placements: Vec::new(),
        }
    }

    /// Add a glyph, keyed by its name. Returns false if the name was taken.
    pub fn add_glyph(&mut self, glyph: Glyph) -> bool {
        if self.glyphs.contains_key(&glyph.name) {
            return false;
        }
        self.glyphs.insert(glyph.name.clone(), glyph);
        true
    }

    pub fn add_placement(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Resolve a glyph reference.
    pub fn glyph(&self, glyph_ref: &GlyphRef) -> Option<&Glyph> {
        self.glyphs.get(glyph_ref.key())
    }

    /// The unnamed glyph of a single-glyph document, if present.
    pub fn sole_glyph(&self) -> Option<&Glyph> {
        self.glyphs.get(SOLE_GLYPH)
    }

    /// Names of glyphs referenced by at least one placement.
    pub fn referenced_names(&self) -> BTreeSet<&str> {
        self.placements.iter().map(|p| p.glyph.key()).collect()
    }

    /// Number of placements per glyph name.
    pub fn placement_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for placement in &self.placements {
            *counts.entry(placement.glyph.key()).or_insert(0) += 1;
        }
        counts
    }

    /// Re-express the document in another dialect.
    ///
    /// Converting to `named` gives the sole glyph `glyph_name`. Converting to
    /// `cell` or `unit` requires exactly one glyph; its name is dropped.
    /// Origins are converted with [`crate::types::Origin::to_cell`] and
    /// [`crate::types::Origin::to_unit`], so unit-to-cell conversion rounds.
    pub fn convert(&self, target: Dialect, glyph_name: &str) -> Result<ParsedDocument> {
        let mut converted = ParsedDocument::new(target, self.grid);

        if target.is_single_glyph() {
            let glyph = match self.glyphs.values().collect::<Vec<_>>().as_slice() {
                [only] => (*only).clone(),
                others => {
                    return Err(GridError::Convert {
                        message: format!(
                            "the {} dialect holds exactly one glyph, document has {}",
                            target,
                            others.len()
                        ),
                        help: Some("Only single-glyph documents convert to cell or unit".to_string()),
                    })
                }
            };
            converted.add_glyph(glyph.renamed(SOLE_GLYPH));
        } else {
            for glyph in self.glyphs.values() {
                let glyph = if glyph.is_sole() {
                    if glyph_name.is_empty() {
                        return Err(GridError::Convert {
                            message: "the named dialect needs a non-empty glyph name".to_string(),
                            help: Some("Pass --name <glyph>".to_string()),
                        });
                    }
                    glyph.clone().renamed(glyph_name)
                } else {
                    glyph.clone()
                };
                converted.add_glyph(glyph);
            }
        }

        for placement in &self.placements {
            let glyph = match target {
                Dialect::Named => match &placement.glyph {
                    GlyphRef::Sole => GlyphRef::named(glyph_name),
                    named => named.clone(),
                },
                Dialect::Cell | Dialect::Unit => GlyphRef::Sole,
            };
            let origin = if target.uses_unit_origins() {
                placement.origin.to_unit(self.grid)
            } else {
                placement.origin.to_cell(self.grid)
            };
            converted.add_placement(Placement::new(glyph, origin));
        }

        Ok(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Origin;
    use pretty_assertions::assert_eq;

    fn cell_document() -> ParsedDocument {
        let mut doc = ParsedDocument::new(Dialect::Cell, GridSpec::new(4, 4));
        doc.add_glyph(Glyph::sole(vec![vec![true, true], vec![true, true]]));
        doc.add_placement(Placement::cell(1, 1));
        doc.add_placement(Placement::cell(2, 0));
        doc
    }

    #[test]
    fn test_sole_glyph_lookup() {
        let doc = cell_document();

        assert!(doc.sole_glyph().is_some());
        assert!(doc.glyph(&GlyphRef::Sole).is_some());
        assert!(doc.glyph(&GlyphRef::named("missing")).is_none());
    }

    #[test]
    fn test_duplicate_glyph_rejected() {
        let mut doc = ParsedDocument::new(Dialect::Named, GridSpec::new(4, 4));

        assert!(doc.add_glyph(Glyph::from_rows("a", &["1"])));
        assert!(!doc.add_glyph(Glyph::from_rows("a", &["0"])));
        assert_eq!(doc.glyphs.len(), 1);
    }

    #[test]
    fn test_placement_counts() {
        let mut doc = ParsedDocument::new(Dialect::Named, GridSpec::new(4, 4));
        doc.add_placement(Placement::named("a", 0.0, 0.0));
        doc.add_placement(Placement::named("b", 0.5, 0.0));
        doc.add_placement(Placement::named("a", 0.5, 0.5));

        let counts = doc.placement_counts();
        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(doc.referenced_names().len(), 2);
    }

    #[test]
    fn test_convert_cell_to_unit() {
        let unit = cell_document().convert(Dialect::Unit, "").unwrap();

        assert_eq!(unit.dialect, Dialect::Unit);
        assert_eq!(unit.placements[0].origin, Origin::Unit { x: 0.25, y: 0.25 });
        assert_eq!(unit.placements[1].origin, Origin::Unit { x: 0.5, y: 0.0 });
        assert!(unit.sole_glyph().is_some());
    }

    #[test]
    fn test_convert_cell_to_named() {
        let named = cell_document().convert(Dialect::Named, "block").unwrap();

        assert!(named.glyphs.contains_key("block"));
        assert_eq!(named.placements[0].glyph, GlyphRef::named("block"));
        assert_eq!(named.placements[0].origin, Origin::Unit { x: 0.25, y: 0.25 });
    }

    #[test]
    fn test_convert_to_named_requires_name() {
        let result = cell_document().convert(Dialect::Named, "");
        assert!(matches!(result, Err(GridError::Convert { .. })));
    }

    #[test]
    fn test_convert_multi_glyph_to_single_fails() {
        let mut doc = ParsedDocument::new(Dialect::Named, GridSpec::new(4, 4));
        doc.add_glyph(Glyph::from_rows("a", &["1"]));
        doc.add_glyph(Glyph::from_rows("b", &["1"]));

        let result = doc.convert(Dialect::Cell, "");
        assert!(matches!(result, Err(GridError::Convert { .. })));
    }

    #[test]
    fn test_convert_named_to_cell_rounds() {
        let mut doc = ParsedDocument::new(Dialect::Named, GridSpec::new(4, 4));
        doc.add_glyph(Glyph::from_rows("dot", &["1"]));
        doc.add_placement(Placement::named("dot", 0.125, 0.3));

        let cell = doc.convert(Dialect::Cell, "").unwrap();
        assert_eq!(cell.placements[0], Placement::cell(1, 1));
    }
}
