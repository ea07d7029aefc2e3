//! Validation checks for parsed documents.
//!
//! Each check takes a `&ParsedDocument` and returns a `ValidationResult`.

use crate::render::BoundaryPolicy;
use crate::types::{Origin, ParsedDocument};

use super::warning::{Diagnostic, Severity, ValidationResult};

fn glyph_label(name: &str) -> String {
    if name.is_empty() {
        "the sole glyph".to_string()
    } else {
        format!("glyph '{}'", name)
    }
}

/// Check for placements naming glyphs that were never defined.
pub fn check_unknown_glyphs(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (index, placement) in doc.placements.iter().enumerate() {
        if doc.glyph(&placement.glyph).is_none() {
            result.push(
                Diagnostic::error(
                    "glyphgrid::validate::unknown-glyph",
                    format!("Placement {} references unknown glyph '{}'", index, placement.glyph),
                )
                .at_placement(index)
                .with_help("Define the glyph or fix the name in the placement line"),
            );
        }
    }

    result
}

/// Check for glyphs that no placement uses.
pub fn check_unused_glyphs(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let referenced = doc.referenced_names();

    for name in doc.glyphs.keys() {
        if !referenced.contains(name.as_str()) {
            result.push(Diagnostic::warning(
                "glyphgrid::validate::unused-glyph",
                format!("{} is never placed", glyph_label(name)),
            ));
        }
    }

    result
}

/// Check for glyphs with no set cells.
pub fn check_empty_glyphs(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for glyph in doc.glyphs.values() {
        if glyph.coverage() == 0 {
            result.push(
                Diagnostic::warning(
                    "glyphgrid::validate::empty-glyph",
                    format!("{} has no set cells", glyph_label(&glyph.name)),
                )
                .with_help("Its placements will not change the grid"),
            );
        }
    }

    result
}

/// Check for placement rectangles that leave the grid.
///
/// Reported as errors under the reject policy, warnings under clip.
pub fn check_bounds(doc: &ParsedDocument, boundary: BoundaryPolicy) -> ValidationResult {
    let mut result = ValidationResult::new();
    let grid = doc.grid;
    let severity = match boundary {
        BoundaryPolicy::Clip => Severity::Warning,
        BoundaryPolicy::Reject => Severity::Error,
    };

    for (index, placement) in doc.placements.iter().enumerate() {
        let Some(glyph) = doc.glyph(&placement.glyph) else {
            continue;
        };

        let (x, y) = placement.origin.resolve(grid);
        let (cols, rows) = glyph.size();
        if !grid.fits(x, y, cols, rows) {
            result.push(
                Diagnostic::with_severity(
                    severity,
                    "glyphgrid::validate::out-of-bounds",
                    format!(
                        "Placement {} at ({}, {}) extends past the {} grid",
                        index, x, y, grid
                    ),
                )
                .at_placement(index),
            );
        }
    }

    result
}

/// Check for normalized origins outside [0, 1).
pub fn check_origin_range(doc: &ParsedDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let in_range = |v: f64| (0.0..1.0).contains(&v);

    for (index, placement) in doc.placements.iter().enumerate() {
        if let Origin::Unit { x, y } = placement.origin {
            if !in_range(x) || !in_range(y) {
                result.push(
                    Diagnostic::warning(
                        "glyphgrid::validate::origin-range",
                        format!("Placement {} has normalized origin ({}, {}) outside [0, 1)", index, x, y),
                    )
                    .at_placement(index),
                );
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dialect, Glyph, GridSpec, Placement};

    fn named_doc() -> ParsedDocument {
        let mut doc = ParsedDocument::new(Dialect::Named, GridSpec::new(4, 4));
        doc.add_glyph(Glyph::from_rows("dot", &["1"]));
        doc.add_glyph(Glyph::from_rows("blank", &["00"]));
        doc.add_placement(Placement::named("dot", 0.0, 0.0));
        doc
    }

    #[test]
    fn test_unknown_glyph() {
        let mut doc = named_doc();
        doc.add_placement(Placement::named("ring", 0.5, 0.5));

        let result = check_unknown_glyphs(&doc);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.iter().next().and_then(|d| d.placement), Some(1));
    }

    #[test]
    fn test_unused_and_empty_glyphs() {
        let doc = named_doc();

        assert_eq!(check_unused_glyphs(&doc).warning_count(), 1);
        assert_eq!(check_empty_glyphs(&doc).warning_count(), 1);
    }

    #[test]
    fn test_bounds_severity_follows_policy() {
        let mut doc = ParsedDocument::new(Dialect::Cell, GridSpec::new(4, 4));
        doc.add_glyph(Glyph::sole(vec![vec![true, true]]));
        doc.add_placement(Placement::cell(2, 0));
        doc.add_placement(Placement::cell(3, 0));

        let clip = check_bounds(&doc, BoundaryPolicy::Clip);
        assert_eq!(clip.warning_count(), 1);
        assert!(!clip.has_errors());

        let reject = check_bounds(&doc, BoundaryPolicy::Reject);
        assert_eq!(reject.error_count(), 1);
    }

    #[test]
    fn test_bounds_with_extreme_origins() {
        let mut doc = ParsedDocument::new(Dialect::Cell, GridSpec::new(4, 4));
        doc.add_glyph(Glyph::sole(vec![vec![true, true]]));
        doc.add_placement(Placement::cell(i64::MAX, 0));
        doc.add_placement(Placement::cell(0, i64::MAX));

        assert_eq!(check_bounds(&doc, BoundaryPolicy::Clip).warning_count(), 2);
        assert_eq!(check_bounds(&doc, BoundaryPolicy::Reject).error_count(), 2);
    }

    #[test]
    fn test_origin_range() {
        let mut doc = named_doc();
        doc.add_placement(Placement::named("dot", 1.0, 0.5));
        doc.add_placement(Placement::named("dot", 0.5, -0.1));
        doc.add_placement(Placement::named("dot", 0.999, 0.0));

        assert_eq!(check_origin_range(&doc).warning_count(), 2);
    }
}
