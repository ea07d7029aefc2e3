//! JSON summary written next to rendered grids.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{GridError, Result};
use crate::types::{Dialect, ParsedDocument};

use super::OutputGrid;

/// Per-glyph placement statistics.
#[derive(Debug, Clone, Serialize)]
pub struct GlyphSummary {
    /// Glyph name (empty for the sole glyph).
    pub name: String,

    /// Bitmap dimensions [cols, rows].
    pub size: [usize; 2],

    /// Number of set cells.
    pub coverage: usize,

    /// Number of placements referencing this glyph.
    pub placements: usize,
}

/// Summary of one composited document, for JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    /// Source name (usually the input file stem).
    pub name: String,

    /// Grid dimensions [width, height].
    pub size: [usize; 2],

    pub dialect: Dialect,

    pub glyphs: Vec<GlyphSummary>,

    /// Total number of placements.
    pub placements: usize,

    /// Sum of all counts.
    pub total: u64,

    /// Cells covered at least once.
    pub occupied: usize,

    /// Largest overlap count.
    pub max_overlap: u32,
}

impl GridSummary {
    pub fn new(name: impl Into<String>, doc: &ParsedDocument, grid: &OutputGrid) -> Self {
        let counts = doc.placement_counts();
        let glyphs = doc
            .glyphs
            .values()
            .map(|glyph| GlyphSummary {
                name: glyph.name.clone(),
                size: [glyph.width(), glyph.height()],
                coverage: glyph.coverage(),
                placements: counts.get(glyph.name.as_str()).copied().unwrap_or(0),
            })
            .collect();

        Self {
            name: name.into(),
            size: [grid.width(), grid.height()],
            dialect: doc.dialect,
            glyphs,
            placements: doc.placements.len(),
            total: grid.total(),
            occupied: grid.occupied(),
            max_overlap: grid.max(),
        }
    }
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary_json(summary: &GridSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(|e| GridError::Build {
        message: format!("Failed to serialize summary: {}", e),
        help: None,
    })?;

    fs::write(path, json).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write JSON: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Compositor;
    use crate::types::{Glyph, GridSpec, Placement};

    #[test]
    fn test_summary_counts() {
        let mut doc = ParsedDocument::new(Dialect::Named, GridSpec::new(4, 4));
        doc.add_glyph(Glyph::from_rows("dot", &["1"]));
        doc.add_glyph(Glyph::from_rows("pair", &["11"]));
        doc.add_placement(Placement::named("dot", 0.0, 0.0));
        doc.add_placement(Placement::named("dot", 0.0, 0.0));
        doc.add_placement(Placement::named("pair", 0.5, 0.5));
        let grid = Compositor::new().compose(&doc).unwrap();

        let summary = GridSummary::new("page", &doc, &grid);

        assert_eq!(summary.size, [4, 4]);
        assert_eq!(summary.placements, 3);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.occupied, 3);
        assert_eq!(summary.max_overlap, 2);
        assert_eq!(summary.glyphs[0].name, "dot");
        assert_eq!(summary.glyphs[0].placements, 2);
        assert_eq!(summary.glyphs[1].size, [2, 1]);
    }

    #[test]
    fn test_summary_json_shape() {
        let mut doc = ParsedDocument::new(Dialect::Cell, GridSpec::new(2, 2));
        doc.add_glyph(Glyph::sole(vec![vec![true]]));
        doc.add_placement(Placement::cell(1, 1));
        let grid = Compositor::new().compose(&doc).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        write_summary_json(&GridSummary::new("page", &doc, &grid), &path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["dialect"], "cell");
        assert_eq!(parsed["size"], serde_json::json!([2, 2]));
        assert_eq!(parsed["glyphs"][0]["name"], "");
        assert_eq!(parsed["max_overlap"], 1);
    }
}
