//! Glyph placement instances.
//!
//! Each placement stamps one glyph at one origin. Origins are either
//! integer grid cells or normalized unit coordinates that get scaled by the
//! grid size and rounded.
//!
//! # Rounding
//!
//! Unit origins resolve with `f64::round`, i.e. halfway cases round away
//! from zero: on a 4-wide grid `x = 0.125` lands on column 1 and
//! `x = 0.625` lands on column 3.

use std::fmt;

use super::glyph::SOLE_GLYPH;
use super::GridSpec;

/// Reference from a placement to a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GlyphRef {
    /// Glyph looked up by name (multi-glyph documents).
    Named(String),

    /// The document's only glyph (single-glyph documents).
    Sole,
}

impl GlyphRef {
    pub fn named(name: impl Into<String>) -> Self {
        GlyphRef::Named(name.into())
    }

    /// Key used to look the glyph up in the document's glyph map.
    pub fn key(&self) -> &str {
        match self {
            GlyphRef::Named(name) => name,
            GlyphRef::Sole => SOLE_GLYPH,
        }
    }
}

impl fmt::Display for GlyphRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphRef::Named(name) => write!(f, "{}", name),
            GlyphRef::Sole => write!(f, "<sole glyph>"),
        }
    }
}

/// Top-left corner of a placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Origin {
    /// Integer grid cell (`i` = column, `j` = row). May lie outside the grid.
    Cell { i: i64, j: i64 },

    /// Normalized coordinate, nominally in [0, 1) on each axis.
    Unit { x: f64, y: f64 },
}

impl Origin {
    /// Resolve to an integer (column, row) on the given grid.
    pub fn resolve(&self, grid: GridSpec) -> (i64, i64) {
        match *self {
            Origin::Cell { i, j } => (i, j),
            Origin::Unit { x, y } => (
                scale_to_cell(x, grid.width),
                scale_to_cell(y, grid.height),
            ),
        }
    }

    /// Normalized (x, y) of the origin on the given grid.
    pub fn unit_coords(&self, grid: GridSpec) -> (f64, f64) {
        match *self {
            Origin::Cell { i, j } => (i as f64 / grid.width as f64, j as f64 / grid.height as f64),
            Origin::Unit { x, y } => (x, y),
        }
    }

    /// Express the origin in unit coordinates of the given grid.
    pub fn to_unit(&self, grid: GridSpec) -> Origin {
        let (x, y) = self.unit_coords(grid);
        Origin::Unit { x, y }
    }

    /// Express the origin as an integer cell of the given grid.
    pub fn to_cell(&self, grid: GridSpec) -> Origin {
        let (i, j) = self.resolve(grid);
        Origin::Cell { i, j }
    }
}

/// Scale a unit coordinate to a cell index, rounding half away from zero.
fn scale_to_cell(value: f64, extent: usize) -> i64 {
    (value * extent as f64).round() as i64
}

/// One occurrence of a glyph on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub glyph: GlyphRef,
    pub origin: Origin,
}

impl Placement {
    pub fn new(glyph: GlyphRef, origin: Origin) -> Self {
        Self { glyph, origin }
    }

    /// Placement of the sole glyph at an integer cell.
    pub fn cell(i: i64, j: i64) -> Self {
        Self::new(GlyphRef::Sole, Origin::Cell { i, j })
    }

    /// Placement of the sole glyph at a unit coordinate.
    pub fn unit(x: f64, y: f64) -> Self {
        Self::new(GlyphRef::Sole, Origin::Unit { x, y })
    }

    /// Placement of a named glyph at a unit coordinate.
    pub fn named(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(GlyphRef::named(name), Origin::Unit { x, y })
    }
}
