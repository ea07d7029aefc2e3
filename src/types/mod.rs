//! Core domain types for glyphgrid.
//!
//! - `GridSpec` - declared grid dimensions
//! - `Glyph` - boolean bitmaps stamped onto the grid
//! - `Placement` - one glyph at one origin
//! - `ParsedDocument` - everything read from one input file
//! - `Colour` - RGBA colours for rendering

mod colour;
mod dialect;
mod document;
mod glyph;
mod grid;
mod placement;

pub use colour::{Colour, DensityRamp};
pub use dialect::Dialect;
pub use document::ParsedDocument;
pub use glyph::{Glyph, SOLE_GLYPH};
pub use grid::GridSpec;
pub use placement::{GlyphRef, Origin, Placement};
