//! Compositing and rendering.
//!
//! The [`Compositor`] turns a parsed document into an [`OutputGrid`] of
//! overlap counts. The writers in this module are the renderers that hand
//! that grid off to files.

mod compositor;
mod csv;
mod metadata;
mod png;

pub use compositor::{BoundaryPolicy, Compositor, OutputGrid};
pub use csv::{grid_to_csv, write_csv};
pub use metadata::{write_summary_json, GlyphSummary, GridSummary};
pub use png::{colourize, write_png};
