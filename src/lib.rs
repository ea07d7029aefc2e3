//! glyphgrid - glyph placement compositor
//!
//! Parses text-based grid definitions in any of three dialects and
//! composites every glyph placement onto an integer occupancy grid, which
//! can then be rendered as PNG, CSV or a JSON summary.

pub mod batch;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use batch::{build_file, build_files, load_document, BuildOptions, BuildReport, BuiltFile};
pub use error::{GridError, Result};
pub use manifest::{Manifest, OutputFormat};
pub use parser::{parse_document, parse_document_as, read_document, write_document};
pub use render::{BoundaryPolicy, Compositor, OutputGrid};
pub use types::{
    Colour, DensityRamp, Dialect, Glyph, GlyphRef, GridSpec, Origin, ParsedDocument, Placement,
    SOLE_GLYPH,
};
pub use validation::{validate_document, Diagnostic, Severity, ValidationResult};
