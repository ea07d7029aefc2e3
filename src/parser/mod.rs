//! Parser for glyph-grid definition files.
//!
//! Three incompatible revisions of the format exist (see [`Dialect`]). All
//! share a line-oriented skeleton of literal label lines alternating with
//! comma-separated data lines:
//!
//! ```text
//! grid_dimens:
//! nx,ny
//! 4,4
//!
//! glyph_dimens:
//! gx,gy
//! 2,2
//! glyph_shape:
//! 1,1
//! 1,1
//!
//! nr_glyph_instances:
//! 1
//!
//! i,j
//! 1,1
//! ```
//!
//! Each dialect is a declarative schema ([`schema::Step`] list) run by one
//! grammar engine. A parse either fully succeeds or fails with a
//! [`GridError::Format`] naming the line and the expected text.
//!
//! # Usage
//!
//! ```ignore
//! use glyphgrid::parser::parse_document;
//!
//! let source = std::fs::read_to_string("page.txt")?;
//! let doc = parse_document(&source)?;
//! println!("{} glyph(s) on a {} grid", doc.glyphs.len(), doc.grid);
//! ```

mod engine;
mod lines;
pub mod schema;
mod writer;

use std::io::Read;

use log::debug;

use crate::error::{GridError, Result};
use crate::types::{Dialect, ParsedDocument};

pub use lines::END_OF_INPUT;
pub use writer::write_document;

/// Parse a document, detecting its dialect.
///
/// Dialects are tried in [`Dialect::ALL`] order and the first that parses
/// wins. If none does, the error from the attempt that got furthest into
/// the file is returned.
pub fn parse_document(source: &str) -> Result<ParsedDocument> {
    let mut furthest: Option<GridError> = None;

    for dialect in Dialect::ALL {
        match engine::parse_with(source, dialect) {
            Ok(doc) => {
                debug!(dialect = dialect.name(); "Detected dialect");
                return Ok(doc);
            }
            Err(err) => {
                debug!(dialect = dialect.name(), error:% = err; "Dialect did not match");
                let further = match &furthest {
                    Some(best) => err.line() > best.line(),
                    None => true,
                };
                if further {
                    furthest = Some(err);
                }
            }
        }
    }

    Err(furthest.unwrap_or_else(|| GridError::format(1, "grid_dimens:", END_OF_INPUT)))
}

/// Parse a document in a known dialect.
pub fn parse_document_as(source: &str, dialect: Dialect) -> Result<ParsedDocument> {
    engine::parse_with(source, dialect)
}

/// Read a whole document from a reader, optionally forcing the dialect.
pub fn read_document<R: Read>(mut reader: R, dialect: Option<Dialect>) -> Result<ParsedDocument> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;

    match dialect {
        Some(dialect) => parse_document_as(&source, dialect),
        None => parse_document(&source),
    }
}
