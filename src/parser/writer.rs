//! Document serializer.
//!
//! Emits a [`ParsedDocument`] in its dialect by walking the same schema the
//! parser reads, so writing and re-parsing yields an identical document.

use crate::error::{GridError, Result};
use crate::types::{Glyph, ParsedDocument};

use super::schema::{schema, Counted, Record, Step};

/// Serialize a document in the layout of `doc.dialect`.
///
/// Glyphs are written in name order. Floats use the shortest text that
/// parses back to the same value.
pub fn write_document(doc: &ParsedDocument) -> Result<String> {
    let mut writer = Writer {
        doc,
        out: String::new(),
        glyph: None,
    };

    if doc.dialect.is_single_glyph() {
        if doc.glyphs.len() != 1 {
            return Err(GridError::Convert {
                message: format!(
                    "the {} dialect holds exactly one glyph, document has {}",
                    doc.dialect,
                    doc.glyphs.len()
                ),
                help: None,
            });
        }
        writer.glyph = doc.glyphs.values().next();
    }

    writer.emit(schema(doc.dialect));
    Ok(writer.out)
}

struct Writer<'d> {
    doc: &'d ParsedDocument,
    out: String,
    glyph: Option<&'d Glyph>,
}

impl<'d> Writer<'d> {
    fn emit(&mut self, steps: &'static [Step]) {
        for step in steps {
            match *step {
                Step::Label(text) => self.line(text),
                Step::Blank => self.line(""),
                Step::GridDimens => {
                    let grid = self.doc.grid;
                    self.line(format!("{},{}", grid.width, grid.height));
                }
                Step::Count(Counted::Glyphs) => self.line(self.doc.glyphs.len().to_string()),
                Step::Count(Counted::Instances) => {
                    self.line(self.doc.placements.len().to_string())
                }
                Step::GlyphName => {
                    let name = self.glyph.map_or("", |g| g.name.as_str());
                    self.line(name);
                }
                Step::GlyphDimens => {
                    let (cols, rows) = self.glyph.map_or((0, 0), |g| g.size());
                    self.line(format!("{},{}", cols, rows));
                }
                Step::GlyphShape => {
                    let Some(glyph) = self.glyph else { continue };
                    for row in glyph.rows() {
                        let bits: Vec<&str> =
                            row.iter().map(|&set| if set { "1" } else { "0" }).collect();
                        self.line(bits.join(","));
                    }
                }
                Step::Glyphs(body) => {
                    let doc = self.doc;
                    for glyph in doc.glyphs.values() {
                        self.glyph = Some(glyph);
                        self.emit(body);
                    }
                    self.glyph = None;
                }
                Step::Instances(record) => {
                    let doc = self.doc;
                    for placement in &doc.placements {
                        let text = match record {
                            Record::Cell => {
                                let (i, j) = placement.origin.resolve(doc.grid);
                                format!("{},{}", i, j)
                            }
                            Record::Named => {
                                let (x, y) = placement.origin.unit_coords(doc.grid);
                                format!("{},{},{}", placement.glyph.key(), x, y)
                            }
                            Record::Unit => {
                                let (x, y) = placement.origin.unit_coords(doc.grid);
                                format!("{},{}", x, y)
                            }
                        };
                        self.line(text);
                    }
                }
            }
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }
}
