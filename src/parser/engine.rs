//! Grammar engine: interprets a dialect schema against input lines.

use std::collections::BTreeMap;

use crate::error::{GridError, Result};
use crate::types::{
    Dialect, Glyph, GlyphRef, GridSpec, Origin, ParsedDocument, Placement, SOLE_GLYPH,
};

use super::lines::{Line, LineCursor};
use super::schema::{schema, Counted, Field, Record, Step};

/// A parsed field value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Value<'a> {
    Name(&'a str),
    Int(i64),
    Float(f64),
}

/// Parse a complete document in the given dialect.
pub fn parse_with(source: &str, dialect: Dialect) -> Result<ParsedDocument> {
    let mut engine = Engine::new(source, dialect);
    engine.run(schema(dialect))?;
    engine.cursor.expect_end()?;
    engine.finish()
}

struct Engine<'a> {
    cursor: LineCursor<'a>,
    dialect: Dialect,
    grid: Option<GridSpec>,
    glyphs: BTreeMap<String, Glyph>,
    placements: Vec<Placement>,
    glyph_count: usize,
    instance_count: usize,
    /// Name (and its line) of the glyph currently being read.
    pending_name: Option<(String, usize)>,
    pending_dims: (usize, usize),
}

impl<'a> Engine<'a> {
    fn new(source: &'a str, dialect: Dialect) -> Self {
        Self {
            cursor: LineCursor::new(source),
            dialect,
            grid: None,
            glyphs: BTreeMap::new(),
            placements: Vec::new(),
            glyph_count: 0,
            instance_count: 0,
            pending_name: None,
            pending_dims: (0, 0),
        }
    }

    fn run(&mut self, steps: &'static [Step]) -> Result<()> {
        for step in steps {
            match *step {
                Step::Label(text) => self.cursor.expect_label(text)?,
                Step::Blank => self.cursor.expect_blank()?,
                Step::GridDimens => {
                    let number = self.cursor.line_number();
                    let (width, height) = self.read_dims("nx,ny")?;
                    let grid = GridSpec::new(width, height);
                    if !grid.within_limit() {
                        return Err(GridError::format(
                            number,
                            format!("a grid of at most {} cells", GridSpec::MAX_CELLS),
                            grid.to_string(),
                        ));
                    }
                    self.grid = Some(grid);
                }
                Step::Count(Counted::Glyphs) => self.glyph_count = self.read_count()?,
                Step::Count(Counted::Instances) => self.instance_count = self.read_count()?,
                Step::GlyphName => {
                    let line = self.cursor.next_line("a glyph name")?;
                    let name = line.text.trim();
                    if name.is_empty() {
                        return Err(GridError::format(line.number, "a glyph name", line.text));
                    }
                    self.pending_name = Some((name.to_string(), line.number));
                }
                Step::GlyphDimens => self.pending_dims = self.read_dims("gx,gy")?,
                Step::GlyphShape => self.read_glyph()?,
                Step::Glyphs(body) => {
                    for _ in 0..self.glyph_count {
                        self.run(body)?;
                    }
                }
                Step::Instances(record) => {
                    for _ in 0..self.instance_count {
                        self.read_instance(record)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<ParsedDocument> {
        let grid = self
            .grid
            .ok_or_else(|| GridError::format(1, "grid_dimens:", "a document without grid dimensions"))?;

        Ok(ParsedDocument {
            dialect: self.dialect,
            grid,
            glyphs: self.glyphs,
            placements: self.placements,
        })
    }

    /// Read a `w,h` line of two positive integers.
    fn read_dims(&mut self, what: &str) -> Result<(usize, usize)> {
        let line = self.cursor.next_line(what)?;
        let fields = line.fields(2, what)?;

        let width = parse_positive(&line, fields[0])?;
        let height = parse_positive(&line, fields[1])?;
        Ok((width, height))
    }

    fn read_count(&mut self) -> Result<usize> {
        let line = self.cursor.next_line("a count")?;
        let fields = line.fields(1, "count")?;

        match parse_field(&line, Field::Int, fields[0])? {
            Value::Int(n) if n >= 0 => Ok(n as usize),
            _ => Err(GridError::format(line.number, "a non-negative integer", fields[0])),
        }
    }

    /// Read `gy` rows of `gx` bits and store the finished glyph.
    fn read_glyph(&mut self) -> Result<()> {
        let (cols, rows) = self.pending_dims;
        let mut shape = Vec::new();

        for _ in 0..rows {
            let line = self.cursor.next_line("a glyph_shape row")?;
            let row = line
                .fields(cols, "glyph_shape row")?
                .into_iter()
                .map(|field| parse_bit(&line, field))
                .collect::<Result<Vec<bool>>>()?;
            shape.push(row);
        }

        let (name, line) = self
            .pending_name
            .take()
            .unwrap_or_else(|| (SOLE_GLYPH.to_string(), self.cursor.line_number()));

        if self.glyphs.contains_key(&name) {
            return Err(GridError::format(line, "a unique glyph name", name)
                .with_help("Each glyph_name may only be defined once"));
        }
        self.glyphs.insert(name.clone(), Glyph::new(name, shape));
        Ok(())
    }

    fn read_instance(&mut self, record: Record) -> Result<()> {
        let line = self.cursor.next_line(record.describe())?;
        let raw = line.fields(record.fields().len(), record.describe())?;

        let values = record
            .fields()
            .iter()
            .zip(raw.iter().copied())
            .map(|(&kind, field)| parse_field(&line, kind, field))
            .collect::<Result<Vec<Value<'a>>>>()?;

        let placement = match (record, values.as_slice()) {
            (Record::Named, [Value::Name(name), Value::Float(x), Value::Float(y)]) => {
                Placement::new(GlyphRef::named(*name), Origin::Unit { x: *x, y: *y })
            }
            (Record::Cell, [Value::Int(i), Value::Int(j)]) => Placement::cell(*i, *j),
            (Record::Unit, [Value::Float(x), Value::Float(y)]) => Placement::unit(*x, *y),
            _ => unreachable!("record fields always parse to their declared kinds"),
        };
        self.placements.push(placement);
        Ok(())
    }
}

fn parse_field<'a>(line: &Line<'a>, kind: Field, raw: &'a str) -> Result<Value<'a>> {
    match kind {
        Field::Name => Ok(Value::Name(raw)),
        Field::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| GridError::format(line.number, "an integer", raw)),
        Field::Float => match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Value::Float(value)),
            _ => Err(GridError::format(line.number, "a finite number", raw)),
        },
    }
}

fn parse_positive(line: &Line<'_>, raw: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(GridError::format(line.number, "a positive integer", raw)),
    }
}

fn parse_bit(line: &Line<'_>, raw: &str) -> Result<bool> {
    match raw {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(GridError::format(line.number, "0 or 1", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::END_OF_INPUT;
    use pretty_assertions::assert_eq;

    const CELL_DOC: &str = "grid_dimens:\nnx,ny\n4,4\n\nglyph_dimens:\ngx,gy\n2,2\nglyph_shape:\n1,1\n1,1\n\nnr_glyph_instances:\n1\n\ni,j\n1,1\n";

    #[test]
    fn test_parse_cell_document() {
        let doc = parse_with(CELL_DOC, Dialect::Cell).unwrap();

        assert_eq!(doc.grid, GridSpec::new(4, 4));
        assert_eq!(doc.sole_glyph().map(|g| g.size()), Some((2, 2)));
        assert_eq!(doc.placements, vec![Placement::cell(1, 1)]);
    }

    #[test]
    fn test_wrong_dialect_fails_at_instance_header() {
        let err = parse_with(CELL_DOC, Dialect::Unit).unwrap_err();

        assert!(matches!(
            err,
            GridError::Format { line: 15, ref expected, ref found, .. }
                if expected == "x,y" && found == "i,j"
        ));
    }

    #[test]
    fn test_shape_rows_follow_declared_width() {
        let source = "grid_dimens:\nnx,ny\n4,4\n\nglyph_dimens:\ngx,gy\n3,2\nglyph_shape:\n1,0,0\n1,1\n";

        let err = parse_with(source, Dialect::Cell).unwrap_err();
        assert_eq!(err.line(), Some(10));
    }

    #[test]
    fn test_non_rectangular_glyph_is_read_row_major() {
        let source = "grid_dimens:\nnx,ny\n8,8\n\nglyph_dimens:\ngx,gy\n3,2\nglyph_shape:\n1,0,0\n0,1,1\n\nnr_glyph_instances:\n0\n\ni,j\n";

        let doc = parse_with(source, Dialect::Cell).unwrap();
        let glyph = doc.sole_glyph().unwrap();

        assert_eq!(glyph.size(), (3, 2));
        assert_eq!(glyph.get(0, 0), Some(true));
        assert_eq!(glyph.get(2, 1), Some(true));
        assert_eq!(glyph.get(0, 1), Some(false));
    }

    #[test]
    fn test_bits_must_be_zero_or_one() {
        let source = "grid_dimens:\nnx,ny\n4,4\n\nglyph_dimens:\ngx,gy\n1,1\nglyph_shape:\n2\n";

        let err = parse_with(source, Dialect::Cell).unwrap_err();
        assert!(matches!(err, GridError::Format { line: 9, ref expected, .. } if expected == "0 or 1"));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let source = "grid_dimens:\nnx,ny\n9223372036854775807,9223372036854775807\n\nglyph_dimens:\ngx,gy\n1,1\nglyph_shape:\n1\n\nnr_glyph_instances:\n0\n\ni,j\n";

        let err = parse_with(source, Dialect::Cell).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_huge_declared_glyph_height_is_truncation() {
        let source = "grid_dimens:\nnx,ny\n4,4\n\nglyph_dimens:\ngx,gy\n1,1000000000000000000\nglyph_shape:\n1\n";

        let err = parse_with(source, Dialect::Cell).unwrap_err();
        assert!(matches!(
            err,
            GridError::Format { line: 10, ref found, .. } if found == END_OF_INPUT
        ));
    }

    #[test]
    fn test_glyph_name_is_trimmed() {
        let source = "grid_dimens:\nnx,ny\n4,4\n\nnr_glyphs:\n1\n\nglyph_name:\n  dot \nglyph_dimens:\ngx,gy\n1,1\nglyph_shape:\n1\n\nnr_c_boxes:\n1\n\nglyph_name,x,y\ndot,0,0\n";

        let doc = parse_with(source, Dialect::Named).unwrap();
        assert!(doc.glyph(&GlyphRef::named("dot")).is_some());
    }

    #[test]
    fn test_zero_grid_dimension_rejected() {
        let source = "grid_dimens:\nnx,ny\n0,4\n";

        let err = parse_with(source, Dialect::Cell).unwrap_err();
        assert!(matches!(err, GridError::Format { line: 3, ref found, .. } if found == "0"));
    }

    #[test]
    fn test_non_finite_origin_rejected() {
        let source = "grid_dimens:\nnx,ny\n4,4\n\nglyph_dimens:\ngx,gy\n1,1\nglyph_shape:\n1\n\nnr_glyph_instances:\n1\n\nx,y\nNaN,0.5\n";

        let err = parse_with(source, Dialect::Unit).unwrap_err();
        assert!(matches!(err, GridError::Format { line: 15, ref found, .. } if found == "NaN"));
    }

    #[test]
    fn test_negative_count_rejected() {
        let source = "grid_dimens:\nnx,ny\n4,4\n\nnr_glyphs:\n-1\n";

        let err = parse_with(source, Dialect::Named).unwrap_err();
        assert_eq!(err.line(), Some(6));
    }
}
