//! Declarative grammars for the three dialects.
//!
//! Each dialect is a static list of [`Step`]s. The parser engine and the
//! writer both walk these lists, so a dialect is described exactly once.

use crate::types::Dialect;

/// Kind of a single comma-separated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Free-text glyph name.
    Name,
    /// Signed integer.
    Int,
    /// Finite floating-point number.
    Float,
}

/// Layout of one placement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// `name,x,y` with a normalized origin.
    Named,
    /// `i,j` integer cell of the sole glyph.
    Cell,
    /// `x,y` normalized origin of the sole glyph.
    Unit,
}

impl Record {
    pub const fn fields(&self) -> &'static [Field] {
        match self {
            Record::Named => &[Field::Name, Field::Float, Field::Float],
            Record::Cell => &[Field::Int, Field::Int],
            Record::Unit => &[Field::Float, Field::Float],
        }
    }

    /// Short description used in field-count errors.
    pub const fn describe(&self) -> &'static str {
        match self {
            Record::Named => "glyph_name,x,y",
            Record::Cell => "i,j",
            Record::Unit => "x,y",
        }
    }
}

/// Which section a count line sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counted {
    Glyphs,
    Instances,
}

/// One step of a dialect grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A literal line that must match exactly.
    Label(&'static str),
    /// An empty separator line.
    Blank,
    /// `nx,ny` data line.
    GridDimens,
    /// Single non-negative integer line.
    Count(Counted),
    /// Free-text glyph name line.
    GlyphName,
    /// `gx,gy` data line.
    GlyphDimens,
    /// `gy` lines of `gx` bits; completes the current glyph.
    GlyphShape,
    /// Repeat the body once per counted glyph.
    Glyphs(&'static [Step]),
    /// One record line per counted instance.
    Instances(Record),
}

const GRID_BLOCK: [Step; 4] = [
    Step::Label("grid_dimens:"),
    Step::Label("nx,ny"),
    Step::GridDimens,
    Step::Blank,
];

const NAMED_GLYPH: &[Step] = &[
    Step::Label("glyph_name:"),
    Step::GlyphName,
    Step::Label("glyph_dimens:"),
    Step::Label("gx,gy"),
    Step::GlyphDimens,
    Step::Label("glyph_shape:"),
    Step::GlyphShape,
];

const NAMED: &[Step] = &[
    GRID_BLOCK[0],
    GRID_BLOCK[1],
    GRID_BLOCK[2],
    GRID_BLOCK[3],
    Step::Label("nr_glyphs:"),
    Step::Count(Counted::Glyphs),
    Step::Blank,
    Step::Glyphs(NAMED_GLYPH),
    Step::Blank,
    Step::Label("nr_c_boxes:"),
    Step::Count(Counted::Instances),
    Step::Blank,
    Step::Label("glyph_name,x,y"),
    Step::Instances(Record::Named),
];

const CELL: &[Step] = &[
    GRID_BLOCK[0],
    GRID_BLOCK[1],
    GRID_BLOCK[2],
    GRID_BLOCK[3],
    Step::Label("glyph_dimens:"),
    Step::Label("gx,gy"),
    Step::GlyphDimens,
    Step::Label("glyph_shape:"),
    Step::GlyphShape,
    Step::Blank,
    Step::Label("nr_glyph_instances:"),
    Step::Count(Counted::Instances),
    Step::Blank,
    Step::Label("i,j"),
    Step::Instances(Record::Cell),
];

const UNIT: &[Step] = &[
    GRID_BLOCK[0],
    GRID_BLOCK[1],
    GRID_BLOCK[2],
    GRID_BLOCK[3],
    Step::Label("glyph_dimens:"),
    Step::Label("gx,gy"),
    Step::GlyphDimens,
    Step::Label("glyph_shape:"),
    Step::GlyphShape,
    Step::Blank,
    Step::Label("nr_glyph_instances:"),
    Step::Count(Counted::Instances),
    Step::Blank,
    Step::Label("x,y"),
    Step::Instances(Record::Unit),
];

/// The grammar for a dialect.
pub fn schema(dialect: Dialect) -> &'static [Step] {
    match dialect {
        Dialect::Named => NAMED,
        Dialect::Cell => CELL,
        Dialect::Unit => UNIT,
    }
}
