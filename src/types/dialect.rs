//! The three revisions of the glyph-grid file format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A file-format dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Several named glyphs placed at normalized origins (`nr_glyphs:` / `nr_c_boxes:`).
    Named,

    /// One unnamed glyph placed at integer cells (`nr_glyph_instances:` with `i,j`).
    Cell,

    /// One unnamed glyph placed at normalized origins (`nr_glyph_instances:` with `x,y`).
    Unit,
}

impl Dialect {
    /// All dialects, in the order auto-detection tries them.
    pub const ALL: [Dialect; 3] = [Dialect::Named, Dialect::Cell, Dialect::Unit];

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Named => "named",
            Dialect::Cell => "cell",
            Dialect::Unit => "unit",
        }
    }

    /// Whether documents in this dialect carry exactly one unnamed glyph.
    pub fn is_single_glyph(&self) -> bool {
        !matches!(self, Dialect::Named)
    }

    /// Whether placements in this dialect use normalized origins.
    pub fn uses_unit_origins(&self) -> bool {
        !matches!(self, Dialect::Cell)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_traits() {
        assert!(!Dialect::Named.is_single_glyph());
        assert!(Dialect::Cell.is_single_glyph());
        assert!(Dialect::Unit.is_single_glyph());

        assert!(Dialect::Named.uses_unit_origins());
        assert!(!Dialect::Cell.uses_unit_origins());
        assert!(Dialect::Unit.uses_unit_origins());
    }

    #[test]
    fn test_dialect_serde_names() {
        let d: Dialect = serde_yaml::from_str("cell").unwrap();
        assert_eq!(d, Dialect::Cell);
        assert_eq!(Dialect::Unit.to_string(), "unit");
    }
}
