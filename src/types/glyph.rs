//! Glyph bitmaps.
//!
//! A glyph is a small fixed-size boolean bitmap stamped onto the grid by
//! every placement that references it. In dialects that carry a single
//! glyph the name is empty and the glyph is stored under [`SOLE_GLYPH`].

use crate::error::{GridError, Result};

use super::GridSpec;

/// Map key used for the unnamed glyph of single-glyph dialects.
pub const SOLE_GLYPH: &str = "";

/// A named (or sole) boolean bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Glyph name; empty for the sole glyph.
    pub name: String,

    /// Bitmap (row-major: shape[row][col]).
    shape: Vec<Vec<bool>>,
}

impl Glyph {
    /// Create a glyph from rows of equal length.
    pub fn new(name: impl Into<String>, shape: Vec<Vec<bool>>) -> Self {
        debug_assert!(
            shape.windows(2).all(|w| w[0].len() == w[1].len()),
            "glyph rows must have equal length"
        );
        Self {
            name: name.into(),
            shape,
        }
    }

    /// Create the unnamed glyph used by single-glyph dialects.
    pub fn sole(shape: Vec<Vec<bool>>) -> Self {
        Self::new(SOLE_GLYPH, shape)
    }

    /// Build a glyph from `0`/`1` rows, e.g. `["11", "10"]`.
    ///
    /// Any character other than `1` is treated as unset.
    pub fn from_rows(name: impl Into<String>, rows: &[&str]) -> Self {
        let shape = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '1').collect())
            .collect();
        Self::new(name, shape)
    }

    /// Rasterize a filled circle of `radius` grid units for `grid`.
    ///
    /// The bitmap is `ceil(2 * radius * width)` columns by
    /// `ceil(2 * radius * height)` rows. A cell is set when its offset from
    /// the centre cell, scaled back to grid units, lies strictly inside the
    /// radius. With an even extent the centre sits right of the middle, so
    /// the first row and column stay empty.
    pub fn circle(name: impl Into<String>, radius: f64, grid: GridSpec) -> Result<Self> {
        let extent = |cells: usize| (2.0 * radius * cells as f64).ceil();
        let (cols, rows) = (extent(grid.width), extent(grid.height));

        if !(radius.is_finite() && radius > 0.0) || cols * rows > GridSpec::MAX_CELLS as f64 {
            return Err(GridError::Config {
                message: format!("Invalid circle radius {} for a {} grid", radius, grid),
                help: Some("Use a positive radius in grid units, e.g. 0.02".to_string()),
            });
        }

        let (cols, rows) = (cols as i64, rows as i64);
        let (centre_col, centre_row) = (cols / 2, rows / 2);
        let shape = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| {
                        let x = (col - centre_col) as f64 / grid.width as f64;
                        let y = (row - centre_row) as f64 / grid.height as f64;
                        x * x + y * y < radius * radius
                    })
                    .collect()
            })
            .collect();

        Ok(Self::new(name, shape))
    }

    /// Width of the bitmap in cells (`gx`).
    pub fn width(&self) -> usize {
        self.shape.first().map_or(0, |row| row.len())
    }

    /// Height of the bitmap in cells (`gy`).
    pub fn height(&self) -> usize {
        self.shape.len()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Whether this is the unnamed glyph.
    pub fn is_sole(&self) -> bool {
        self.name == SOLE_GLYPH
    }

    pub fn get(&self, col: usize, row: usize) -> Option<bool> {
        self.shape.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.shape
    }

    /// Iterate over the (col, row) offsets of every set cell.
    pub fn set_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, &set)| set)
                .map(move |(col, _)| (col, row))
        })
    }

    /// Number of set cells.
    pub fn coverage(&self) -> usize {
        self.shape.iter().flatten().filter(|&&set| set).count()
    }

    /// Rename the glyph, keeping its bitmap.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: self.shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_size() {
        let glyph = Glyph::from_rows("bar", &["111", "000"]);

        assert_eq!(glyph.width(), 3);
        assert_eq!(glyph.height(), 2);
        assert_eq!(glyph.size(), (3, 2));
        assert!(!glyph.is_sole());
    }

    #[test]
    fn test_glyph_get() {
        let glyph = Glyph::from_rows("corner", &["10", "01"]);

        assert_eq!(glyph.get(0, 0), Some(true));
        assert_eq!(glyph.get(1, 0), Some(false));
        assert_eq!(glyph.get(1, 1), Some(true));
        assert_eq!(glyph.get(2, 0), None);
    }

    #[test]
    fn test_set_cells_are_col_row() {
        let glyph = Glyph::from_rows("l", &["10", "11"]);

        let cells: Vec<_> = glyph.set_cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(glyph.coverage(), 3);
    }

    #[test]
    fn test_sole_glyph() {
        let glyph = Glyph::sole(vec![vec![true]]);
        assert!(glyph.is_sole());

        let named = glyph.renamed("dot");
        assert_eq!(named.name, "dot");
        assert_eq!(named.coverage(), 1);
    }

    #[test]
    fn test_circle_coverage_and_symmetry() {
        let glyph = Glyph::circle("circle", 0.25, GridSpec::new(20, 20)).unwrap();

        assert_eq!(glyph.size(), (10, 10));
        assert_eq!(glyph.coverage(), 69);

        // Centre cell is (5, 5); row 0 and column 0 lie on the radius
        assert!(glyph.rows()[0].iter().all(|&set| !set));
        assert!((0..10).all(|row| glyph.get(0, row) == Some(false)));
        for k in 1..=4 {
            for col in 0..10 {
                assert_eq!(glyph.get(col, 5 - k), glyph.get(col, 5 + k));
            }
        }
        for row in 0..10 {
            for col in 0..10 {
                assert_eq!(glyph.get(col, row), glyph.get(row, col));
            }
        }
    }

    #[test]
    fn test_circle_on_non_square_grid_is_row_major() {
        let glyph = Glyph::circle("circle", 0.25, GridSpec::new(20, 40)).unwrap();

        assert_eq!(glyph.size(), (10, 20));
        assert_eq!(glyph.get(5, 10), Some(true));
    }

    #[test]
    fn test_circle_rejects_bad_radius() {
        let grid = GridSpec::new(500, 500);

        assert!(Glyph::circle("c", 0.0, grid).is_err());
        assert!(Glyph::circle("c", -0.1, grid).is_err());
        assert!(Glyph::circle("c", f64::NAN, grid).is_err());
        assert!(Glyph::circle("c", 1e12, grid).is_err());
    }

    #[test]
    fn test_empty_glyph_coverage() {
        let glyph = Glyph::from_rows("blank", &["00", "00"]);
        assert_eq!(glyph.coverage(), 0);
        assert_eq!(glyph.set_cells().count(), 0);
    }
}
