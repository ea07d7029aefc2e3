//! Grid compositor - stamps glyph placements onto an overlap-count grid.
//!
//! Placements are applied in document order. Each set cell of a glyph adds
//! one to the output cell under it, so overlapping glyphs accumulate.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::types::{GridSpec, ParsedDocument};

/// What to do with glyph cells that land outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Drop out-of-range cells and keep the rest of the glyph.
    #[default]
    Clip,

    /// Fail with a bounds error if any placement rectangle leaves the grid.
    Reject,
}

/// A grid of overlap counts (row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl OutputGrid {
    /// Create an all-zero grid.
    pub fn new(grid: GridSpec) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            cells: vec![0; grid.area()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Count at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }

    /// Largest count in the grid.
    pub fn max(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Number of cells covered at least once.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c > 0).count()
    }

    /// Boolean mask of cells whose count reaches `threshold` (row-major).
    pub fn mask(&self, threshold: u32) -> Vec<Vec<bool>> {
        self.rows()
            .map(|row| row.iter().map(|&c| c >= threshold).collect())
            .collect()
    }

    fn bump(&mut self, x: usize, y: usize) {
        let cell = &mut self.cells[y * self.width + x];
        *cell = cell.saturating_add(1);
    }
}

/// Stamps every placement of a document onto a fresh [`OutputGrid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    boundary: BoundaryPolicy,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Composite all placements.
    ///
    /// Fails with [`GridError::Reference`] for placements naming a missing
    /// glyph, and with [`GridError::Bounds`] under [`BoundaryPolicy::Reject`].
    /// No grid is returned on failure.
    pub fn compose(&self, doc: &ParsedDocument) -> Result<OutputGrid> {
        let grid = doc.grid;
        if !grid.within_limit() {
            return Err(GridError::Build {
                message: format!("Grid {} is too large to composite", grid),
                help: Some(format!("Grids are limited to {} cells", GridSpec::MAX_CELLS)),
            });
        }
        let mut output = OutputGrid::new(grid);
        let mut clipped = 0usize;

        for (index, placement) in doc.placements.iter().enumerate() {
            let Some(glyph) = doc.glyph(&placement.glyph) else {
                return Err(GridError::Reference {
                    index,
                    name: placement.glyph.key().to_string(),
                });
            };

            let (ox, oy) = placement.origin.resolve(grid);
            let (cols, rows) = glyph.size();

            if self.boundary == BoundaryPolicy::Reject && !grid.fits(ox, oy, cols, rows) {
                return Err(GridError::Bounds {
                    index,
                    x: ox,
                    y: oy,
                    width: cols,
                    height: rows,
                    grid_width: grid.width,
                    grid_height: grid.height,
                });
            }

            for (col, row) in glyph.set_cells() {
                let cell = ox
                    .checked_add(col as i64)
                    .zip(oy.checked_add(row as i64))
                    .filter(|&(x, y)| grid.contains(x, y));
                match cell {
                    Some((x, y)) => output.bump(x as usize, y as usize),
                    None => clipped += 1,
                }
            }
        }

        if clipped > 0 {
            debug!(cells = clipped, grid:% = grid; "Clipped glyph cells outside the grid");
        }

        Ok(output)
    }
}
