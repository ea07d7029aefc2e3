//! Grid dimensions.

use std::fmt;

/// Declared size of the occupancy grid, in cells.
///
/// Both dimensions are non-zero; the parser rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    /// Number of columns (`nx`).
    pub width: usize,

    /// Number of rows (`ny`).
    pub height: usize,
}

impl GridSpec {
    /// Largest grid the parser accepts, in cells (one `u32` count each).
    pub const MAX_CELLS: usize = 1 << 26;

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Whether the grid is small enough to allocate.
    pub fn within_limit(&self) -> bool {
        self.width
            .checked_mul(self.height)
            .is_some_and(|cells| cells <= Self::MAX_CELLS)
    }

    /// Whether a signed cell coordinate lies inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Whether a `cols` x `rows` rectangle at (x, y) lies entirely inside
    /// the grid. Rectangles whose far edge overflows `i64` never fit.
    pub fn fits(&self, x: i64, y: i64, cols: usize, rows: usize) -> bool {
        let end = |start: i64, len: usize| {
            i64::try_from(len)
                .ok()
                .and_then(|len| start.checked_add(len))
        };
        match (end(x, cols), end(y, rows)) {
            (Some(end_x), Some(end_y)) => {
                x >= 0
                    && y >= 0
                    && end_x as u64 <= self.width as u64
                    && end_y as u64 <= self.height as u64
            }
            _ => false,
        }
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
