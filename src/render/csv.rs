//! CSV output: one line per grid row, comma-separated counts.

use std::fs;
use std::path::Path;

use crate::error::{GridError, Result};

use super::OutputGrid;

/// Format the grid as CSV text.
pub fn grid_to_csv(grid: &OutputGrid) -> String {
    let mut out = String::with_capacity(grid.width() * grid.height() * 2);
    for row in grid.rows() {
        let fields: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Write the grid to a CSV file.
pub fn write_csv(grid: &OutputGrid, path: &Path) -> Result<()> {
    fs::write(path, grid_to_csv(grid)).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write CSV: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridSpec;

    #[test]
    fn test_zero_grid_csv() {
        let grid = OutputGrid::new(GridSpec::new(3, 2));
        assert_eq!(grid_to_csv(&grid), "0,0,0\n0,0,0\n");
    }

    #[test]
    fn test_write_csv() {
        let grid = OutputGrid::new(GridSpec::new(1, 1));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&grid, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "0\n");
    }
}
