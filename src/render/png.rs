//! PNG output for composited grids.
//!
//! Renders overlap counts through a [`DensityRamp`] with optional integer
//! scaling.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{GridError, Result};
use crate::types::{Colour, DensityRamp};

use super::OutputGrid;

/// Largest image written, in pixels.
pub const MAX_PIXELS: u64 = 1 << 28;

/// Colour the grid into a pixel matrix (row-major: pixels[y][x]).
pub fn colourize(grid: &OutputGrid, ramp: &DensityRamp) -> Vec<Vec<Colour>> {
    let max = grid.max();
    grid.rows()
        .map(|row| row.iter().map(|&count| ramp.colour(count, max)).collect())
        .collect()
}

/// Write a composited grid to a PNG file.
///
/// # Arguments
///
/// * `grid` - The composited grid
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = one pixel per cell)
/// * `ramp` - Count-to-colour mapping
pub fn write_png(grid: &OutputGrid, path: &Path, scale: u32, ramp: &DensityRamp) -> Result<()> {
    let scale = scale.max(1);

    let too_large = || GridError::Build {
        message: format!(
            "A {}x{} grid at scale {} is too large for a PNG",
            grid.width(),
            grid.height(),
            scale
        ),
        help: Some(format!("Images are limited to {} pixels; use a smaller --scale", MAX_PIXELS)),
    };
    let scaled = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(scale))
            .ok_or_else(too_large)
    };
    let width = scaled(grid.width())?;
    let height = scaled(grid.height())?;
    if width as u64 * height as u64 > MAX_PIXELS {
        return Err(too_large());
    }

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in colourize(grid, ramp).iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x as u32 * scale + sx, y as u32 * scale + sy, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
