//! Nearest-color pixel quantization.
//!
//! Every pixel is truncated to the working bit depth and mapped to the
//! index of the closest palette color under [`distance`](crate::distance),
//! lowest index first on ties. Rows are processed in chunks of
//! [`ROW_CHUNK`] on the worker pool; each chunk writes only its own slice of
//! the output, so no merge step is needed.

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::api::{QuantError, QuantResult};
use crate::color::{nearest_index, Rgb};
use crate::grid::PixelGrid;
use crate::palette::ROW_CHUNK;
use crate::pool::build_pool;

/// Map every pixel of `grid` to an index into `palette`.
///
/// `palette` must hold colors at `bit_depth`. Returns one index byte per
/// pixel in row-major order.
///
/// # Errors
///
/// - [`QuantError::InvalidConfig`] for an empty palette
/// - [`QuantError::PaletteTooLarge`] for more than 256 colors
///
/// # Example
///
/// ```
/// use greedy_palette::{quantize_pixels, PixelGrid, Rgb};
///
/// let data = [10, 10, 10, 250, 240, 255];
/// let grid = PixelGrid::new(&data, 2, 1, 3).unwrap();
/// let palette = [Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)];
///
/// let indices = quantize_pixels(&grid, &palette, 8, 1).unwrap();
/// assert_eq!(indices, vec![1, 0]);
/// ```
pub fn quantize_pixels(
    grid: &PixelGrid<'_>,
    palette: &[Rgb],
    bit_depth: u8,
    workers: usize,
) -> QuantResult<Vec<u8>> {
    let pool = build_pool(workers)?;
    quantize_pixels_in(&pool, grid, palette, bit_depth)
}

pub(crate) fn quantize_pixels_in(
    pool: &ThreadPool,
    grid: &PixelGrid<'_>,
    palette: &[Rgb],
    bit_depth: u8,
) -> QuantResult<Vec<u8>> {
    if palette.is_empty() {
        return Err(QuantError::InvalidConfig("cannot quantize to an empty palette".into()));
    }
    if palette.len() > 256 {
        return Err(QuantError::PaletteTooLarge(palette.len()));
    }

    let mut indices = Vec::new();
    indices
        .try_reserve_exact(grid.len())
        .map_err(QuantError::oom("index buffer"))?;
    indices.resize(grid.len(), 0u8);
    if grid.is_empty() {
        return Ok(indices);
    }

    let channels = grid.channels();
    pool.install(|| {
        indices
            .par_chunks_mut(grid.width() * ROW_CHUNK)
            .zip(grid.data().par_chunks(grid.stride() * ROW_CHUNK))
            .for_each(|(out, rows)| {
                for (slot, px) in out.iter_mut().zip(PixelGrid::pixels_of(rows, channels)) {
                    let color = Rgb::quantize_u8(px, bit_depth);
                    *slot = nearest_index(color, palette).unwrap_or(0) as u8;
                }
            });
    });

    Ok(indices)
}
