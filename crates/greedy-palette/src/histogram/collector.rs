//! Parallel color histogram collection.
//!
//! Rows are scanned in chunks of [`ROW_CHUNK`] on the worker pool. Each
//! parallel job folds its rows into a private [`ColorTable`]; nothing is
//! shared or locked during the scan. The partial tables come back in row
//! order and are merged one after another into a single accumulator.
//!
//! Every partial covers a contiguous, ascending row range, so merging them
//! in order lists colors by their first appearance in the image. The
//! merged table is therefore identical for any worker count.

use rayon::prelude::*;
use rayon::ThreadPool;

use super::ColorTable;
use crate::api::QuantResult;
use crate::color::Rgb;
use crate::grid::PixelGrid;
use crate::palette::ROW_CHUNK;
use crate::pool::build_pool;

/// Count the distinct `bit_depth` colors of `grid` using `workers` threads.
///
/// The sum of all counts in the result equals `grid.len()`.
///
/// # Example
///
/// ```
/// use greedy_palette::{collect_colors, PixelGrid, Rgb};
///
/// let data = [255, 0, 0, 255, 0, 0, 0, 0, 255];
/// let grid = PixelGrid::new(&data, 3, 1, 3).unwrap();
/// let table = collect_colors(&grid, 8, 2).unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.count_of(Rgb::new(255, 0, 0)), Some(2));
/// ```
pub fn collect_colors(grid: &PixelGrid<'_>, bit_depth: u8, workers: usize) -> QuantResult<ColorTable> {
    let pool = build_pool(workers)?;
    collect_colors_in(&pool, grid, bit_depth)
}

/// Histogram collection on an existing pool.
pub(crate) fn collect_colors_in(
    pool: &ThreadPool,
    grid: &PixelGrid<'_>,
    bit_depth: u8,
) -> QuantResult<ColorTable> {
    if grid.is_empty() {
        return Ok(ColorTable::new());
    }

    let channels = grid.channels();
    let chunk_bytes = grid.stride() * ROW_CHUNK;

    let partials: Vec<ColorTable> = pool.install(|| {
        grid.data()
            .par_chunks(chunk_bytes)
            .try_fold(ColorTable::new, |mut table, rows| -> QuantResult<ColorTable> {
                for px in PixelGrid::pixels_of(rows, channels) {
                    table.insert(Rgb::quantize_u8(px, bit_depth), 1)?;
                }
                Ok(table)
            })
            .collect::<QuantResult<Vec<_>>>()
    })?;

    tracing::debug!(
        partials = partials.len(),
        threads = pool.current_num_threads(),
        "scanned rows"
    );

    merge_tables(partials)
}

/// Merge partial tables sequentially, in the given order.
pub fn merge_tables(partials: Vec<ColorTable>) -> QuantResult<ColorTable> {
    let mut partials = partials.into_iter();
    let mut merged = partials.next().unwrap_or_default();
    for partial in partials {
        merged.merge(partial)?;
    }
    Ok(merged)
}
