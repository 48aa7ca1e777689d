//! PaletteBuilder -- the primary entry point for the crate.
//!
//! [`PaletteBuilder`] runs histogram collection and palette selection on a
//! dedicated worker pool and hands back a [`PaletteResult`], which can then
//! remap pixels on the same pool.

use rayon::ThreadPool;

use super::QuantResult;
use crate::grid::PixelGrid;
use crate::histogram::collect_colors_in;
use crate::output::IndexedImage;
use crate::palette::{select_palette, Palette, PaletteConfig};
use crate::pool::build_pool;
use crate::quantize::quantize_pixels_in;

/// Fluent front end over [`PaletteConfig`].
///
/// # Example
///
/// ```
/// use greedy_palette::{PaletteBuilder, PaletteConfig, PixelGrid, Rgb};
///
/// let data = [0u8, 0, 0, 255, 0, 0];
/// let grid = PixelGrid::new(&data, 2, 1, 3).unwrap();
///
/// let result = PaletteBuilder::new(PaletteConfig::new().bit_depth(4))
///     .workers(2)
///     .build(&grid)
///     .unwrap();
///
/// assert_eq!(result.distinct_colors(), 2);
/// assert_eq!(result.palette().color(1), Rgb::new(15, 0, 0));
/// assert_eq!(result.output_palette().color(1), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    config: PaletteConfig,
}

impl PaletteBuilder {
    pub fn new(config: PaletteConfig) -> Self {
        Self { config }
    }

    /// Override the worker count (`0` = available parallelism).
    #[inline]
    pub fn workers(mut self, n: usize) -> Self {
        self.config.workers = n;
        self
    }

    #[inline]
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Collect the histogram of `grid` and select a palette.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config, an empty image, an unusable `skip`, or
    /// allocation failure. See [`QuantError`](super::QuantError).
    pub fn build(&self, grid: &PixelGrid<'_>) -> QuantResult<PaletteResult> {
        self.config.validate()?;

        let workers = self.config.resolved_workers();
        let pool = build_pool(workers)?;

        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            channels = grid.channels(),
            workers,
            "collecting colors"
        );
        let table = collect_colors_in(&pool, grid, self.config.bit_depth)?;
        let distinct_colors = table.len();
        tracing::info!(distinct_colors, bit_depth = self.config.bit_depth, "collected colors");

        let palette = select_palette(table, &self.config)?;
        let output_palette = palette.rescaled(self.config.output_bit_depth);
        tracing::info!(
            entries = palette.len(),
            full_len = palette.full_len(),
            "built palette"
        );

        Ok(PaletteResult {
            config: self.config.clone(),
            distinct_colors,
            palette,
            output_palette,
            pool,
        })
    }
}

/// A selected palette, at both working and output bit depth.
#[derive(Debug)]
pub struct PaletteResult {
    config: PaletteConfig,
    distinct_colors: usize,
    palette: Palette,
    output_palette: Palette,
    pool: ThreadPool,
}

impl PaletteResult {
    /// Number of distinct colors found at the working depth.
    #[inline]
    pub fn distinct_colors(&self) -> usize {
        self.distinct_colors
    }

    /// The palette at the working bit depth.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The palette rescaled to the output bit depth.
    #[inline]
    pub fn output_palette(&self) -> &Palette {
        &self.output_palette
    }

    #[inline]
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Remap every pixel of `grid` to its nearest palette entry.
    ///
    /// Matching happens at the working depth; the returned image carries the
    /// output-depth palette.
    pub fn quantize(&self, grid: &PixelGrid<'_>) -> QuantResult<IndexedImage> {
        let indices = quantize_pixels_in(
            &self.pool,
            grid,
            &self.palette.colors(),
            self.config.bit_depth,
        )?;
        tracing::info!(pixels = indices.len(), "quantized pixels");
        Ok(IndexedImage::new(
            indices,
            grid.width(),
            grid.height(),
            self.output_palette.clone(),
        ))
    }

    /// Split into the output-depth palette.
    pub fn into_output_palette(self) -> Palette {
        self.output_palette
    }
}
