//! Palette construction parameters.

use crate::api::{QuantError, QuantResult};

/// Rows handed to a worker per scheduling step.
pub const ROW_CHUNK: usize = 16;

/// Configuration for palette construction.
///
/// # Defaults
///
/// - `bit_depth`: 8
/// - `output_bit_depth`: 8
/// - `max_colors`: 256
/// - `skip`: 0
/// - `preselect`: 1
/// - `workers`: 0 (one per available hardware thread)
///
/// # Example
///
/// ```
/// use greedy_palette::PaletteConfig;
///
/// let config = PaletteConfig::new()
///     .bit_depth(5)
///     .output_bit_depth(8)
///     .max_colors(16)
///     .skip(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Working bit depth per channel (1..=8). Source channels are truncated
    /// to this many bits before counting.
    pub bit_depth: u8,

    /// Bit depth of the written palette (`bit_depth..=8`).
    pub output_bit_depth: u8,

    /// Total palette length including skipped slots. `0` sizes the palette
    /// to the exact number of distinct colors plus `skip`.
    pub max_colors: usize,

    /// Leading slots filled with placeholder cyan.
    pub skip: usize,

    /// Slots filled by pure frequency rank before greedy selection.
    /// Clamped to `1..=constructed_len`.
    pub preselect: usize,

    /// Worker threads for the parallel phases. `0` uses the available
    /// hardware parallelism.
    pub workers: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            bit_depth: 8,
            output_bit_depth: 8,
            max_colors: 256,
            skip: 0,
            preselect: 1,
            workers: 0,
        }
    }
}

impl PaletteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn bit_depth(mut self, bits: u8) -> Self {
        self.bit_depth = bits;
        self
    }

    #[inline]
    pub fn output_bit_depth(mut self, bits: u8) -> Self {
        self.output_bit_depth = bits;
        self
    }

    #[inline]
    pub fn max_colors(mut self, n: usize) -> Self {
        self.max_colors = n;
        self
    }

    #[inline]
    pub fn skip(mut self, n: usize) -> Self {
        self.skip = n;
        self
    }

    #[inline]
    pub fn preselect(mut self, n: usize) -> Self {
        self.preselect = n;
        self
    }

    #[inline]
    pub fn workers(mut self, n: usize) -> Self {
        self.workers = n;
        self
    }

    /// Check bit depth ranges.
    ///
    /// An output depth below the working depth would fold distinct palette
    /// entries onto each other, so it is rejected here.
    pub fn validate(&self) -> QuantResult<()> {
        if !(1..=8).contains(&self.bit_depth) {
            return Err(QuantError::InvalidConfig(format!(
                "bit depth must be in 1..=8, got {}",
                self.bit_depth
            )));
        }
        if !(1..=8).contains(&self.output_bit_depth) {
            return Err(QuantError::InvalidConfig(format!(
                "output bit depth must be in 1..=8, got {}",
                self.output_bit_depth
            )));
        }
        if self.bit_depth > self.output_bit_depth {
            return Err(QuantError::InvalidConfig(format!(
                "bit depth ({}) must not exceed output bit depth ({})",
                self.bit_depth, self.output_bit_depth
            )));
        }
        if self.max_colors > 0 && self.skip >= self.max_colors {
            return Err(QuantError::InvalidConfig(format!(
                "skip ({}) leaves no room in a palette of {} colors",
                self.skip, self.max_colors
            )));
        }
        Ok(())
    }

    /// Palette length as written to the output, including skipped slots.
    pub fn full_len(&self, distinct: usize) -> usize {
        if self.max_colors > 0 {
            self.max_colors
        } else {
            distinct + self.skip
        }
    }

    /// Number of slots filled from image content, clamped to `1..=distinct`.
    pub fn constructed_len(&self, distinct: usize) -> QuantResult<usize> {
        let full = self.full_len(distinct);
        let len = full.checked_sub(self.skip).filter(|&n| n >= 1).ok_or_else(|| {
            QuantError::InvalidConfig(format!(
                "palette length ({full}) minus skip ({}) must be at least 1",
                self.skip
            ))
        })?;
        Ok(len.min(distinct))
    }

    /// Worker count with `0` resolved to the available parallelism.
    pub fn resolved_workers(&self) -> usize {
        if self.workers > 0 {
            self.workers
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}
