//! Borrowed view over decoded 8-bit pixel rows.

use crate::api::{QuantError, QuantResult};

/// A rectangular, row-major grid of 8-bit samples.
///
/// Each pixel has `channels` samples; the first three are treated as R, G, B
/// and any further channels (alpha) are ignored.
///
/// # Example
///
/// ```
/// use greedy_palette::PixelGrid;
///
/// let data = [255, 0, 0, 255, 0, 255, 0, 255];
/// let grid = PixelGrid::new(&data, 2, 1, 4).unwrap();
/// assert_eq!(grid.pixel(1, 0), [0, 255, 0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PixelGrid<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    channels: usize,
}

impl<'a> PixelGrid<'a> {
    /// Wrap a sample buffer.
    ///
    /// # Errors
    ///
    /// - [`QuantError::TooFewChannels`] if `channels < 3`
    /// - [`QuantError::InvalidGrid`] if `data.len() != width * height * channels`
    pub fn new(data: &'a [u8], width: usize, height: usize, channels: usize) -> QuantResult<Self> {
        if channels < 3 {
            return Err(QuantError::TooFewChannels(channels));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels));
        if expected != Some(data.len()) {
            return Err(QuantError::InvalidGrid {
                len: data.len(),
                width,
                height,
                channels,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total pixel count.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * self.channels
    }

    /// The raw sample buffer.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// RGB samples of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride() + x * self.channels;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Iterate the RGB samples of a run of packed rows (as produced by chunking
    /// [`data`](Self::data) by [`stride`](Self::stride)).
    #[inline]
    pub(crate) fn pixels_of(rows: &[u8], channels: usize) -> impl Iterator<Item = [u8; 3]> + '_ {
        rows.chunks_exact(channels).map(|px| [px[0], px[1], px[2]])
    }
}
