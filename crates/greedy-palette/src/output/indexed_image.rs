//! IndexedImage: palette indices plus the palette they point into.

use crate::palette::Palette;

/// Output of the pixel quantizer.
///
/// Stores one `u8` palette index per pixel in row-major order, the image
/// dimensions, and the palette at output bit depth.
///
/// # Example
///
/// ```
/// use greedy_palette::{PaletteBuilder, PaletteConfig, PixelGrid};
///
/// let data = [0, 0, 0, 255, 255, 255, 255, 255, 255, 0, 0, 0];
/// let grid = PixelGrid::new(&data, 2, 2, 3).unwrap();
///
/// let result = PaletteBuilder::new(PaletteConfig::new().max_colors(2))
///     .build(&grid)
///     .unwrap();
/// let image = result.quantize(&grid).unwrap();
///
/// assert_eq!(image.indices(), &[0, 1, 1, 0]);
/// assert_eq!(image.to_rgb(), data.to_vec());
/// ```
#[derive(Debug, Clone)]
pub struct IndexedImage {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl IndexedImage {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{})",
            indices.len(),
            width,
            height,
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
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
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index rows, `width` bytes each.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.indices.chunks(self.width.max(1))
    }

    /// Expand to `[R, G, B, ...]` using the palette colors.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// Take the index buffer.
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }
}
