//! Quantized RGB samples and counted table entries.

/// A pixel's channel triple at some working bit depth.
///
/// Channel values live in `0..=(2^bit_depth - 1)`. The type itself does not
/// carry the depth; callers track it through [`PaletteConfig`](crate::PaletteConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a sample from raw channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize an 8-bit source pixel to `bit_depth` bits per channel by
    /// discarding the low-order bits.
    ///
    /// # Example
    ///
    /// ```
    /// use greedy_palette::Rgb;
    ///
    /// let c = Rgb::quantize_u8([0xff, 0x80, 0x0f], 4);
    /// assert_eq!(c, Rgb::new(0x0f, 0x08, 0x00));
    /// ```
    #[inline]
    pub fn quantize_u8(px: [u8; 3], bit_depth: u8) -> Self {
        let shift = 8 - bit_depth as u32;
        Self {
            r: px[0] >> shift,
            g: px[1] >> shift,
            b: px[2] >> shift,
        }
    }

    /// The placeholder color for skipped palette slots: maximum-brightness
    /// cyan `(0, max, max)` at the given depth.
    #[inline]
    pub fn placeholder(bit_depth: u8) -> Self {
        let max = channel_max(bit_depth);
        Self::new(0, max, max)
    }

    /// Pack into a single integer key (`0x00RRGGBB`).
    #[inline]
    pub(crate) fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Channels as an `[r, g, b]` array.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

/// Largest channel value representable at `bit_depth` bits.
#[inline]
pub fn channel_max(bit_depth: u8) -> u8 {
    (0xffu16 >> (8 - bit_depth as u32)) as u8
}

/// A distinct quantized color and the number of source pixels that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    /// The quantized color.
    pub color: Rgb,
    /// Number of source pixels that quantized to `color`.
    pub count: u64,
}

impl ColorEntry {
    #[inline]
    pub fn new(color: Rgb, count: u64) -> Self {
        Self { color, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_full_depth_is_identity() {
        let c = Rgb::quantize_u8([12, 200, 255], 8);
        assert_eq!(c, Rgb::new(12, 200, 255));
    }

    #[test]
    fn test_quantize_drops_low_bits() {
        assert_eq!(Rgb::quantize_u8([0b1010_1111, 0, 255], 3), Rgb::new(0b101, 0, 7));
        assert_eq!(Rgb::quantize_u8([127, 128, 255], 1), Rgb::new(0, 1, 1));
    }

    #[test]
    fn test_channel_max() {
        assert_eq!(channel_max(1), 1);
        assert_eq!(channel_max(5), 31);
        assert_eq!(channel_max(8), 255);
    }

    #[test]
    fn test_placeholder_is_cyan() {
        assert_eq!(Rgb::placeholder(8), Rgb::new(0, 255, 255));
        assert_eq!(Rgb::placeholder(4), Rgb::new(0, 15, 15));
    }

    #[test]
    fn test_packed_is_unique_per_color() {
        assert_ne!(Rgb::new(1, 0, 0).packed(), Rgb::new(0, 1, 0).packed());
        assert_ne!(Rgb::new(0, 1, 0).packed(), Rgb::new(0, 0, 1).packed());
        assert_eq!(Rgb::new(0x12, 0x34, 0x56).packed(), 0x123456);
    }
}
