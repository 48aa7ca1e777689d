//! Bit-depth rescaling by bit replication.
//!
//! Widening `c` from `d` to `o` bits shifts it up and repeats its high bits
//! into the vacated low bits:
//!
//! ```text
//! c' = (c << (o - d)) | (c >> (2d - o))
//! ```
//!
//! When `2d < o` one copy is not enough to fill the low bits, so the
//! pattern is repeated until all `o` bits are covered. Either way `0` maps
//! to `0` and `2^d - 1` maps to `2^o - 1`, with intermediate values spread
//! close to linearly.

use crate::color::Rgb;

/// Rescale one channel value from `from` bits to `to` bits (`from <= to`).
///
/// # Example
///
/// ```
/// use greedy_palette::rescale_channel;
///
/// assert_eq!(rescale_channel(15, 4, 8), 255);
/// assert_eq!(rescale_channel(8, 4, 8), 0x88);
/// assert_eq!(rescale_channel(1, 1, 8), 255);
/// ```
#[inline]
pub fn rescale_channel(c: u8, from: u8, to: u8) -> u8 {
    debug_assert!(from >= 1 && from <= to && to <= 8);
    if from == to {
        return c;
    }
    let c = c as u32;
    let (from, to) = (from as i32, to as i32);
    let mut out = 0u32;
    let mut filled = 0;
    while filled < to {
        let shift = to - from - filled;
        out |= if shift >= 0 {
            c << shift
        } else {
            c >> -shift
        };
        filled += from;
    }
    out as u8
}

/// Rescale all three channels of `color`.
#[inline]
pub fn rescale_color(color: Rgb, from: u8, to: u8) -> Rgb {
    Rgb::new(
        rescale_channel(color.r, from, to),
        rescale_channel(color.g, from, to),
        rescale_channel(color.b, from, to),
    )
}
