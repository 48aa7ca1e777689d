//! The channel-imbalance distance heuristic.
//!
//! Used both for greedy palette selection and for nearest-color lookup.
//! Given absolute channel deltas `dr, dg, db`:
//!
//! ```text
//! d = dr + dg + db + |dr - dg| + |dr - db| + |dg - db|
//! ```
//!
//! This is a Manhattan distance with an extra penalty for deltas that are
//! unevenly spread across channels, so a hue shift costs more than a
//! uniform brightness shift of the same total magnitude. It is not a
//! perceptual metric and must not be swapped for one: palettes are compared
//! against reference output bit for bit.

use super::Rgb;

/// Largest value [`distance`] can return for 8-bit channels.
pub const MAX_DISTANCE: u32 = 4 * 255;

/// Distance between two colors at the same bit depth.
///
/// # Example
///
/// ```
/// use greedy_palette::{distance, Rgb};
///
/// // Uniform shift: plain Manhattan.
/// assert_eq!(distance(Rgb::new(0, 0, 0), Rgb::new(10, 10, 10)), 30);
/// // Single-channel shift of the same magnitude costs more.
/// assert_eq!(distance(Rgb::new(0, 0, 0), Rgb::new(30, 0, 0)), 90);
/// ```
#[inline]
pub fn distance(a: Rgb, b: Rgb) -> u32 {
    let dr = (a.r as i32 - b.r as i32).abs();
    let dg = (a.g as i32 - b.g as i32).abs();
    let db = (a.b as i32 - b.b as i32).abs();
    (dr + dg + db + (dr - dg).abs() + (dr - db).abs() + (dg - db).abs()) as u32
}

/// Index of the entry in `palette` nearest to `color`.
///
/// Ties resolve to the lowest index. Returns `None` for an empty palette.
#[inline]
pub fn nearest_index(color: Rgb, palette: &[Rgb]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, &entry) in palette.iter().enumerate() {
        let d = distance(color, entry);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => {
                if d == 0 {
                    return Some(i);
                }
                best = Some((i, d));
            }
        }
    }
    best.map(|(i, _)| i)
}
