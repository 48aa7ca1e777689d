//! Greedy farthest-point palette selection.
//!
//! 1. Sort the table by count, descending. The sort is stable, so equal
//!    counts keep table order.
//! 2. Emit `skip` placeholder slots.
//! 3. Emit the `preselect` most frequent colors as they are.
//! 4. Repeatedly take the unselected color maximizing
//!    `min_distance_to_selected * count`, where "selected" includes the
//!    placeholders and preselected colors. The first candidate in frequency
//!    order wins ties.
//!
//! A running minimum distance per candidate is refreshed against each new
//! pick, so step 4 costs `O(k * n)` for `k` picks over `n` colors.

use super::{Palette, PaletteConfig, PaletteSlot, SlotKind};
use crate::api::{QuantError, QuantResult};
use crate::color::{distance, ColorEntry, Rgb};
use crate::histogram::ColorTable;

/// Build a palette from a merged color table.
///
/// The result has `constructed_len + skip` slots, or `distinct + skip` when
/// the table has fewer colors than requested.
///
/// # Errors
///
/// - [`QuantError::EmptyImage`] if the table is empty
/// - [`QuantError::InvalidConfig`] if `skip` leaves no room for a color
/// - [`QuantError::OutOfMemory`] if working storage cannot be allocated
///
/// # Example
///
/// ```
/// use greedy_palette::{select_palette, ColorTable, PaletteConfig, Rgb};
///
/// let mut table = ColorTable::new();
/// table.insert(Rgb::new(0, 0, 0), 10).unwrap();
/// table.insert(Rgb::new(1, 1, 1), 9).unwrap();
/// table.insert(Rgb::new(255, 255, 255), 1).unwrap();
///
/// let palette = select_palette(table, &PaletteConfig::new().max_colors(2)).unwrap();
///
/// // Black by frequency, then white: far enough away to beat the
/// // more frequent near-black.
/// assert_eq!(palette.colors(), vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
/// ```
pub fn select_palette(table: ColorTable, config: &PaletteConfig) -> QuantResult<Palette> {
    if table.is_empty() {
        return Err(QuantError::EmptyImage);
    }

    let distinct = table.len();
    let full_len = config.full_len(distinct);
    let constructed = config.constructed_len(distinct)?;
    let preselect = config.preselect.clamp(1, constructed);

    let mut sorted = table.into_entries();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    let mut slots: Vec<PaletteSlot> = Vec::new();
    slots
        .try_reserve_exact(config.skip + constructed)
        .map_err(QuantError::oom("palette"))?;

    let placeholder = Rgb::placeholder(config.bit_depth);
    for _ in 0..config.skip {
        push_slot(&mut slots, placeholder, 0, SlotKind::Placeholder);
    }
    for entry in &sorted[..preselect] {
        push_slot(&mut slots, entry.color, entry.count, SlotKind::Preselected);
    }

    let mut selector = GreedySelector::new(&sorted, preselect, &slots)?;
    while slots.len() < config.skip + constructed {
        let Some((idx, cost)) = selector.next_pick() else {
            break;
        };
        let entry = sorted[idx];
        push_slot(&mut slots, entry.color, entry.count, SlotKind::Selected { cost });
    }

    tracing::debug!(
        distinct,
        full_len,
        constructed = slots.len() - config.skip,
        preselect,
        "palette selected"
    );

    Ok(Palette::from_parts(slots, config.bit_depth, config.skip, full_len))
}

fn push_slot(slots: &mut Vec<PaletteSlot>, color: Rgb, count: u64, kind: SlotKind) {
    match kind {
        SlotKind::Selected { cost } => tracing::debug!(
            slot = slots.len() + 1,
            r = color.r,
            g = color.g,
            b = color.b,
            count,
            cost,
            "selected"
        ),
        SlotKind::Preselected => tracing::debug!(
            slot = slots.len() + 1,
            r = color.r,
            g = color.g,
            b = color.b,
            count,
            "preselected"
        ),
        SlotKind::Placeholder => tracing::debug!(
            slot = slots.len() + 1,
            r = color.r,
            g = color.g,
            b = color.b,
            "placeholder"
        ),
    }
    slots.push(PaletteSlot { color, count, kind });
}

/// Candidate bookkeeping for step 4.
struct GreedySelector<'a> {
    sorted: &'a [ColorEntry],
    used: Vec<bool>,
    /// Distance from each candidate to its nearest selected color.
    min_dist: Vec<u32>,
}

impl<'a> GreedySelector<'a> {
    fn new(sorted: &'a [ColorEntry], preselect: usize, selected: &[PaletteSlot]) -> QuantResult<Self> {
        let mut used = Vec::new();
        used.try_reserve_exact(sorted.len())
            .map_err(QuantError::oom("selection flags"))?;
        used.resize(sorted.len(), false);
        used[..preselect].fill(true);

        let mut min_dist = Vec::new();
        min_dist
            .try_reserve_exact(sorted.len())
            .map_err(QuantError::oom("selection distances"))?;
        min_dist.extend(sorted.iter().map(|e| {
            selected
                .iter()
                .map(|s| distance(e.color, s.color))
                .min()
                .unwrap_or(u32::MAX)
        }));

        Ok(Self {
            sorted,
            used,
            min_dist,
        })
    }

    /// Pick the highest-cost unused candidate, mark it used, and fold its
    /// color into the running distances. `None` once every color is used.
    fn next_pick(&mut self) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for (i, entry) in self.sorted.iter().enumerate() {
            if self.used[i] {
                continue;
            }
            let cost = self.min_dist[i] as u64 * entry.count;
            match best {
                Some((_, best_cost)) if cost <= best_cost => {}
                _ => best = Some((i, cost)),
            }
        }

        let (idx, cost) = best?;
        self.used[idx] = true;
        let picked = self.sorted[idx].color;
        for (i, entry) in self.sorted.iter().enumerate() {
            if !self.used[i] {
                let d = distance(entry.color, picked);
                if d < self.min_dist[i] {
                    self.min_dist[i] = d;
                }
            }
        }
        Some((idx, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(entries: &[([u8; 3], u64)]) -> ColorTable {
        let mut t = ColorTable::new();
        for &(c, n) in entries {
            t.insert(Rgb::from(c), n).unwrap();
        }
        t
    }

    #[test]
    fn test_empty_table_is_error() {
        let result = select_palette(ColorTable::new(), &PaletteConfig::new());
        assert!(matches!(result, Err(QuantError::EmptyImage)));
    }

    #[test]
    fn test_preselect_takes_most_frequent() {
        let t = table(&[([1, 1, 1], 2), ([2, 2, 2], 50), ([3, 3, 3], 20), ([200, 0, 0], 1)]);
        let p = select_palette(t, &PaletteConfig::new().max_colors(3).preselect(2)).unwrap();
        assert_eq!(p.color(0), Rgb::new(2, 2, 2));
        assert_eq!(p.color(1), Rgb::new(3, 3, 3));
        assert_eq!(p.slots()[1].kind, SlotKind::Preselected);
        // Distant red outweighs the near-grey despite its count.
        assert_eq!(p.color(2), Rgb::new(200, 0, 0));
    }

    #[test]
    fn test_preselect_zero_behaves_like_one() {
        let entries = [([0, 0, 0], 5), ([50, 50, 50], 4), ([255, 0, 255], 1)];
        let a = select_palette(table(&entries), &PaletteConfig::new().preselect(0)).unwrap();
        let b = select_palette(table(&entries), &PaletteConfig::new().preselect(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_preselect_clamped_to_constructed_len() {
        let entries = [([0, 0, 0], 5), ([50, 50, 50], 4), ([255, 0, 255], 1)];
        let p = select_palette(table(&entries), &PaletteConfig::new().max_colors(2).preselect(10)).unwrap();
        assert_eq!(p.len(), 2);
        assert!(p.slots().iter().all(|s| s.kind == SlotKind::Preselected));
    }

    #[test]
    fn test_cost_tie_goes_to_first_in_frequency_order() {
        // Both candidates are 30 away from black with equal counts.
        let t = table(&[([0, 0, 0], 9), ([10, 0, 0], 3), ([0, 10, 0], 3)]);
        let p = select_palette(t, &PaletteConfig::new().max_colors(2)).unwrap();
        assert_eq!(p.color(1), Rgb::new(10, 0, 0));
    }

    #[test]
    fn test_placeholders_count_as_selected() {
        // With a cyan placeholder, a cyan-ish color has a low cost even
        // though it is far from the preselected black.
        let t = table(&[([0, 0, 0], 10), ([0, 250, 250], 5), ([120, 0, 0], 5)]);
        let cfg = PaletteConfig::new().max_colors(3).skip(1);
        let p = select_palette(t, &cfg).unwrap();
        assert_eq!(p.color(0), Rgb::new(0, 255, 255));
        assert_eq!(p.color(2), Rgb::new(120, 0, 0));
    }

    #[test]
    fn test_zero_cost_candidate_still_selected() {
        // Working-depth cyan duplicates the placeholder: distance 0.
        let t = table(&[([0, 0, 0], 10), ([0, 255, 255], 5)]);
        let p = select_palette(t, &PaletteConfig::new().max_colors(3).skip(1)).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.slots()[2].kind, SlotKind::Selected { cost: 0 });
    }

    #[test]
    fn test_short_palette_when_colors_run_out() {
        let t = table(&[([0, 0, 0], 1), ([9, 9, 9], 1)]);
        let p = select_palette(t, &PaletteConfig::new().max_colors(16).skip(2)).unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.full_len(), 16);
    }

    #[test]
    fn test_unbounded_uses_every_color() {
        let t = table(&[([0, 0, 0], 1), ([9, 9, 9], 7), ([3, 3, 3], 2)]);
        let p = select_palette(t, &PaletteConfig::new().max_colors(0).skip(1)).unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.full_len(), 4);
    }

    #[test]
    fn test_skip_too_large() {
        let t = table(&[([0, 0, 0], 1)]);
        let result = select_palette(t, &PaletteConfig::new().max_colors(2).skip(2));
        assert!(matches!(result, Err(QuantError::InvalidConfig(_))));
    }

    #[test]
    fn test_costs_are_non_increasing_for_equal_counts() {
        let entries: Vec<([u8; 3], u64)> = (0..20u8).map(|i| ([i * 12, 255 - i * 12, i * 5], 1)).collect();
        let p = select_palette(table(&entries), &PaletteConfig::new().max_colors(10)).unwrap();
        let costs: Vec<u64> = p
            .slots()
            .iter()
            .filter_map(|s| match s.kind {
                SlotKind::Selected { cost } => Some(cost),
                _ => None,
            })
            .collect();
        assert_eq!(costs.len(), 9);
        assert!(costs.windows(2).all(|w| w[0] >= w[1]));
    }
}
