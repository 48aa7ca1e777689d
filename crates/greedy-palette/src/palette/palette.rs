//! Ordered palette produced by the selector.

use crate::color::Rgb;
use crate::rescale::rescale_color;

/// How a palette slot was filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Reserved leading slot holding placeholder cyan.
    Placeholder,
    /// Taken by frequency rank alone.
    Preselected,
    /// Chosen by the greedy step with the given `min_distance * count` cost.
    Selected {
        /// Cost at the moment of selection
        cost: u64,
    },
}

/// One palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSlot {
    pub color: Rgb,
    /// Source pixel count (zero for placeholders).
    pub count: u64,
    pub kind: SlotKind,
}

/// An ordered palette.
///
/// The first [`skip`](Palette::skip) slots are placeholders; the rest come
/// from image content, most frequent first, then in greedy selection order.
/// [`full_len`](Palette::full_len) is the advertised length, which may exceed
/// [`len`](Palette::len) when the image had fewer distinct colors than
/// requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    slots: Vec<PaletteSlot>,
    bit_depth: u8,
    skip: usize,
    full_len: usize,
}

impl Palette {
    pub(crate) fn from_parts(
        slots: Vec<PaletteSlot>,
        bit_depth: u8,
        skip: usize,
        full_len: usize,
    ) -> Self {
        Self {
            slots,
            bit_depth,
            skip,
            full_len,
        }
    }

    /// Number of constructed slots, placeholders included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Bit depth of the stored channel values.
    #[inline]
    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }

    /// Number of leading placeholder slots.
    #[inline]
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Advertised palette length (`max_colors`, or distinct colors plus skip).
    #[inline]
    pub fn full_len(&self) -> usize {
        self.full_len
    }

    #[inline]
    pub fn slots(&self) -> &[PaletteSlot] {
        &self.slots
    }

    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.slots[idx].color
    }

    /// Slot colors in order.
    pub fn colors(&self) -> Vec<Rgb> {
        self.slots.iter().map(|s| s.color).collect()
    }

    /// Slot colors padded with placeholders up to [`full_len`](Self::full_len).
    pub fn padded_colors(&self) -> Vec<Rgb> {
        let mut colors = self.colors();
        let fill = Rgb::placeholder(self.bit_depth);
        colors.resize(self.full_len.max(colors.len()), fill);
        colors
    }

    /// Copy of this palette with every channel rescaled to `output_bit_depth`.
    ///
    /// Placeholders are rescaled like any other color, so they stay at
    /// `(0, max, max)` for the new depth.
    pub fn rescaled(&self, output_bit_depth: u8) -> Palette {
        let slots = self
            .slots
            .iter()
            .map(|s| PaletteSlot {
                color: rescale_color(s.color, self.bit_depth, output_bit_depth),
                ..*s
            })
            .collect();
        Palette {
            slots,
            bit_depth: output_bit_depth,
            skip: self.skip,
            full_len: self.full_len,
        }
    }
}
