//! Insertion-ordered color frequency table.

use std::collections::HashMap;

use crate::api::{QuantError, QuantResult};
use crate::color::{ColorEntry, Rgb};

/// Capacity a table grows to on its first insertion.
const INITIAL_CAPACITY: usize = 2048;

/// A set of distinct colors with pixel counts.
///
/// Entries keep the order in which their colors were first inserted. A hash
/// index over the packed color makes membership checks O(1) without
/// changing that order, so a table built from a scan lists colors exactly
/// as a linear membership scan would.
///
/// Growth is fallible: running out of memory surfaces as
/// [`QuantError::OutOfMemory`] instead of aborting inside the allocator.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    entries: Vec<ColorEntry>,
    index: HashMap<u32, usize>,
}

impl ColorTable {
    /// Create an empty table. Does not allocate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` more pixels of `color`.
    ///
    /// Increments the existing entry or appends a new one.
    pub fn insert(&mut self, color: Rgb, count: u64) -> QuantResult<()> {
        let key = color.packed();
        if let Some(&i) = self.index.get(&key) {
            self.entries[i].count += count;
            return Ok(());
        }

        if self.entries.len() == self.entries.capacity() {
            let grow = self.entries.len().max(INITIAL_CAPACITY);
            self.entries
                .try_reserve(grow)
                .map_err(QuantError::oom("color table"))?;
        }
        self.index
            .try_reserve(1)
            .map_err(QuantError::oom("color table index"))?;

        self.index.insert(key, self.entries.len());
        self.entries.push(ColorEntry::new(color, count));
        Ok(())
    }

    /// Fold another table into this one, entry by entry, in its order.
    ///
    /// Consumes `other`; its storage is released once merged.
    pub fn merge(&mut self, other: ColorTable) -> QuantResult<()> {
        for entry in other.entries {
            self.insert(entry.color, entry.count)?;
        }
        Ok(())
    }

    /// Count recorded for `color`, if present.
    pub fn count_of(&self, color: Rgb) -> Option<u64> {
        self.index
            .get(&color.packed())
            .map(|&i| self.entries[i].count)
    }

    /// Number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-insertion order.
    #[inline]
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Give up the index and return the entries.
    pub fn into_entries(self) -> Vec<ColorEntry> {
        self.entries
    }
}
