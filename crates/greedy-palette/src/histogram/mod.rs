//! Color frequency histograms
//!
//! [`ColorTable`] holds distinct colors with counts; [`collect_colors`]
//! builds one from a [`PixelGrid`](crate::PixelGrid) in parallel.

mod collector;
mod table;

pub use collector::{collect_colors, merge_tables};
pub(crate) use collector::collect_colors_in;
pub use table::ColorTable;
