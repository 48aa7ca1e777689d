//! Palette construction
//!
//! [`PaletteConfig`] holds the parameters, [`select_palette`] runs the greedy
//! selection over a [`ColorTable`](crate::ColorTable), and [`Palette`] is the
//! ordered result.

mod config;
mod palette;
mod selector;

pub use config::{PaletteConfig, ROW_CHUNK};
pub use palette::{Palette, PaletteSlot, SlotKind};
pub use selector::select_palette;
