//! greedy-palette: frequency-weighted farthest-point palette construction
//!
//! This library reduces a full-color image to a bounded palette and can remap
//! every pixel to its nearest palette entry.
//!
//! # Quick Start
//!
//! The [`PaletteBuilder`] is the primary entry point:
//!
//! ```
//! use greedy_palette::{PaletteBuilder, PaletteConfig, PixelGrid};
//!
//! // 2x2 RGB image
//! let data = [
//!     255, 0, 0,   0, 255, 0,
//!     0, 0, 255,   255, 255, 255,
//! ];
//! let grid = PixelGrid::new(&data, 2, 2, 3).unwrap();
//!
//! let config = PaletteConfig::new().max_colors(4);
//! let result = PaletteBuilder::new(config).build(&grid).unwrap();
//! let image = result.quantize(&grid).unwrap();
//!
//! assert_eq!(result.palette().len(), 4);
//! assert_eq!(image.indices().len(), 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelGrid (8-bit RGB/RGBA rows)
//!     |
//!     v
//! collect_colors        per-job ColorTables over 16-row chunks,
//!     |                 merged in row order
//!     v
//! select_palette        stable frequency sort, skip placeholders,
//!     |                 preselect, greedy min_distance * count
//!     v
//! Palette::rescaled     bit replication to the output depth
//!     |
//!     v (optional)
//! quantize_pixels       nearest entry per pixel, 16-row chunks
//! ```
//!
//! # Working Depth
//!
//! Colors are counted and matched at `bit_depth` bits per channel: each
//! 8-bit source channel loses its `8 - bit_depth` low bits. The palette is
//! widened to `output_bit_depth` only for output, so the quantizer always
//! compares values at the same depth the histogram was built at.
//!
//! # Distance
//!
//! Selection cost and nearest-color matching share one heuristic, see
//! [`distance`]. It penalizes channel imbalance on top of a Manhattan
//! distance and is deliberately not a perceptual metric.
//!
//! # Parallelism
//!
//! Histogram collection and quantization run on a rayon pool sized by
//! [`PaletteConfig::workers`]. Results do not depend on the worker count:
//! the merged table lists colors in first-appearance order for any split.
//! Merging and greedy selection run on the calling thread.

pub mod api;
pub mod color;
mod grid;
pub mod histogram;
pub mod output;
pub mod palette;
mod pool;
pub mod quantize;
pub mod rescale;


pub use api::{PaletteBuilder, PaletteResult, QuantError, QuantResult};
pub use color::{channel_max, distance, nearest_index, ColorEntry, Rgb};
pub use grid::PixelGrid;
pub use histogram::{collect_colors, merge_tables, ColorTable};
pub use output::IndexedImage;
pub use palette::{select_palette, Palette, PaletteConfig, PaletteSlot, SlotKind};
pub use quantize::quantize_pixels;
pub use rescale::{rescale_channel, rescale_color};
