//! Color types and the distance metric
//!
//! - [`Rgb`]: a quantized channel triple at the working bit depth
//! - [`ColorEntry`]: a distinct color with its pixel count
//! - [`distance`]: the imbalance-weighted Manhattan heuristic

mod distance;
mod rgb;

pub use distance::{distance, nearest_index, MAX_DISTANCE};
pub use rgb::{channel_max, ColorEntry, Rgb};
