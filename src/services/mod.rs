pub mod pipeline;

pub use pipeline::{QuantizePipeline, LARGE_IMAGE_PIXELS};
