pub mod jasc;
pub mod raster;

pub use jasc::{parse_jasc, write_jasc};
pub use raster::{decode_png, encode_indexed, index_bit_depth, optimize, DecodedImage};
