//! PNG decoding to 8-bit RGB(A) and indexed PNG encoding.

use std::io::{Cursor, Read};

use greedy_palette::{IndexedImage, PixelGrid};

use crate::error::{AppError, AppResult};

/// A decoded image normalized to 8-bit RGB or RGBA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    /// 3 (RGB) or 4 (RGBA)
    pub channels: usize,
    pub data: Vec<u8>,
}

impl DecodedImage {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Borrow as a pixel grid for the quantizer.
    pub fn grid(&self) -> AppResult<PixelGrid<'_>> {
        Ok(PixelGrid::new(
            &self.data,
            self.width,
            self.height,
            self.channels,
        )?)
    }
}

/// Decode a PNG into 8-bit RGB or RGBA.
///
/// 16-bit samples are stripped to 8 bits, palette and low-bit grayscale
/// images are expanded, tRNS becomes an alpha channel, and grayscale is
/// widened to RGB.
pub fn decode_png<R: Read>(reader: R) -> AppResult<DecodedImage> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedPng(format!(
            "expected 8-bit samples after expansion, got {:?}",
            info.bit_depth
        )));
    }

    let (channels, data) = match info.color_type {
        png::ColorType::Rgb => (3, buf),
        png::ColorType::Rgba => (4, buf),
        png::ColorType::Grayscale => (3, buf.iter().flat_map(|&v| [v, v, v]).collect()),
        png::ColorType::GrayscaleAlpha => (
            4,
            buf.chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
        ),
        png::ColorType::Indexed => {
            return Err(AppError::UnsupportedPng(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    Ok(DecodedImage {
        width: info.width as usize,
        height: info.height as usize,
        channels,
        data,
    })
}

/// PNG bit depth for a palette of `len` entries.
pub fn index_bit_depth(len: usize) -> u8 {
    match len {
        0..=2 => 1,
        3..=4 => 2,
        5..=16 => 4,
        _ => 8,
    }
}

/// Encode an indexed image as a palette PNG (color type 3).
///
/// The PLTE holds the image palette as-is; bit depth follows
/// [`index_bit_depth`].
pub fn encode_indexed(image: &IndexedImage) -> AppResult<Vec<u8>> {
    let palette = image.palette();
    if palette.is_empty() || palette.len() > 256 {
        return Err(AppError::UnsupportedPng(format!(
            "palette of {} entries cannot be stored in PLTE",
            palette.len()
        )));
    }
    let width = u32::try_from(image.width())
        .map_err(|_| AppError::UnsupportedPng(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| AppError::UnsupportedPng(format!("height {} too large", image.height())))?;

    let bits = index_bit_depth(palette.len());
    let plte: Vec<u8> = palette.colors().iter().flat_map(|c| c.to_bytes()).collect();
    let packed = if bits < 8 {
        pack_nbits(image.indices(), image.width(), bits)
    } else {
        image.indices().to_vec()
    };

    let bit_depth = match bits {
        1 => png::BitDepth::One,
        2 => png::BitDepth::Two,
        4 => png::BitDepth::Four,
        _ => png::BitDepth::Eight,
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_palette(plte);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&packed)?;
    }
    Ok(buf.into_inner())
}

/// Re-compress PNG bytes with oxipng, keeping the input if that fails.
pub fn optimize(png_bytes: Vec<u8>) -> Vec<u8> {
    let options = oxipng::Options {
        strip: oxipng::StripChunks::Safe,
        optimize_alpha: false,
        ..Default::default()
    };
    match oxipng::optimize_from_memory(&png_bytes, &options) {
        Ok(optimized) => {
            tracing::debug!(before = png_bytes.len(), after = optimized.len(), "optimized PNG");
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}

/// Pack one index per pixel into MSB-first N-bit rows (1, 2 or 4 bits).
fn pack_nbits(indices: &[u8], width: usize, bits: u8) -> Vec<u8> {
    let per_byte = 8 / bits as usize;
    let row_bytes = width.div_ceil(per_byte);
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(row_bytes * (indices.len() / width.max(1)));

    for row in indices.chunks(width.max(1)) {
        for group in row.chunks(per_byte) {
            let mut byte = 0u8;
            for (i, &idx) in group.iter().enumerate() {
                byte |= (idx & mask) << (8 - bits as usize - i * bits as usize);
            }
            packed.push(byte);
        }
    }

    packed
}
