//! File-level quantization pipeline.
//!
//! Ties PNG decoding, palette construction and the two output formats
//! together so the CLI only has to resolve settings and pick a command.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use greedy_palette::{IndexedImage, PaletteBuilder, PaletteConfig, PaletteResult};

use crate::codec::{decode_png, encode_indexed, optimize, write_jasc, DecodedImage};
use crate::error::{AppError, AppResult};

/// Images above this many pixels get a slow-run warning.
pub const LARGE_IMAGE_PIXELS: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct QuantizePipeline {
    config: PaletteConfig,
}

impl QuantizePipeline {
    pub fn new(config: PaletteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// Read and decode a PNG file.
    pub fn load_image(&self, path: &Path) -> AppResult<DecodedImage> {
        let file = File::open(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let image = decode_png(BufReader::new(file))?;

        tracing::info!(
            path = %path.display(),
            width = image.width,
            height = image.height,
            channels = image.channels,
            "Decoded image"
        );
        if image.pixel_count() > LARGE_IMAGE_PIXELS {
            tracing::warn!(
                pixels = image.pixel_count(),
                "Large image, this may take a while"
            );
        }
        Ok(image)
    }

    /// Collect colors and select a palette for `image`.
    pub fn build_palette(&self, image: &DecodedImage) -> AppResult<PaletteResult> {
        let grid = image.grid()?;
        let result = PaletteBuilder::new(self.config.clone()).build(&grid)?;
        Ok(result)
    }

    /// Write the output-depth palette as JASC-PAL.
    pub fn write_palette_file(&self, path: &Path, result: &PaletteResult) -> AppResult<()> {
        let file = File::create(path).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        write_jasc(BufWriter::new(file), result.output_palette())?;

        tracing::info!(
            path = %path.display(),
            entries = result.output_palette().full_len(),
            "Wrote palette"
        );
        Ok(())
    }

    /// Remap `image` onto the palette and write it as an indexed PNG.
    pub fn write_indexed_png(
        &self,
        path: &Path,
        image: &DecodedImage,
        result: &PaletteResult,
        optimize_output: bool,
    ) -> AppResult<IndexedImage> {
        let indexed = result.quantize(&image.grid()?)?;

        let mut png_bytes = encode_indexed(&indexed)?;
        if optimize_output {
            png_bytes = optimize(png_bytes);
        }
        std::fs::write(path, &png_bytes).map_err(|source| AppError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            bytes = png_bytes.len(),
            colors = indexed.palette().len(),
            "Wrote indexed PNG"
        );
        Ok(indexed)
    }

    /// `input` PNG to JASC-PAL `output`.
    pub fn run_palette(&self, input: &Path, output: &Path) -> AppResult<PaletteResult> {
        let image = self.load_image(input)?;
        let result = self.build_palette(&image)?;
        self.write_palette_file(output, &result)?;
        Ok(result)
    }

    /// `input` PNG to indexed PNG `output`.
    pub fn run_quantize(
        &self,
        input: &Path,
        output: &Path,
        optimize_output: bool,
    ) -> AppResult<IndexedImage> {
        let image = self.load_image(input)?;
        let result = self.build_palette(&image)?;
        self.write_indexed_png(output, &image, &result, optimize_output)
    }
}
