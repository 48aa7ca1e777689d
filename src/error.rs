use std::path::PathBuf;

use greedy_palette::QuantError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Quantization error: {0}")]
    Quant(#[from] QuantError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedPng(String),

    #[error("Config parse error in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid palette file: {0}")]
    PaletteFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quant_error_wraps() {
        let error: AppError = QuantError::EmptyImage.into();
        assert!(matches!(error, AppError::Quant(QuantError::EmptyImage)));
        assert!(error.to_string().starts_with("Quantization error: "));
    }

    #[test]
    fn test_read_error_names_path() {
        let error = AppError::Read {
            path: PathBuf::from("in.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to read in.png: missing");
    }

    #[test]
    fn test_unsupported_png() {
        let error = AppError::UnsupportedPng("2 channels".to_string());
        assert_eq!(error.to_string(), "Unsupported PNG layout: 2 channels");
    }

    #[test]
    fn test_palette_format() {
        let error = AppError::PaletteFormat("missing header".to_string());
        assert_eq!(error.to_string(), "Invalid palette file: missing header");
    }
}
