use std::path::Path;

use greedy_palette::PaletteConfig;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Quantization settings loaded from a YAML file and/or the command line.
///
/// Every field is optional so that a file and a set of CLI flags can be
/// layered; unset fields fall back to the defaults in [`Self::resolve`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct QuantConfig {
    /// Working bits per channel (1..=8)
    #[serde(default)]
    pub bit_depth: Option<u8>,

    /// Bits per channel written to the output palette (defaults to `bit_depth`)
    #[serde(default)]
    pub output_bit_depth: Option<u8>,

    /// Palette size including placeholders, 0 for unbounded
    #[serde(default)]
    pub max_colors: Option<usize>,

    /// Leading placeholder slots
    #[serde(default)]
    pub skip: Option<usize>,

    /// Most frequent colors taken before greedy selection
    #[serde(default)]
    pub preselect: Option<usize>,

    /// Worker threads, 0 for available parallelism
    #[serde(default)]
    pub workers: Option<usize>,
}

fn default_bit_depth() -> u8 {
    8
}

fn default_max_colors() -> usize {
    256
}

fn default_preselect() -> usize {
    1
}

impl QuantConfig {
    /// Parse a YAML config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merged_with(self, overrides: QuantConfig) -> Self {
        Self {
            bit_depth: overrides.bit_depth.or(self.bit_depth),
            output_bit_depth: overrides.output_bit_depth.or(self.output_bit_depth),
            max_colors: overrides.max_colors.or(self.max_colors),
            skip: overrides.skip.or(self.skip),
            preselect: overrides.preselect.or(self.preselect),
            workers: overrides.workers.or(self.workers),
        }
    }

    /// Fill in defaults and validate.
    pub fn resolve(&self) -> AppResult<PaletteConfig> {
        let bit_depth = self.bit_depth.unwrap_or_else(default_bit_depth);
        let config = PaletteConfig::new()
            .bit_depth(bit_depth)
            .output_bit_depth(self.output_bit_depth.unwrap_or(bit_depth))
            .max_colors(self.max_colors.unwrap_or_else(default_max_colors))
            .skip(self.skip.unwrap_or(0))
            .preselect(self.preselect.unwrap_or_else(default_preselect))
            .workers(self.workers.unwrap_or(0));
        config.validate()?;
        Ok(config)
    }
}
