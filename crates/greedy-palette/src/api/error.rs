//! Unified error type for the greedy-palette public API.
//!
//! Every fallible operation in the crate returns [`QuantError`]. None of
//! them are retried: a caller that receives one should abort the run.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced while building or applying a palette.
#[derive(Debug, Error)]
pub enum QuantError {
    /// A color table could not grow.
    #[error("out of memory while growing {what}: {source}")]
    OutOfMemory {
        /// Which table failed to grow
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    /// Configuration violates a constraint (bit depths, skip too large).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Image has no pixels.
    #[error("image has no pixels")]
    EmptyImage,

    /// Pixel buffer does not match the declared dimensions.
    #[error("pixel buffer of {len} bytes does not match {width}x{height} with {channels} channels")]
    InvalidGrid {
        len: usize,
        width: usize,
        height: usize,
        channels: usize,
    },

    /// Fewer than three channels per pixel.
    #[error("expected at least 3 channels per pixel, got {0}")]
    TooFewChannels(usize),

    /// Palette cannot be addressed with one index byte per pixel.
    #[error("palette has {0} entries, at most 256 can be addressed by an indexed image")]
    PaletteTooLarge(usize),

    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl QuantError {
    pub(crate) fn oom(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| QuantError::OutOfMemory { what, source }
    }
}

/// Result alias used across the crate.
pub type QuantResult<T> = Result<T, QuantError>;
