//! Public API for the greedy-palette crate.
//!
//! This module provides the high-level API: [`PaletteBuilder`] and
//! [`QuantError`] unified error type.

mod builder;
mod error;

pub use builder::{PaletteBuilder, PaletteResult};
pub use error::{QuantError, QuantResult};
