//! Palgen - palette generation and PNG color quantization
//!
//! Command-line front end over the `greedy-palette` crate.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
