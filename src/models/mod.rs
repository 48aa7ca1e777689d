pub mod config;

pub use config::QuantConfig;
