//! Configuration loading

#[allow(clippy::module_inception)]
mod config;

pub use config::{Config, ImportConfig, CONFIG_DIR_ENV};
