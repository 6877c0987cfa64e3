//! Configuration loading

#[allow(clippy::module_inception)]
pub mod config;

pub use config::{Config, CONFIG_DIR_ENV};
