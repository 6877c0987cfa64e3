//! CLI argument parsing

pub mod args;

pub use args::{Args, OutputFormat, Shell};
