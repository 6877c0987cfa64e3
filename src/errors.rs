//! Error types for grammar-validator

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for grammar-validator
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot read grammar file {}: {source}", .path.display())]
    GrammarFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid grammar: {0}")]
    InvalidGrammar(String),

    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("entry point not found: {symbol} (this package provides {available})")]
    EntryPointNotFound {
        symbol: String,
        available: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GrammarError>;
