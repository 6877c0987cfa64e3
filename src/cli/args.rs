//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// grammar-validator - classify a formal grammar and search for derivations
///
/// Without GRAMMAR_FILE the grammar is read interactively from stdin.
#[derive(Parser, Debug, Clone)]
#[command(name = "grammar-validator", version, about, long_about = None)]
pub struct Args {
    /// Grammar file (TOML) to read instead of prompting
    #[arg(value_name = "GRAMMAR_FILE")]
    pub grammar_file: Option<PathBuf>,

    /// Search for a derivation of TARGET ('$' for the empty string)
    #[arg(short = 'd', long = "derive", value_name = "TARGET")]
    pub derive: Option<String>,

    /// Longest derivation to explore, in sentential forms
    #[arg(long = "max-depth", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_depth: Option<u64>,

    /// Distinct sentential forms to expand before giving up
    #[arg(long = "max-states", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_states: Option<u64>,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when no derivation of the target is found
    #[arg(long = "check-derivation", action = ArgAction::SetTrue)]
    pub check_derivation: bool,

    /// Show traceback on error
    #[arg(long = "traceback", action = ArgAction::SetTrue)]
    pub traceback: bool,

    /// Debug mode (implies --traceback)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    /// Generate shell completions for the specified shell
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum, hide = true)]
    pub generate_completions: Option<Shell>,
}

/// Shell types for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// A single JSON document
    Json,
}
