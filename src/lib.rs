//! grammar-validator library interface
//!
//! Classifies formal grammars in the Chomsky hierarchy and searches for
//! derivations of target strings.
//!
//! # Module Organization
//!
//! - [`launcher`] - Entry point resolution (Launcher, Manifest, Entry)
//! - [`core`] - The entry routine: argument parsing and dispatch
//! - [`grammar`] - Grammar model, classification and derivation search
//! - [`input`] - Rule syntax, grammar files and interactive entry
//! - [`output`] - Text and JSON reports
//! - [`signals`] - Interrupt handling (was_interrupted, set_interrupted)
//! - [`errors`] - Error types (GrammarError, Result)
//! - [`status`] - Exit status codes (ExitStatus)

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod grammar;
pub mod input;
pub mod launcher;
pub mod output;
pub mod signals;
pub mod status;
pub mod telemetry;
