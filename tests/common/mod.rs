//! Common test utilities for grammar-validator integration tests
//!
//! Every command runs against its own empty config directory so a user's
//! real config never leaks into the tests.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Right-linear grammar for a b*: S -> aA | $, A -> bA | b
pub const REGULAR_GRAMMAR: &str = r#"
terminals = ["a", "b"]
non_terminals = ["S", "A"]
start = "S"
rules = ["S -> aA | $", "A -> bA | b"]
"#;

/// a^n b^n
pub const CONTEXT_FREE_GRAMMAR: &str = r#"
terminals = ["a b"]
non_terminals = ["S"]
start = "S"
rules = ["S -> aSb | ab"]
"#;

/// Interactive answers describing REGULAR_GRAMMAR, without the derivation target
pub const REGULAR_SESSION: &str = "a b\nS A\nS\nS -> aA | $\nA -> bA | b\ndone\n";

/// Isolated config directory plus scratch space for grammar files
pub struct TestEnv {
    pub config_dir: TempDir,
    pub work_dir: TempDir,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("Failed to create temp config dir"),
            work_dir: TempDir::new().expect("Failed to create temp work dir"),
        }
    }

    /// Write `config.toml` into the config directory
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.config_dir.path().join("config.toml"), content)
            .expect("Failed to write config");
        self
    }

    /// Write a grammar file and return its path
    pub fn grammar_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write grammar file");
        path
    }

    /// The binary, pointed at this environment's config directory
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_grammar-validator"));
        cmd.env("GRAMMAR_VALIDATOR_CONFIG_DIR", self.config_dir.path());
        cmd.env_remove("GRAMMAR_VALIDATOR_LOG");
        cmd
    }
}
