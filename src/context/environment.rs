//! Environment struct (stdin/stdout/etc.)

use std::io::{self, Stderr, Stdin, Stdout};

use crate::config::Config;

/// Execution environment handed to the entry routine
pub struct Environment {
    pub stdin: Stdin,
    pub stdout: Stdout,
    pub stderr: Stderr,
    pub program_name: String,
    /// Configuration loaded once by the launcher
    pub config: Config,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
            stderr: io::stderr(),
            program_name: env!("CARGO_PKG_NAME").to_string(),
            config: Config::default(),
        }
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("program_name", &self.program_name)
            .field("config", &self.config)
            .finish()
    }
}
