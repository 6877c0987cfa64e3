//! Entry point resolution
//!
//! The package exposes exactly one entry routine. At start-up the launcher
//! reads the symbol declared by the packaging manifest, checks it against
//! that routine, and transfers control to it once with the untouched
//! argument vector. A manifest naming any other symbol fails fast with a
//! diagnostic instead of running anything.
//!
//! `Launcher::launch` takes `self` by value, so a launcher cannot be
//! started twice.

use tracing::{debug, warn};

use crate::config::Config;
use crate::context::Environment;
use crate::core;
use crate::errors::{GrammarError, Result};
use crate::status::ExitStatus;

/// Fully-qualified symbol of the package's entry routine
pub const MAIN_ENTRY_SYMBOL: &str = "grammar_validator::core::run";

pub type EntryRoutine = fn(Vec<String>, Environment) -> ExitStatus;

/// A named entry routine
pub struct Entry<F> {
    pub symbol: &'static str,
    pub routine: F,
}

impl<F> Entry<F>
where
    F: FnOnce(Vec<String>, Environment) -> ExitStatus,
{
    pub fn new(symbol: &'static str, routine: F) -> Self {
        Self { symbol, routine }
    }
}

/// The entry routine this package is built around
pub fn main_entry() -> Entry<EntryRoutine> {
    Entry::new(MAIN_ENTRY_SYMBOL, core::run as EntryRoutine)
}

/// Packaging manifest: which symbol to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub main_entry: String,
}

impl Manifest {
    pub fn new(main_entry: impl Into<String>) -> Self {
        Self {
            main_entry: main_entry.into(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(MAIN_ENTRY_SYMBOL)
    }

    /// The manifest declared by `[launcher] entry`, or the built-in one
    pub fn from_config(config: &Config) -> Self {
        match config.entry.as_deref() {
            Some(entry) if !entry.is_empty() => Self::new(entry),
            _ => Self::builtin(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::builtin()
    }
}

pub struct Launcher<F> {
    manifest: Manifest,
    entry: Entry<F>,
}

impl<F> Launcher<F>
where
    F: FnOnce(Vec<String>, Environment) -> ExitStatus,
{
    pub fn new(manifest: Manifest, entry: Entry<F>) -> Self {
        Self { manifest, entry }
    }

    /// Resolve the declared symbol to this package's entry routine
    pub fn resolve(&self) -> Result<&'static str> {
        if self.manifest.main_entry == self.entry.symbol {
            Ok(self.entry.symbol)
        } else {
            Err(GrammarError::EntryPointNotFound {
                symbol: self.manifest.main_entry.clone(),
                available: self.entry.symbol,
            })
        }
    }

    /// Run the entry routine once and return its exit status
    pub fn launch(self, args: Vec<String>, env: Environment) -> ExitStatus {
        match self.resolve() {
            Ok(symbol) => {
                debug!(symbol, "Entry point resolved");
                (self.entry.routine)(args, env)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitStatus::Error
            }
        }
    }
}

/// Start the packaged program with the manifest from the config file
///
/// The config is read once here and handed to the routine inside `env`.
/// An unreadable config means defaults and the built-in manifest.
pub fn launch(args: Vec<String>, env: Environment) -> ExitStatus {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Config::default()
        }
    };
    let manifest = Manifest::from_config(&config);

    Launcher::new(manifest, main_entry()).launch(args, env.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};

    const TEST_SYMBOL: &str = "tests::entry";

    fn noop(_args: Vec<String>, _env: Environment) -> ExitStatus {
        ExitStatus::Success
    }

    #[test]
    fn test_builtin_manifest_resolves() {
        let launcher = Launcher::new(Manifest::builtin(), main_entry());
        assert_eq!(launcher.resolve().unwrap(), MAIN_ENTRY_SYMBOL);
    }

    #[test]
    fn test_missing_symbol_names_it() {
        let launcher = Launcher::new(Manifest::new("com.example.Missing"), main_entry());
        let err = launcher.resolve().unwrap_err();
        assert!(matches!(err, GrammarError::EntryPointNotFound { .. }));
        let msg = err.to_string();
        assert!(msg.contains("com.example.Missing"));
        assert!(msg.contains(MAIN_ENTRY_SYMBOL));
    }

    #[test]
    fn test_noop_entry_exits_zero() {
        let launcher = Launcher::new(Manifest::new(TEST_SYMBOL), Entry::new(TEST_SYMBOL, noop));
        assert_eq!(launcher.launch(Vec::new(), Environment::default()), ExitStatus::Success);
    }

    #[test]
    fn test_entry_status_is_returned() {
        let entry = Entry::new(TEST_SYMBOL, |_args: Vec<String>, _env: Environment| ExitStatus::Error);
        let launcher = Launcher::new(Manifest::new(TEST_SYMBOL), entry);
        assert_eq!(launcher.launch(Vec::new(), Environment::default()), ExitStatus::Error);
    }

    #[test]
    fn test_unresolved_entry_never_runs() {
        let ran = Cell::new(false);
        let entry = Entry::new(TEST_SYMBOL, |_args: Vec<String>, _env: Environment| {
            ran.set(true);
            ExitStatus::Success
        });
        let launcher = Launcher::new(Manifest::new("com.example.Missing"), entry);
        assert_eq!(launcher.launch(Vec::new(), Environment::default()), ExitStatus::Error);
        assert!(!ran.get());
    }

    #[test]
    fn test_routine_receives_launcher_config() {
        let mut config = Config::default();
        config.limits.max_depth = 7;
        let entry = Entry::new(TEST_SYMBOL, |_args: Vec<String>, env: Environment| {
            if env.config.limits.max_depth == 7 {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            }
        });
        let env = Environment::default().with_config(config);
        assert_eq!(Launcher::new(Manifest::new(TEST_SYMBOL), entry).launch(Vec::new(), env), ExitStatus::Success);
    }

    #[test]
    fn test_manifest_from_config() {
        let mut config = Config::default();
        assert_eq!(Manifest::from_config(&config), Manifest::builtin());

        config.entry = Some(String::new());
        assert_eq!(Manifest::from_config(&config), Manifest::builtin());

        config.entry = Some("com.example.Missing".to_string());
        assert_eq!(Manifest::from_config(&config).main_entry, "com.example.Missing");
    }

    proptest! {
        #[test]
        fn prop_args_pass_through_unmodified(args in prop::collection::vec(".*", 0..8)) {
            let seen = RefCell::new(None);
            let entry = Entry::new(TEST_SYMBOL, |received: Vec<String>, _env: Environment| {
                *seen.borrow_mut() = Some(received);
                ExitStatus::Success
            });
            let status = Launcher::new(Manifest::new(TEST_SYMBOL), entry)
                .launch(args.clone(), Environment::default());

            prop_assert_eq!(status, ExitStatus::Success);
            prop_assert_eq!(seen.into_inner(), Some(args));
        }

        #[test]
        fn prop_resolution_is_deterministic(symbol in "[a-zA-Z_.:]{1,40}") {
            let first = Launcher::new(Manifest::new(symbol.clone()), Entry::new(TEST_SYMBOL, noop)).resolve().is_ok();
            for _ in 0..3 {
                let again = Launcher::new(Manifest::new(symbol.clone()), Entry::new(TEST_SYMBOL, noop)).resolve().is_ok();
                prop_assert_eq!(again, first);
            }
            prop_assert_eq!(first, symbol == TEST_SYMBOL);
        }
    }
}
