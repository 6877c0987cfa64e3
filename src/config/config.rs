//! Config file handling

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::GrammarError;
use crate::grammar::DerivationLimits;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "GRAMMAR_VALIDATOR_CONFIG_DIR";

/// grammar-validator configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Entry symbol declared by `[launcher] entry`, if any
    pub entry: Option<String>,
    pub default_options: Vec<String>,
    pub limits: DerivationLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            entry: None,
            default_options: Vec::new(),
            limits: DerivationLimits::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, GrammarError> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load configuration from `config.toml` inside `config_dir`
    ///
    /// A missing file is not an error: the defaults apply.
    pub fn load_from(config_dir: &Path) -> Result<Self, GrammarError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            debug!(path = %config_file.display(), "No config file, using defaults");
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| GrammarError::Config(format!("Failed to read config: {}", e)))?;

        let toml_value: toml::Value = toml::from_str(&content)
            .map_err(|e| GrammarError::Config(format!("Invalid config TOML: {}", e)))?;

        let entry = toml_value
            .get("launcher")
            .and_then(|l| l.get("entry"))
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string());

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let limits = Self::parse_limits(&toml_value)?;

        debug!(path = %config_file.display(), "Loaded config file");

        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            entry,
            default_options,
            limits,
        })
    }

    /// Parse `[derivation]` limits, falling back to defaults for absent keys
    fn parse_limits(toml: &toml::Value) -> Result<DerivationLimits, GrammarError> {
        let mut limits = DerivationLimits::default();
        let section = match toml.get("derivation") {
            Some(s) => s,
            None => return Ok(limits),
        };

        if let Some(depth) = Self::positive_int(section, "max_depth")? {
            limits.max_depth = depth;
        }
        if let Some(states) = Self::positive_int(section, "max_states")? {
            limits.max_states = states;
        }

        Ok(limits)
    }

    fn positive_int(section: &toml::Value, key: &str) -> Result<Option<usize>, GrammarError> {
        let value = match section.get(key) {
            Some(v) => v,
            None => return Ok(None),
        };

        match value.as_integer() {
            Some(n) if n > 0 => Ok(Some(n as usize)),
            _ => Err(GrammarError::Config(format!(
                "derivation.{} must be a positive integer, got {}",
                key, value
            ))),
        }
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }

        dirs::config_dir()
            .map(|p| p.join("grammar-validator"))
            .unwrap_or_else(|| PathBuf::from(".grammar-validator"))
    }
}
