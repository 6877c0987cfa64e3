//! Grammar files (TOML)
//!
//! ```toml
//! terminals = ["a", "b"]
//! non_terminals = ["S", "A"]
//! start = "S"
//! rules = [
//!     "S -> aA | $",
//!     "A -> bA | b",
//! ]
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use super::parser::{add_rule, parse_rule, parse_symbols};
use crate::errors::{GrammarError, Result};
use crate::grammar::Grammar;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarFile {
    /// Terminal symbols; an entry may hold several space-separated symbols
    pub terminals: Vec<String>,
    pub non_terminals: Vec<String>,
    pub start: String,
    #[serde(default)]
    pub rules: Vec<String>,
}

impl GrammarFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GrammarError::GrammarFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn into_grammar(self) -> Result<Grammar> {
        let mut productions = IndexMap::new();
        for (index, rule) in self.rules.iter().enumerate() {
            let (lhs, alternatives) = parse_rule(rule).map_err(|e| match e {
                GrammarError::Parse(msg) => GrammarError::Parse(format!("rule {}: {}", index + 1, msg)),
                other => other,
            })?;
            add_rule(&mut productions, lhs, alternatives);
        }

        Grammar::new(
            self.terminals.iter().flat_map(|s| parse_symbols(s)),
            self.non_terminals.iter().flat_map(|s| parse_symbols(s)),
            self.start,
            productions,
        )
    }
}
