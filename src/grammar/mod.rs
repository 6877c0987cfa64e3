//! Formal grammar model
//!
//! A [`Grammar`] is the quadruple (VT, VN, S, P) of formal language theory:
//! terminal symbols, non-terminal symbols, a start symbol and production
//! rules. Symbols are kept in declaration order so every listing the
//! program prints is deterministic.
//!
//! - [`classify`] places a grammar in the Chomsky hierarchy
//! - [`derive`] searches for a derivation of a target string

pub mod classify;
pub mod derive;

pub use classify::GrammarType;
pub use derive::{Derivation, DerivationLimits};

use indexmap::{IndexMap, IndexSet};

use crate::errors::{GrammarError, Result};

/// Right-hand side marker for the empty string
pub const EPSILON: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    terminals: IndexSet<String>,
    non_terminals: IndexSet<String>,
    start: String,
    productions: IndexMap<String, Vec<String>>,
}

impl Grammar {
    /// Build a grammar, checking that its symbol sets are consistent
    pub fn new<T, N>(
        terminals: T,
        non_terminals: N,
        start: impl Into<String>,
        productions: IndexMap<String, Vec<String>>,
    ) -> Result<Self>
    where
        T: IntoIterator<Item = String>,
        N: IntoIterator<Item = String>,
    {
        let terminals: IndexSet<String> = terminals.into_iter().collect();
        let non_terminals: IndexSet<String> = non_terminals.into_iter().collect();
        let start: String = start.into();
        let start = start.trim().to_string();

        if non_terminals.is_empty() {
            return Err(GrammarError::InvalidGrammar(
                "no non-terminal symbols declared".to_string(),
            ));
        }

        if terminals.contains(EPSILON) || non_terminals.contains(EPSILON) {
            return Err(GrammarError::InvalidGrammar(format!(
                "'{}' is reserved for the empty string and cannot be declared as a symbol",
                EPSILON
            )));
        }

        if let Some(shared) = terminals.iter().find(|t| non_terminals.contains(*t)) {
            return Err(GrammarError::InvalidGrammar(format!(
                "symbol '{}' is declared both terminal and non-terminal",
                shared
            )));
        }

        if !non_terminals.contains(&start) {
            return Err(GrammarError::InvalidGrammar(format!(
                "start symbol '{}' is not one of the non-terminals",
                start
            )));
        }

        Ok(Self {
            terminals,
            non_terminals,
            start,
            productions,
        })
    }

    pub fn terminals(&self) -> &IndexSet<String> {
        &self.terminals
    }

    pub fn non_terminals(&self) -> &IndexSet<String> {
        &self.non_terminals
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    /// All `(lhs, rhs)` pairs in declaration order
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.productions.iter().flat_map(|(lhs, alternatives)| {
            alternatives
                .iter()
                .map(move |rhs| (lhs.as_str(), rhs.as_str()))
        })
    }

    /// Rules rendered as `A -> rhs`, one per alternative
    pub fn display_rules(&self) -> Vec<String> {
        self.rules()
            .map(|(lhs, rhs)| format!("{} -> {}", lhs, rhs))
            .collect()
    }

    fn is_terminal(&self, symbol: &str) -> bool {
        self.terminals.contains(symbol)
    }

    fn is_non_terminal(&self, symbol: &str) -> bool {
        self.non_terminals.contains(symbol)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a grammar from compact literals, e.g. `("a b", "S A", "S", &[("S", &["aA"])])`
    pub fn grammar(terminals: &str, non_terminals: &str, start: &str, rules: &[(&str, &[&str])]) -> Grammar {
        let mut productions: IndexMap<String, Vec<String>> = IndexMap::new();
        for (lhs, alternatives) in rules {
            productions
                .entry(lhs.to_string())
                .or_default()
                .extend(alternatives.iter().map(|s| s.to_string()));
        }
        Grammar::new(
            terminals.split_whitespace().map(String::from),
            non_terminals.split_whitespace().map(String::from),
            start,
            productions,
        )
        .unwrap()
    }
}
