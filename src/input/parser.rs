//! Symbol list and production rule parsing
//!
//! Rules use the arrow notation `A -> aA | b`. Symbols are single
//! characters, so whitespace inside a side of a rule carries no meaning and
//! is dropped: `S -> a S b` is the same rule as `S -> aSb`.

use indexmap::IndexMap;

use crate::errors::{GrammarError, Result};

/// Separator between the two sides of a rule
pub const ARROW: &str = "->";

/// Separator between alternatives on the right-hand side
pub const ALTERNATIVE: char = '|';

/// Whitespace-separated symbols; empty tokens are dropped
pub fn parse_symbols(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

fn squeeze(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse `A -> x | y` into its left-hand side and alternatives
pub fn parse_rule(line: &str) -> Result<(String, Vec<String>)> {
    let (lhs, rhs) = line.split_once(ARROW).ok_or_else(|| {
        GrammarError::Parse(format!(
            "invalid rule '{}': expected the form 'A -> aA'",
            line.trim()
        ))
    })?;

    if rhs.contains(ARROW) {
        return Err(GrammarError::Parse(format!(
            "invalid rule '{}': more than one '{}'",
            line.trim(),
            ARROW
        )));
    }

    let lhs = squeeze(lhs);
    if lhs.is_empty() {
        return Err(GrammarError::Parse(format!(
            "invalid rule '{}': missing left-hand side",
            line.trim()
        )));
    }

    let alternatives = rhs
        .split(ALTERNATIVE)
        .map(|alternative| {
            let alternative = squeeze(alternative);
            if alternative.is_empty() {
                Err(GrammarError::Parse(format!(
                    "invalid rule '{}': empty alternative (use '$' for the empty string)",
                    line.trim()
                )))
            } else {
                Ok(alternative)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((lhs, alternatives))
}

/// Add alternatives to a production set; repeated left-hand sides accumulate
pub fn add_rule(productions: &mut IndexMap<String, Vec<String>>, lhs: String, alternatives: Vec<String>) {
    productions.entry(lhs).or_default().extend(alternatives);
}
