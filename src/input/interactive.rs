//! Interactive grammar entry
//!
//! Reads a grammar one prompt at a time: terminals, non-terminals, the start
//! symbol, then rules until `done` or end of input. Prompts and rule
//! diagnostics go to separate writers so the caller can route them away
//! from machine-readable output.

use std::io::{BufRead, Write};

use indexmap::IndexMap;
use tracing::debug;

use super::parser::{add_rule, parse_rule, parse_symbols};
use crate::errors::{GrammarError, Result};
use crate::grammar::Grammar;

/// Line that ends rule entry (case-insensitive)
pub const DONE: &str = "done";

pub struct Session<R, P, E> {
    input: R,
    prompts: P,
    errors: E,
}

impl<R: BufRead, P: Write, E: Write> Session<R, P, E> {
    pub fn new(input: R, prompts: P, errors: E) -> Self {
        Self {
            input,
            prompts,
            errors,
        }
    }

    /// Next input line without its line terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompts, "{}", prompt)?;
        self.prompts.flush()?;
        self.read_line()
    }

    fn ask_required(&mut self, prompt: &str, what: &'static str) -> Result<String> {
        self.ask(prompt)?.ok_or(GrammarError::UnexpectedEof(what))
    }

    pub fn read_grammar(&mut self) -> Result<Grammar> {
        let terminals = self.ask_required(
            "Enter terminal symbols separated by spaces (e.g., a b): ",
            "terminal symbols",
        )?;
        let non_terminals = self.ask_required(
            "Enter non-terminal symbols separated by spaces (e.g., S A B): ",
            "non-terminal symbols",
        )?;
        let start = self.ask_required(
            "Enter the start symbol (must be one of the non-terminals): ",
            "start symbol",
        )?;

        writeln!(
            self.prompts,
            "Enter production rules one at a time in the form 'A -> aA | b', type '{}' to finish:",
            DONE
        )?;

        let mut productions = IndexMap::new();
        while let Some(line) = self.ask("Enter rule: ")? {
            let line = line.trim();
            if line.eq_ignore_ascii_case(DONE) {
                break;
            }
            if line.is_empty() {
                continue;
            }

            match parse_rule(line) {
                Ok((lhs, alternatives)) => add_rule(&mut productions, lhs, alternatives),
                Err(e) => writeln!(self.errors, "{}", e)?,
            }
        }

        debug!(rules = productions.len(), "Read grammar interactively");

        Grammar::new(
            parse_symbols(&terminals),
            parse_symbols(&non_terminals),
            start,
            productions,
        )
    }

    /// Target string for the derivation search; `None` skips the search
    pub fn read_target(&mut self) -> Result<Option<String>> {
        let target = self.ask("Enter value to find derivation steps for: ")?;
        Ok(target
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }
}
