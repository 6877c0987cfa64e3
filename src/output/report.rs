//! Classification and derivation reports

use std::io::{self, Write};

use serde::Serialize;

use crate::grammar::{Derivation, Grammar, GrammarType, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct RuleReport {
    pub lhs: String,
    pub rhs: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DerivationReport {
    pub target: String,
    pub outcome: &'static str,
    pub steps: Vec<String>,
}

impl DerivationReport {
    pub fn new(target: &str, derivation: &Derivation) -> Self {
        let steps = match derivation {
            Derivation::Found(steps) => steps.clone(),
            _ => Vec::new(),
        };
        Self {
            target: target.to_string(),
            outcome: derivation.outcome(),
            steps,
        }
    }
}

/// Everything the program reports about one grammar
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub terminals: Vec<String>,
    pub non_terminals: Vec<String>,
    pub start: String,
    pub rules: Vec<RuleReport>,
    pub grammar_type: u8,
    pub type_name: &'static str,
    pub regular: bool,
    pub derivation: Option<DerivationReport>,
}

impl Report {
    pub fn new(grammar: &Grammar, grammar_type: GrammarType) -> Self {
        Self {
            terminals: grammar.terminals().iter().cloned().collect(),
            non_terminals: grammar.non_terminals().iter().cloned().collect(),
            start: grammar.start().to_string(),
            rules: grammar
                .rules()
                .map(|(lhs, rhs)| RuleReport {
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                })
                .collect(),
            grammar_type: grammar_type.level(),
            type_name: grammar_type.name(),
            regular: grammar_type == GrammarType::Regular,
            derivation: None,
        }
    }

    pub fn with_derivation(mut self, target: &str, derivation: &Derivation) -> Self {
        self.derivation = Some(DerivationReport::new(target, derivation));
        self
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> crate::errors::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Print the rules followed by the grammar's place in the hierarchy
pub fn write_classification<W: Write>(
    out: &mut W,
    grammar: &Grammar,
    grammar_type: GrammarType,
) -> io::Result<()> {
    for rule in grammar.display_rules() {
        writeln!(out, "{}", rule)?;
    }

    if grammar_type == GrammarType::Regular {
        writeln!(out, "It's type 3")?;
    } else {
        writeln!(out, "It's not type 3")?;
    }
    writeln!(out, "Grammar type: {}", grammar_type)
}

pub fn write_derivation<W: Write>(out: &mut W, target: &str, derivation: &Derivation) -> io::Result<()> {
    match derivation {
        Derivation::Found(steps) => {
            writeln!(out, "Derivation steps:")?;
            for step in steps {
                let step = if step.is_empty() { EPSILON } else { step.as_str() };
                writeln!(out, "{}", step)?;
            }
            Ok(())
        }
        Derivation::DepthExceeded => writeln!(out, "Max depth reached. Derivation stopped."),
        Derivation::StateLimitReached => writeln!(out, "State limit reached. Derivation stopped."),
        Derivation::NotFound => writeln!(out, "No valid derivation found for: {}", target),
    }
}
