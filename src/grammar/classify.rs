//! Chomsky hierarchy classification
//!
//! Symbol lengths are counted in characters: a non-terminal on the left of a
//! regular or context-free rule must be a single character, and the
//! linear-rule shapes `t`, `tN` and `Nt` are read one character at a time.

use std::fmt;

use super::{Grammar, EPSILON};

/// Position of a grammar in the Chomsky hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GrammarType {
    Unrestricted = 0,
    ContextSensitive = 1,
    ContextFree = 2,
    Regular = 3,
}

impl GrammarType {
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            GrammarType::Unrestricted => "unrestricted",
            GrammarType::ContextSensitive => "context-sensitive",
            GrammarType::ContextFree => "context-free",
            GrammarType::Regular => "regular",
        }
    }
}

impl fmt::Display for GrammarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level(), self.name())
    }
}

/// Split a two-character string into its characters
fn char_pair(s: &str) -> Option<(String, String)> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let second = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}

impl Grammar {
    /// Most restrictive type whose constraints the grammar satisfies
    pub fn classify(&self) -> GrammarType {
        if self.is_type3() {
            GrammarType::Regular
        } else if self.is_type2() {
            GrammarType::ContextFree
        } else if self.is_type1() {
            GrammarType::ContextSensitive
        } else {
            GrammarType::Unrestricted
        }
    }

    /// Regular grammar: uniformly right-linear or uniformly left-linear
    ///
    /// `$` is only allowed on the start symbol. A rule producing a single
    /// terminal fits both directions.
    pub fn is_type3(&self) -> bool {
        let mut right_linear = true;
        let mut left_linear = true;

        for (lhs, alternatives) in &self.productions {
            let lhs = lhs.trim();
            if !self.is_single_non_terminal(lhs) {
                return false;
            }

            for rhs in alternatives {
                let rhs = rhs.trim();
                if rhs == EPSILON {
                    if lhs != self.start {
                        return false;
                    }
                    continue;
                }

                let right = self.is_right_linear_rule(rhs);
                let left = self.is_left_linear_rule(rhs);
                right_linear &= right;
                left_linear &= left;
                if !right && !left {
                    return false;
                }
            }
        }

        right_linear || left_linear
    }

    /// Context-free grammar: every left-hand side is a single non-terminal
    pub fn is_type2(&self) -> bool {
        self.productions
            .iter()
            .filter(|(_, alternatives)| !alternatives.is_empty())
            .all(|(lhs, _)| self.is_single_non_terminal(lhs))
    }

    /// Context-sensitive grammar: no rule shrinks the sentential form
    ///
    /// `$` is only allowed on the start symbol.
    pub fn is_type1(&self) -> bool {
        self.rules().all(|(lhs, rhs)| {
            if rhs == EPSILON && lhs != self.start {
                return false;
            }
            lhs.chars().count() <= rhs.chars().count()
        })
    }

    fn is_single_non_terminal(&self, symbol: &str) -> bool {
        symbol.chars().count() == 1 && self.is_non_terminal(symbol)
    }

    /// `t` or `tN`
    fn is_right_linear_rule(&self, rhs: &str) -> bool {
        if rhs.chars().count() == 1 {
            return self.is_terminal(rhs);
        }
        match char_pair(rhs) {
            Some((first, second)) => self.is_terminal(&first) && self.is_non_terminal(&second),
            None => false,
        }
    }

    /// `t` or `Nt`
    fn is_left_linear_rule(&self, rhs: &str) -> bool {
        if rhs.chars().count() == 1 {
            return self.is_terminal(rhs);
        }
        match char_pair(rhs) {
            Some((first, second)) => self.is_non_terminal(&first) && self.is_terminal(&second),
            None => false,
        }
    }
}
