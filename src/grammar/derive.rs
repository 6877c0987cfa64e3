//! Breadth-first derivation search

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

use super::{Grammar, EPSILON};

/// Bounds on the derivation search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationLimits {
    /// Longest derivation (in sentential forms, start symbol included) to explore
    pub max_depth: usize,
    /// Distinct sentential forms to discover before giving up
    pub max_states: usize,
}

impl Default for DerivationLimits {
    fn default() -> Self {
        Self {
            max_depth: 20,
            max_states: 100_000,
        }
    }
}

/// Outcome of a derivation search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    /// Every sentential form from the start symbol to the target
    Found(Vec<String>),
    DepthExceeded,
    StateLimitReached,
    NotFound,
}

impl Derivation {
    pub fn is_found(&self) -> bool {
        matches!(self, Derivation::Found(_))
    }

    /// Short machine-readable name of the outcome
    pub fn outcome(&self) -> &'static str {
        match self {
            Derivation::Found(_) => "found",
            Derivation::DepthExceeded => "depth_exceeded",
            Derivation::StateLimitReached => "state_limit",
            Derivation::NotFound => "not_found",
        }
    }
}

/// Byte offsets of every occurrence of `needle` in `haystack`, overlaps included
fn occurrences(haystack: &str, needle: &str) -> Vec<usize> {
    let mut found = Vec::new();
    if needle.is_empty() {
        return found;
    }

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let index = from + offset;
        found.push(index);
        // Advance one character so overlapping matches are still seen
        let step = haystack[index..].chars().next().map_or(1, char::len_utf8);
        from = index + step;
    }
    found
}

/// Every step from the start symbol to the form at `index`
fn trace(forms: &IndexMap<String, Option<usize>>, mut index: usize) -> Vec<String> {
    let mut steps = Vec::new();
    while let Some((form, parent)) = forms.get_index(index) {
        steps.push(form.clone());
        match parent {
            Some(parent) => index = *parent,
            None => break,
        }
    }
    steps.reverse();
    steps
}

impl Grammar {
    /// Search for the shortest derivation of `target` from the start symbol
    ///
    /// Each step rewrites one occurrence of a left-hand side with one of its
    /// alternatives (`$` rewrites to the empty string). A target of `$` asks
    /// for a derivation of the empty string.
    ///
    /// Each discovered form is stored once with the index of the form it
    /// came from, and the queue only holds indices into that table. Forms past
    /// `max_depth` are never stored, and no more than `max_states` forms are.
    pub fn derive(&self, target: &str, limits: DerivationLimits) -> Derivation {
        let target = if target == EPSILON { "" } else { target };

        let mut forms: IndexMap<String, Option<usize>> = IndexMap::new();
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        let mut truncated = false;

        forms.insert(self.start.clone(), None);
        queue.push_back((0, 1));

        while let Some((index, depth)) = queue.pop_front() {
            let Some((current, _)) = forms.get_index(index) else {
                continue;
            };

            if current == target {
                debug!(states = forms.len(), steps = depth, "Derivation found");
                return Derivation::Found(trace(&forms, index));
            }

            let current = current.clone();
            for (lhs, alternatives) in &self.productions {
                for at in occurrences(&current, lhs) {
                    let prefix = &current[..at];
                    let suffix = &current[at + lhs.len()..];
                    for alternative in alternatives {
                        let replacement = if alternative == EPSILON { "" } else { alternative.as_str() };
                        let next = format!("{}{}{}", prefix, replacement, suffix);
                        if forms.contains_key(&next) {
                            continue;
                        }
                        if depth >= limits.max_depth {
                            truncated = true;
                            continue;
                        }
                        if forms.len() >= limits.max_states {
                            debug!(states = forms.len(), "Derivation state limit reached");
                            return Derivation::StateLimitReached;
                        }
                        let (next_index, _) = forms.insert_full(next, Some(index));
                        queue.push_back((next_index, depth + 1));
                    }
                }
            }
        }

        if truncated {
            debug!(states = forms.len(), "Derivation depth limit reached");
            return Derivation::DepthExceeded;
        }

        debug!(states = forms.len(), "Derivation search exhausted");
        Derivation::NotFound
    }
}
