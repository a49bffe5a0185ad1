//! Compiled simultaneous substitution.
//!
//! A [`Matcher`] is built once per rule-set change and then applied to whole
//! sentences. It performs a single left-to-right pass: at every position the
//! earliest-registered rule whose predecessor matches there wins, its
//! successor is emitted, and scanning resumes after the matched predecessor.
//! Successors are never rescanned within the same pass.
//!
//! ```text
//! rules:   A → AB, B → A
//! input:   A B A
//!          │ │ └── A → AB
//!          │ └──── B → A
//!          └────── A → AB
//! output:  AB A AB
//! ```

use std::collections::HashMap;

use crate::rule::Rule;

/// Immutable substitution index derived from an ordered rule list.
///
/// The matcher holds rule indices only; the rules themselves are passed to
/// [`Matcher::apply`] and must be the slice it was compiled from.
#[derive(Debug, Clone, Default)]
pub(crate) struct Matcher {
    rule_count: usize,

    /// Leading char of each non-empty predecessor -> rule indices in registration order.
    by_lead: HashMap<char, Vec<usize>>,

    /// First rule with an empty predecessor, if any.
    empty: Option<usize>,
}

impl Matcher {
    /// Compile a matcher from rules in priority order.
    pub(crate) fn compile(rules: &[Rule]) -> Self {
        let mut by_lead: HashMap<char, Vec<usize>> = HashMap::new();
        let mut empty = None;

        for (idx, rule) in rules.iter().enumerate() {
            match rule.predecessor().chars().next() {
                Some(lead) => by_lead.entry(lead).or_default().push(idx),
                None => {
                    empty.get_or_insert(idx);
                }
            }
        }

        Self {
            rule_count: rules.len(),
            by_lead,
            empty,
        }
    }

    /// Whether applying this matcher can never change its input.
    pub(crate) fn is_identity(&self) -> bool {
        self.rule_count == 0
    }

    /// Run one substitution pass over `input`.
    ///
    /// An empty predecessor matches at every position, including the end of the
    /// input. When it wins a position its successor is inserted there and the
    /// position is still open to a non-empty predecessor.
    pub(crate) fn apply(&self, rules: &[Rule], input: &str) -> String {
        debug_assert_eq!(rules.len(), self.rule_count);
        if self.is_identity() {
            return input.to_owned();
        }

        let mut out = String::with_capacity(input.len());
        let mut pos = 0;

        loop {
            let rest = &input[pos..];
            let keyed = self.keyed_match(rules, rest);

            if let Some(e) = self.empty {
                if !matches!(keyed, Some(k) if k < e) {
                    out.push_str(rules[e].successor());
                }
            }

            if let Some(k) = keyed {
                let rule = &rules[k];
                out.push_str(rule.successor());
                pos += rule.predecessor().len();
                continue;
            }

            match rest.chars().next() {
                Some(c) => {
                    out.push(c);
                    pos += c.len_utf8();
                }
                None => break,
            }
        }

        out
    }

    /// Lowest-index rule with a non-empty predecessor that prefixes `rest`.
    fn keyed_match(&self, rules: &[Rule], rest: &str) -> Option<usize> {
        let lead = rest.chars().next()?;
        self.by_lead
            .get(&lead)?
            .iter()
            .copied()
            .find(|&idx| rest.starts_with(rules[idx].predecessor()))
    }
}
