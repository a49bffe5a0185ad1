//! The rewriting engine.
//!
//! `LSystem` owns the axiom, the ordered rule list and the current sentence,
//! and advances the sentence one generation at a time.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{LSystemError, LSystemResult};
use crate::matcher::Matcher;
use crate::rule::Rule;

/// A deterministic, context-free L-system.
///
/// Rules are applied simultaneously across the whole sentence. When several
/// predecessors match at the same position, the rule registered first wins,
/// regardless of predecessor length.
///
/// ```
/// use lindenmayer_core::{LSystem, Rule};
///
/// let mut system = LSystem::new("F");
/// system.add_rules([Rule::new("F", "FF[FFA]")]);
/// system.iterate(2);
///
/// assert_eq!(system.sentence(), "FF[FFA]FF[FFA][FF[FFA]FF[FFA]A]");
/// ```
#[derive(Clone)]
pub struct LSystem {
    axiom: String,
    rules: Vec<Rule>,
    sentence: String,
    matcher: Matcher,
    generation: usize,
}

impl LSystem {
    /// Create a system whose sentence starts as `axiom` and which has no rules.
    pub fn new(axiom: impl Into<String>) -> Self {
        let axiom = axiom.into();
        Self {
            sentence: axiom.clone(),
            axiom,
            rules: Vec::new(),
            matcher: Matcher::default(),
            generation: 0,
        }
    }

    /// Append rules (builder pattern).
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.add_rules(rules);
        self
    }

    /// The starting sentence.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The current generation's sentence.
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// Rules in priority order.
    pub fn current_rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of generations applied since construction or the last [`reset`](Self::reset).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Append rules after the existing ones, keeping their relative priority.
    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules.extend(rules);
        self.recompile();
    }

    /// Discard every existing rule and install `rules` in the given order.
    pub fn replace_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules = rules.into_iter().collect();
        self.recompile();
    }

    /// Append rules given as a flat list of alternating predecessor/successor tokens.
    ///
    /// Fails with [`LSystemError::InvalidArgumentCount`] on an odd number of tokens,
    /// in which case no rule is added.
    pub fn add_rules_from_pairs<S: AsRef<str>>(&mut self, tokens: &[S]) -> LSystemResult<()> {
        if tokens.len() % 2 == 1 {
            warn!(count = tokens.len(), "lsystem_rule_pairs_rejected");
            return Err(LSystemError::InvalidArgumentCount {
                count: tokens.len(),
            });
        }

        let rules: Vec<Rule> = tokens
            .chunks_exact(2)
            .map(|pair| Rule::new(pair[0].as_ref(), pair[1].as_ref()))
            .collect();

        self.add_rules(rules);
        Ok(())
    }

    /// Advance one generation.
    pub fn increment(&mut self) {
        self.sentence = self.matcher.apply(&self.rules, &self.sentence);
        self.generation += 1;

        debug!(
            generation = self.generation,
            len = self.sentence.len(),
            "lsystem_generation"
        );
    }

    /// Advance `n` generations. `n == 0` leaves the system untouched.
    pub fn iterate(&mut self, n: usize) {
        for _ in 0..n {
            self.increment();
        }
    }

    /// What `input` would become after one generation under the current rules.
    ///
    /// Does not touch the current sentence.
    pub fn successor(&self, input: &str) -> String {
        self.matcher.apply(&self.rules, input)
    }

    /// Restore the sentence to the axiom. Rules are kept.
    pub fn reset(&mut self) {
        self.sentence.clone_from(&self.axiom);
        self.generation = 0;
    }

    fn recompile(&mut self) {
        self.matcher = Matcher::compile(&self.rules);
        debug!(rules = self.rules.len(), "lsystem_rules_compiled");
    }
}

impl fmt::Debug for LSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LSystem")
            .field("axiom", &self.axiom)
            .field("generation", &self.generation)
            .field(
                "rules",
                &self.rules.iter().map(Rule::to_string).collect::<Vec<_>>(),
            )
            .field("sentence_len", &self.sentence.len())
            .finish()
    }
}
