//! Serializable L-system descriptions.
//!
//! A description captures everything needed to rebuild a system: the axiom,
//! the rules in priority order and how many generations to expand.
//!
//! ```json
//! {
//!   "name": "algae",
//!   "axiom": "A",
//!   "rules": [
//!     { "predecessor": "A", "successor": "AB" },
//!     { "predecessor": "B", "successor": "A" }
//!   ],
//!   "generations": 5
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::LSystemResult;
use crate::lsystem::LSystem;
use crate::rule::Rule;

/// Declarative form of an [`LSystem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDescription {
    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Starting sentence.
    pub axiom: String,

    /// Rules in priority order.
    #[serde(default)]
    pub rules: Vec<Rule>,

    /// Generations to expand when calling [`SystemDescription::expand`].
    #[serde(default)]
    pub generations: usize,
}

impl SystemDescription {
    /// Create a description with no rules.
    pub fn new(axiom: impl Into<String>) -> Self {
        Self {
            name: None,
            axiom: axiom.into(),
            rules: Vec::new(),
            generations: 0,
        }
    }

    /// Set the name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a rule (builder pattern).
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set the generation count (builder pattern).
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> LSystemResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> LSystemResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LSystemResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let description = Self::from_json(&contents)?;

        debug!(
            path = %path.display(),
            rules = description.rules.len(),
            "description_loaded"
        );

        Ok(description)
    }

    /// Write the description as JSON, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> LSystemResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json_pretty()?)?;

        info!(path = %path.display(), "description_saved");
        Ok(())
    }

    /// Build a system at generation zero.
    pub fn build(&self) -> LSystem {
        LSystem::new(self.axiom.clone()).with_rules(self.rules.iter().cloned())
    }

    /// Build a system and advance it by `generations`.
    pub fn expand(&self) -> LSystem {
        let mut system = self.build();
        system.iterate(self.generations);
        system
    }
}

impl From<&LSystem> for SystemDescription {
    fn from(system: &LSystem) -> Self {
        Self {
            name: None,
            axiom: system.axiom().to_string(),
            rules: system.current_rules().to_vec(),
            generations: system.generation(),
        }
    }
}
