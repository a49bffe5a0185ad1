//! Production rules.
//!
//! A rule pairs a predecessor with the successor that replaces it. Rules are
//! plain values; their priority comes solely from their position in the
//! engine's rule list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LSystemError;

/// A production rule `predecessor → successor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    predecessor: String,
    successor: String,
}

impl Rule {
    /// Create a new rule.
    pub fn new(predecessor: impl Into<String>, successor: impl Into<String>) -> Self {
        Self {
            predecessor: predecessor.into(),
            successor: successor.into(),
        }
    }

    /// Parse a rule written as `PREDECESSOR=SUCCESSOR`.
    ///
    /// Splits on the first `=`, so the successor may itself contain `=` or be empty.
    pub fn parse(input: &str) -> Result<Self, LSystemError> {
        input
            .split_once('=')
            .map(|(p, s)| Self::new(p, s))
            .ok_or_else(|| LSystemError::MalformedRule {
                input: input.to_string(),
            })
    }

    /// The text to be replaced.
    pub fn predecessor(&self) -> &str {
        &self.predecessor
    }

    /// The text that replaces the predecessor.
    pub fn successor(&self) -> &str {
        &self.successor
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.predecessor, self.successor)
    }
}

impl FromStr for Rule {
    type Err = LSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(&str, &str)> for Rule {
    fn from((p, s): (&str, &str)) -> Self {
        Self::new(p, s)
    }
}

impl From<(String, String)> for Rule {
    fn from((p, s): (String, String)) -> Self {
        Self::new(p, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_accessors() {
        let rule = Rule::new("F", "FF[FFA]");
        assert_eq!(rule.predecessor(), "F");
        assert_eq!(rule.successor(), "FF[FFA]");
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule::new("A", "FB");
        assert_eq!(rule.to_string(), "A → FB");
    }

    #[test]
    fn test_rule_parse() {
        let rule: Rule = "F=F+F--F+F".parse().unwrap();
        assert_eq!(rule, Rule::new("F", "F+F--F+F"));

        // Only the first '=' separates.
        let rule = Rule::parse("X==Y").unwrap();
        assert_eq!(rule.predecessor(), "X");
        assert_eq!(rule.successor(), "=Y");

        // Empty successor erases the predecessor.
        let rule = Rule::parse("G=").unwrap();
        assert_eq!(rule.successor(), "");
    }

    #[test]
    fn test_rule_parse_missing_separator() {
        let err = Rule::parse("FF").unwrap_err();
        assert!(matches!(err, LSystemError::MalformedRule { ref input } if input == "FF"));
    }

    #[test]
    fn test_rule_serde_shape() {
        let rule = Rule::new("F", "FF");
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "predecessor": "F", "successor": "FF" })
        );
    }
}
