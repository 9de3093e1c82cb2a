//! Justification records attached to every assessment.
//!
//! A justification pairs the technical explanation of a decision with
//! the legal clause that supports it, so reports can cite both.

use serde::{Deserialize, Serialize};

/// Reference to a legal or normative clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReference {
    /// Article or clause identifier (e.g. "RD 665/1997, Art. 5").
    pub article: String,
    /// Summary of the article text.
    pub text: String,
}

/// Explanation of a single decision step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Justification {
    /// Technical explanation of why the rule applied.
    pub explanation: String,
    /// Legal basis for the rule.
    pub legal_reference: LegalReference,
}

impl Justification {
    pub fn new(
        explanation: impl Into<String>,
        article: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            explanation: explanation.into(),
            legal_reference: LegalReference {
                article: article.into(),
                text: text.into(),
            },
        }
    }

    /// Placeholder used while analytic data is still missing.
    pub fn pending() -> Self {
        Self::new("", "", "")
    }

    pub fn is_pending(&self) -> bool {
        self.explanation.is_empty() && self.legal_reference.article.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_justification() {
        assert!(Justification::pending().is_pending());
        assert!(!Justification::new("x", "Art. 1", "text").is_pending());
    }

    #[test]
    fn test_justification_serialization() {
        let j = Justification::new("explained", "Art. 4", "text");
        let json = serde_json::to_value(&j).unwrap();
        assert_eq!(json["legal_reference"]["article"], "Art. 4");
        assert_eq!(json["explanation"], "explained");
    }
}
