//! Intent matcher - maps free-form questions to a catalog topic.
//!
//! Deterministic and total: every input yields a topic id, falling back to
//! [`FALLBACK`] when no rule fires. First rule wins, no scoring.

use crate::catalog::FALLBACK;
use crate::keywords::{priority_list, KeywordRule};
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

static MATCHER: Lazy<IntentMatcher> = Lazy::new(IntentMatcher::builtin);

/// Process-wide matcher over the built-in priority list.
pub fn matcher() -> &'static IntentMatcher {
    &MATCHER
}

/// Classify with the built-in matcher
pub fn classify(raw_text: &str) -> &'static str {
    MATCHER.classify(raw_text)
}

/// Lowercase and trim
pub fn normalize(raw_text: &str) -> String {
    raw_text.trim().to_lowercase()
}

/// Why a topic was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub topic: &'static str,
    /// Position in the priority list; `None` for the fallback
    pub rule_index: Option<usize>,
    /// Phrase or action word that fired
    pub matched: Option<&'static str>,
}

impl Classification {
    pub fn is_fallback(&self) -> bool {
        self.rule_index.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct IntentMatcher {
    rules: Vec<KeywordRule>,
}

impl IntentMatcher {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn builtin() -> Self {
        Self::new(priority_list())
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn classify(&self, raw_text: &str) -> &'static str {
        self.explain(raw_text).topic
    }

    pub fn explain(&self, raw_text: &str) -> Classification {
        let text = normalize(raw_text);

        if !text.is_empty() {
            for (index, rule) in self.rules.iter().enumerate() {
                if let Some(matched) = rule.find(&text) {
                    debug!(topic = rule.topic, rule = index, matched, "intent matched");
                    return Classification {
                        topic: rule.topic,
                        rule_index: Some(index),
                        matched: Some(matched),
                    };
                }
            }
        }

        debug!(input = %text, "no intent matched, using fallback");
        Classification {
            topic: FALLBACK,
            rule_index: None,
            matched: None,
        }
    }

    /// Topic ids this matcher can produce, fallback included
    pub fn topics(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .map(|r| r.topic)
            .chain(std::iter::once(FALLBACK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  KTP Hilang \n"), "ktp hilang");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_explain_reports_phrase() {
        let c = IntentMatcher::builtin().explain("Mau DAFTAR ktp dong");
        assert_eq!(c.topic, "ktp_baru");
        assert_eq!(c.rule_index, Some(1));
        assert_eq!(c.matched, Some("daftar ktp"));
    }

    #[test]
    fn test_explain_fallback() {
        let c = IntentMatcher::builtin().explain("halo");
        assert!(c.is_fallback());
        assert_eq!(c.topic, FALLBACK);
    }

    #[test]
    fn test_empty_rule_list_always_falls_back() {
        let m = IntentMatcher::new(vec![]);
        assert_eq!(m.classify("ktp hilang"), FALLBACK);
    }
}
