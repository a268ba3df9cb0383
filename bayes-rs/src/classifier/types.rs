//! Classifier types and data structures

use serde::{Deserialize, Serialize};

/// Class label for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// Legitimate message
    Ham,
    /// Unsolicited message
    Spam,
}

impl Label {
    /// Parse a label token: the literal string "ham" (case-sensitive) is ham,
    /// anything else is treated as spam
    pub fn parse(token: &str) -> Self {
        if token == "ham" {
            Label::Ham
        } else {
            Label::Spam
        }
    }

    /// Is this the spam label
    pub fn is_spam(self) -> bool {
        matches!(self, Label::Spam)
    }
}

/// A labeled training message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Class label
    pub label: Label,
    /// Raw message body
    pub text: String,
}

impl TrainingRecord {
    /// Create a new training record
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Per-word occurrence counters across the two classes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordStats {
    /// The word token itself
    pub word: String,
    /// Occurrences in ham-labeled messages
    pub ham_count: u32,
    /// Occurrences in spam-labeled messages
    pub spam_count: u32,
}

impl WordStats {
    /// Create zeroed counters for a newly observed word
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ham_count: 0,
            spam_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ham_label() {
        assert_eq!(Label::parse("ham"), Label::Ham);
    }

    #[test]
    fn test_parse_spam_label() {
        assert_eq!(Label::parse("spam"), Label::Spam);
    }

    #[test]
    fn test_parse_unknown_label_is_spam() {
        assert_eq!(Label::parse("Ham"), Label::Spam);
        assert_eq!(Label::parse("HAM"), Label::Spam);
        assert_eq!(Label::parse("junk"), Label::Spam);
        assert_eq!(Label::parse(""), Label::Spam);
    }

    #[test]
    fn test_new_word_stats_zeroed() {
        let stats = WordStats::new("free");
        assert_eq!(stats.word, "free");
        assert_eq!(stats.ham_count, 0);
        assert_eq!(stats.spam_count, 0);
    }
}
