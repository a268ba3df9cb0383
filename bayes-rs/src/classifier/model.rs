//! Naive-Bayes classification model
//!
//! Implements word-presence naive Bayes over whitespace tokens: training
//! accumulates per-word occurrence counters, a finalize step derives
//! Laplace-smoothed likelihood tables, and classification compares the
//! product of per-word likelihoods for the two classes.

use std::collections::HashMap;

use serde::Serialize;

use super::types::{Label, TrainingRecord, WordStats};

/// Training summary statistics
#[derive(Debug, Clone, Serialize)]
pub struct ModelStats {
    /// Training messages labeled ham
    pub ham_messages: u32,
    /// Training messages labeled spam
    pub spam_messages: u32,
    /// Distinct word tokens observed during training
    pub vocabulary_size: usize,
}

/// Word-presence naive-Bayes classifier
///
/// Lifecycle: the model is constructed empty, fed labeled records through
/// [`train`](BayesModel::train), and frozen with a single
/// [`finalize`](BayesModel::finalize) call that derives the likelihood
/// tables from the accumulated counters. After that the model is read-only:
/// [`classify`](BayesModel::classify) never mutates state, so a shared
/// reference can be queried from any number of threads. Training again
/// after finalization is retraining and requires a fresh `finalize` before
/// the new counts are reflected in classification.
#[derive(Debug, Default)]
pub struct BayesModel {
    ham_total: u32,
    spam_total: u32,
    stats: HashMap<String, WordStats>,
    ham_likelihood: HashMap<String, f64>,
    spam_likelihood: HashMap<String, f64>,
}

impl BayesModel {
    /// Create an empty, untrained model
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one labeled record, updating the raw counters
    ///
    /// The text is split on whitespace; punctuation stays attached to words.
    /// Every token occurrence counts, so a word repeated three times in one
    /// message raises its class counter by three.
    pub fn train(&mut self, record: &TrainingRecord) {
        match record.label {
            Label::Ham => self.ham_total += 1,
            Label::Spam => self.spam_total += 1,
        }

        for token in record.text.split_whitespace() {
            let stats = self
                .stats
                .entry(token.to_string())
                .or_insert_with(|| WordStats::new(token));
            match record.label {
                Label::Ham => stats.ham_count += 1,
                Label::Spam => stats.spam_count += 1,
            }
        }
    }

    /// Consume an entire corpus of labeled records in order
    pub fn train_all<I>(&mut self, corpus: I)
    where
        I: IntoIterator<Item = TrainingRecord>,
    {
        for record in corpus {
            self.train(&record);
        }
    }

    /// Derive the smoothed likelihood tables from the raw counters
    ///
    /// Idempotent for unchanged counts. The tables are rebuilt from scratch,
    /// not maintained incrementally, so this must be re-run after any
    /// further training.
    pub fn finalize(&mut self) {
        let total = self.total_messages();
        let ham_total = self.ham_total;
        let spam_total = self.spam_total;

        self.ham_likelihood = self
            .stats
            .values()
            .map(|s| (s.word.clone(), Self::likelihood(s.ham_count, ham_total, total)))
            .collect();

        self.spam_likelihood = self
            .stats
            .values()
            .map(|s| (s.word.clone(), Self::likelihood(s.spam_count, spam_total, total)))
            .collect();
    }

    /// Laplace-smoothed estimate of P(class | word), via Bayes' rule:
    /// P(class|word) = P(word|class) * P(class) / P(word). The +1 terms keep
    /// every value finite and non-negative for any count configuration.
    fn likelihood(word_count: u32, class_total: u32, total: u32) -> f64 {
        let p_word_given_class = word_count as f64 / (class_total + 1) as f64;
        let p_class = (class_total + 1) as f64 / (total + 1) as f64;
        let p_word = (word_count + 1) as f64 / (total + 1) as f64;

        p_word_given_class * p_class / p_word
    }

    /// Classify a message; `true` means spam
    ///
    /// Compares the products of per-word likelihoods for the two classes.
    /// Words outside the trained vocabulary contribute no factor, and a tie
    /// classifies as ham, so an empty message, an all-unknown message, or an
    /// untrained model all resolve to ham.
    pub fn classify(&self, text: &str) -> bool {
        let (ham_score, spam_score) = self.scores(text);
        spam_score > ham_score
    }

    /// Compute the raw (ham, spam) likelihood products for a message
    ///
    /// Both scores start at 1.0, the multiplicative identity; only tokens
    /// present in the trained vocabulary contribute factors.
    pub fn scores(&self, text: &str) -> (f64, f64) {
        let mut ham_score = 1.0_f64;
        let mut spam_score = 1.0_f64;

        for token in text.split_whitespace() {
            if let Some(p) = self.ham_likelihood.get(token) {
                ham_score *= p;
            }
            if let Some(p) = self.spam_likelihood.get(token) {
                spam_score *= p;
            }
        }

        (ham_score, spam_score)
    }

    /// Training messages labeled ham
    pub fn ham_total(&self) -> u32 {
        self.ham_total
    }

    /// Training messages labeled spam
    pub fn spam_total(&self) -> u32 {
        self.spam_total
    }

    /// Total training messages seen
    pub fn total_messages(&self) -> u32 {
        self.ham_total + self.spam_total
    }

    /// Number of distinct words observed during training
    pub fn vocabulary_size(&self) -> usize {
        self.stats.len()
    }

    /// Iterate over the trained vocabulary
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }

    /// Raw counters for a word, if it was observed during training
    pub fn word_stats(&self, word: &str) -> Option<&WordStats> {
        self.stats.get(word)
    }

    /// Finalized ham likelihood for a word, if present in the vocabulary
    pub fn ham_likelihood(&self, word: &str) -> Option<f64> {
        self.ham_likelihood.get(word).copied()
    }

    /// Finalized spam likelihood for a word, if present in the vocabulary
    pub fn spam_likelihood(&self, word: &str) -> Option<f64> {
        self.spam_likelihood.get(word).copied()
    }

    /// Training summary
    pub fn summary(&self) -> ModelStats {
        ModelStats {
            ham_messages: self.ham_total,
            spam_messages: self.spam_total,
            vocabulary_size: self.stats.len(),
        }
    }
}
