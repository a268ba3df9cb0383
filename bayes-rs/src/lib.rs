//! bayes-rs: naive-Bayes spam/ham message classifier
//!
//! Classifies short text messages as unsolicited ("spam") or legitimate
//! ("ham") using a word-presence naive-Bayes model trained from a labeled
//! corpus.
//!
//! # Features
//!
//! - **Training**: per-word occurrence counters accumulated from labeled
//!   (label, text) records
//! - **Smoothing**: Laplace-smoothed likelihood tables, so no word ever
//!   yields a zero or undefined probability
//! - **Classification**: compares the products of per-word likelihoods for
//!   the two classes; ties resolve to ham
//! - **Corpus ingestion**: tab-separated `label<TAB>message` lines, with
//!   malformed lines skipped rather than aborting the run
//!
//! # Example
//!
//! ```
//! use bayes_rs::classifier::{BayesModel, Label, TrainingRecord};
//!
//! let mut model = BayesModel::new();
//! model.train(&TrainingRecord::new(Label::Ham, "hello world"));
//! model.train(&TrainingRecord::new(Label::Spam, "free money now"));
//! model.finalize();
//!
//! assert!(model.classify("free"));
//! assert!(!model.classify("hello"));
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: the model, training and classification
//! - [`corpus`]: training-data ingestion
//! - [`config`]: configuration management
//! - [`error`]: error types and handling

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;

// Re-export commonly used types
pub use classifier::{BayesModel, Label, TrainingRecord};
pub use config::Config;
pub use error::{BayesError, Result};
