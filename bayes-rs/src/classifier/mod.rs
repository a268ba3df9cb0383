//! Naive-Bayes message classification
//!
//! Provides the trainable spam/ham model and its supporting data types.

pub mod model;
pub mod types;

pub use model::{BayesModel, ModelStats};
pub use types::{Label, TrainingRecord, WordStats};
