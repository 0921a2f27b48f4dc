//! Classification module for Glossa.
//!
//! Feature vectorization against the global vocabularies, the multinomial
//! Naive-Bayes classifier, and the [`Predictor`] that drives the full
//! serve-time pipeline:
//!
//! ```text
//! Text → Normalizer → Counts → Vectorizer → Classifier Bank → Predictions
//! ```

pub mod bayes;
pub mod predictor;
pub mod vectorize;

// Re-export commonly used types
pub use bayes::*;
pub use predictor::*;
pub use vectorize::*;
