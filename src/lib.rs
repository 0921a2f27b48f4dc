//! # Glossa
//!
//! A statistical language identification library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Character-level (unigram, trigram) and stopword feature families
//! - Three independent multinomial Naive-Bayes classifiers
//! - Deterministic global vocabularies shared between training and serving
//! - Snapshot persistence for built models
//!
//! A model is built once from a configuration bundle (languages, alphabet
//! tables, stopword lists, reference corpora) and is read-only afterwards;
//! prediction returns the three classifier opinions unaggregated.

pub mod analysis;
pub mod classify;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod language;

pub mod prelude {
    //! Convenient re-exports of the commonly used types.

    pub use crate::classify::bayes::MultinomialNb;
    pub use crate::classify::predictor::{
        Predictions, Predictor, STOPWORDS_METHOD, TRIGRAM_METHOD, UNIGRAM_METHOD,
    };
    pub use crate::corpus::config::CorpusConfig;
    pub use crate::corpus::statistics::CorpusStatistics;
    pub use crate::error::{GlossaError, Result};
    pub use crate::language::Language;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
