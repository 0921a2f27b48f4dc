//! The prediction orchestrator.
//!
//! A [`Predictor`] owns the built corpus statistics and the three fitted
//! classifiers, one per feature family. It is created by one of two
//! explicit factories, [`build_fresh`](Predictor::build_fresh) or
//! [`load_from_snapshot`](Predictor::load_from_snapshot), and is immutable
//! afterwards: serving is pure computation over read-only state, safe to
//! share across threads without locking.
//!
//! [`predict`](Predictor::predict) returns the three classifier opinions
//! unaggregated, keyed by method name. There is no ranking, confidence, or
//! cross-method agreement logic.
//!
//! # Examples
//!
//! ```no_run
//! use glossa::classify::predictor::Predictor;
//! use glossa::corpus::config::CorpusConfig;
//!
//! # fn main() -> glossa::error::Result<()> {
//! let config = CorpusConfig::load_from_dir("config")?;
//! let predictor = Predictor::build_fresh(&config)?;
//!
//! let predictions = predictor.predict("Hello world")?;
//! for (method, language) in predictions.iter() {
//!     println!("{method}: {language}");
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use ahash::RandomState;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::ngram::{CountMap, trigram_counts, unigram_counts};
use crate::analysis::normalizer::Normalizer;
use crate::classify::bayes::MultinomialNb;
use crate::classify::vectorize::{stopword_vector, trigram_vector, unigram_vector};
use crate::corpus::config::CorpusConfig;
use crate::corpus::statistics::CorpusStatistics;
use crate::error::{GlossaError, Result};
use crate::language::Language;

/// Method name of the unigram classifier in prediction mappings.
pub const UNIGRAM_METHOD: &str = "Unigram Bayes method";
/// Method name of the trigram classifier in prediction mappings.
pub const TRIGRAM_METHOD: &str = "Trigram Bayes method";
/// Method name of the stopword classifier in prediction mappings.
pub const STOPWORDS_METHOD: &str = "Stopwords Bayes method";

/// The three independent classifier opinions for one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predictions {
    /// Opinion of the unigram-profile classifier.
    pub unigram: Language,
    /// Opinion of the trigram-profile classifier.
    pub trigram: Language,
    /// Opinion of the stopword-profile classifier.
    pub stopwords: Language,
}

impl Predictions {
    /// Iterate the opinions as `(method name, language)` pairs, in the
    /// fixed unigram → trigram → stopwords order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Language)> {
        [
            (UNIGRAM_METHOD, &self.unigram),
            (TRIGRAM_METHOD, &self.trigram),
            (STOPWORDS_METHOD, &self.stopwords),
        ]
        .into_iter()
    }

    /// The opinions as a mapping with exactly the three method-name keys.
    pub fn to_map(&self) -> BTreeMap<&'static str, &Language> {
        self.iter().collect()
    }
}

/// A built language-identification model.
///
/// Holds the corpus statistics and one fitted multinomial Naive-Bayes
/// model per feature family, each trained with exactly one reference
/// vector per configured language.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Predictor {
    statistics: CorpusStatistics,
    unigram_bayes: MultinomialNb,
    trigram_bayes: MultinomialNb,
    stopwords_bayes: MultinomialNb,
}

impl Predictor {
    /// Build a model from scratch out of a configuration bundle.
    ///
    /// Runs the statistics pipeline and fits all three classifiers. Any
    /// failure aborts the build; a partially fitted predictor is never
    /// returned.
    pub fn build_fresh(config: &CorpusConfig) -> Result<Self> {
        let statistics = CorpusStatistics::build(config)?;

        debug!("training unigram bayes method");
        let unigram_bayes = fit_unigram_bayes(&statistics)?;
        debug!("training trigram bayes method");
        let trigram_bayes = fit_trigram_bayes(&statistics)?;
        debug!("training stopwords bayes method");
        let stopwords_bayes = fit_stopwords_bayes(&statistics)?;

        Ok(Predictor {
            statistics,
            unigram_bayes,
            trigram_bayes,
            stopwords_bayes,
        })
    }

    /// Load a previously saved model from a snapshot file.
    ///
    /// Fails with [`GlossaError::SnapshotNotFound`] when no snapshot exists
    /// at the path; the caller must then decide to build fresh explicitly.
    /// An unreadable or corrupt snapshot is a [`GlossaError::Snapshot`].
    pub fn load_from_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GlossaError::SnapshotNotFound(path.to_path_buf()));
        }

        debug!("loading predictor snapshot from {}", path.display());
        let bytes = fs::read(path)?;
        bincode::deserialize(&bytes).map_err(|e| {
            GlossaError::snapshot(format!("cannot decode {}: {e}", path.display()))
        })
    }

    /// Persist the model as an opaque snapshot file.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("saving predictor snapshot to {}", path.display());

        let bytes = bincode::serialize(self)
            .map_err(|e| GlossaError::snapshot(format!("cannot encode snapshot: {e}")))?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Run all three classification methods over raw text.
    ///
    /// The text is normalized against the global alphabet, counted, and
    /// vectorized once per feature family; each classifier then answers
    /// independently. Input with no recognized words yields all-zero
    /// feature vectors, which still classify deterministically.
    pub fn predict(&self, text: &str) -> Result<Predictions> {
        let normalizer = Normalizer::new(self.statistics.global_alphabet());
        let words = normalizer.normalize(text);
        debug!("normalized input into {} words", words.len());

        let unigrams = unigram_counts(&words);
        let trigrams = trigram_counts(&words);
        let observed: HashSet<String, RandomState> = words.into_iter().collect();

        Ok(Predictions {
            unigram: self.unigram_bayes_method(&unigrams)?.clone(),
            trigram: self.trigram_bayes_method(&trigrams)?.clone(),
            stopwords: self.stopwords_bayes_method(&observed)?.clone(),
        })
    }

    /// Classify pre-computed unigram counts.
    pub fn unigram_bayes_method(&self, counts: &CountMap<char>) -> Result<&Language> {
        debug!("predicting with unigram bayes method");
        let vector = unigram_vector(counts, self.statistics.unigram_vocabulary());
        self.unigram_bayes.predict(&vector)
    }

    /// Classify pre-computed trigram counts.
    pub fn trigram_bayes_method(&self, counts: &CountMap<String>) -> Result<&Language> {
        debug!("predicting with trigram bayes method");
        let vector = trigram_vector(counts, self.statistics.trigram_vocabulary());
        self.trigram_bayes.predict(&vector)
    }

    /// Classify a set of observed words by stopword membership.
    pub fn stopwords_bayes_method<S: std::hash::BuildHasher>(
        &self,
        words: &HashSet<String, S>,
    ) -> Result<&Language> {
        debug!("predicting with stopwords bayes method");
        let vector = stopword_vector(words, self.statistics.stopword_vocabulary());
        self.stopwords_bayes.predict(&vector)
    }

    /// The built corpus statistics.
    pub fn statistics(&self) -> &CorpusStatistics {
        &self.statistics
    }
}

/// Fit the unigram classifier: one profile vector per language, labels in
/// sorted language order.
fn fit_unigram_bayes(statistics: &CorpusStatistics) -> Result<MultinomialNb> {
    let mut features = Vec::with_capacity(statistics.languages().len());
    for language in statistics.languages() {
        features.push(unigram_vector(
            statistics.unigrams(language)?,
            statistics.unigram_vocabulary(),
        ));
    }
    MultinomialNb::fit(&features, statistics.languages())
}

/// Fit the trigram classifier the same way.
fn fit_trigram_bayes(statistics: &CorpusStatistics) -> Result<MultinomialNb> {
    let mut features = Vec::with_capacity(statistics.languages().len());
    for language in statistics.languages() {
        features.push(trigram_vector(
            statistics.trigrams(language)?,
            statistics.trigram_vocabulary(),
        ));
    }
    MultinomialNb::fit(&features, statistics.languages())
}

/// Fit the stopword classifier. The training sample for each language is
/// its own stopword set, vectorized with the same presence indicator used
/// on observed words at serve time.
fn fit_stopwords_bayes(statistics: &CorpusStatistics) -> Result<MultinomialNb> {
    let mut features = Vec::with_capacity(statistics.languages().len());
    for language in statistics.languages() {
        features.push(stopword_vector(
            statistics.stopwords(language)?,
            statistics.stopword_vocabulary(),
        ));
    }
    MultinomialNb::fit(&features, statistics.languages())
}
