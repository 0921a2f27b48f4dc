//! Multinomial Naive-Bayes classifier.
//!
//! A [`MultinomialNb`] is fitted once from labeled count vectors and is
//! immutable afterwards. With one exemplar per class (the training regime
//! used here: one reference vector per language) the model reduces to a
//! nearest-profile-under-multinomial-likelihood decision rather than a
//! generalizing classifier; that degenerate property is covered by tests.
//!
//! # Examples
//!
//! ```
//! use glossa::classify::bayes::MultinomialNb;
//! use glossa::language::Language;
//!
//! let features = vec![vec![9.0, 1.0], vec![1.0, 9.0]];
//! let labels = vec![Language::new("en"), Language::new("ru")];
//! let model = MultinomialNb::fit(&features, &labels).unwrap();
//!
//! assert_eq!(model.predict(&[5.0, 0.0]).unwrap().as_str(), "en");
//! assert_eq!(model.predict(&[0.0, 5.0]).unwrap().as_str(), "ru");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GlossaError, Result};
use crate::language::Language;

/// Laplace smoothing constant applied to every feature count.
const SMOOTHING: f64 = 1.0;

/// A fitted multinomial Naive-Bayes model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Class labels in fit order.
    classes: Vec<Language>,
    /// Log of the empirical class priors.
    class_log_prior: Vec<f64>,
    /// Per class, the smoothed log probability of each feature.
    feature_log_prob: Vec<Vec<f64>>,
    /// Dimensionality of the fitted feature space.
    n_features: usize,
}

impl MultinomialNb {
    /// Fit a model from feature vectors and their labels.
    ///
    /// `features[i]` is labeled `labels[i]`; all vectors must share one
    /// dimensionality. Classes are registered in order of first appearance,
    /// which fixes the tie-break order of [`predict`](Self::predict).
    /// Smoothing is Laplace (α = 1), priors are empirical.
    pub fn fit(features: &[Vec<f64>], labels: &[Language]) -> Result<Self> {
        if features.is_empty() {
            return Err(GlossaError::classify("training set is empty"));
        }
        if features.len() != labels.len() {
            return Err(GlossaError::classify(format!(
                "{} feature vectors but {} labels",
                features.len(),
                labels.len()
            )));
        }

        let n_features = features[0].len();
        for vector in features {
            if vector.len() != n_features {
                return Err(GlossaError::classify(format!(
                    "inconsistent feature dimensions: {} and {}",
                    n_features,
                    vector.len()
                )));
            }
        }

        // Accumulate per-class feature totals and sample counts, classes
        // ordered by first appearance.
        let mut classes: Vec<Language> = Vec::new();
        let mut feature_totals: Vec<Vec<f64>> = Vec::new();
        let mut sample_counts: Vec<usize> = Vec::new();

        for (vector, label) in features.iter().zip(labels) {
            let index = match classes.iter().position(|c| c == label) {
                Some(index) => index,
                None => {
                    classes.push(label.clone());
                    feature_totals.push(vec![0.0; n_features]);
                    sample_counts.push(0);
                    classes.len() - 1
                }
            };
            for (total, value) in feature_totals[index].iter_mut().zip(vector) {
                *total += value;
            }
            sample_counts[index] += 1;
        }

        debug!(
            "fitting multinomial NB: {} classes, {} features",
            classes.len(),
            n_features
        );

        let n_samples = features.len() as f64;
        let class_log_prior = sample_counts
            .iter()
            .map(|&count| (count as f64 / n_samples).ln())
            .collect();

        let feature_log_prob = feature_totals
            .iter()
            .map(|totals| {
                let smoothed_total: f64 =
                    totals.iter().sum::<f64>() + SMOOTHING * n_features as f64;
                totals
                    .iter()
                    .map(|&count| ((count + SMOOTHING) / smoothed_total).ln())
                    .collect()
            })
            .collect();

        Ok(MultinomialNb {
            classes,
            class_log_prior,
            feature_log_prob,
            n_features,
        })
    }

    /// Predict the most likely class for a count vector.
    ///
    /// Returns the class maximizing the joint log likelihood
    /// `log prior + Σ xᵢ · log θᵢ`. Exact ties resolve to the class fitted
    /// first; with labels supplied in sorted order, that is the lexicographically
    /// smallest language. A vector of the wrong dimensionality is a caller
    /// contract violation.
    pub fn predict(&self, vector: &[f64]) -> Result<&Language> {
        if vector.len() != self.n_features {
            return Err(GlossaError::classify(format!(
                "expected a vector of {} features, got {}",
                self.n_features,
                vector.len()
            )));
        }

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (index, log_probs) in self.feature_log_prob.iter().enumerate() {
            let likelihood: f64 = vector
                .iter()
                .zip(log_probs)
                .map(|(&count, &log_prob)| count * log_prob)
                .sum();
            let score = self.class_log_prior[index] + likelihood;
            if score > best_score {
                best = index;
                best_score = score;
            }
        }

        Ok(&self.classes[best])
    }

    /// Class labels in fit order.
    pub fn classes(&self) -> &[Language] {
        &self.classes
    }

    /// Dimensionality of the fitted feature space.
    pub fn n_features(&self) -> usize {
        self.n_features
    }
}
