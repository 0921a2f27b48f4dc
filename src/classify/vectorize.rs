//! Feature vectorization against the global vocabularies.
//!
//! Every function here produces a vector whose length equals the given
//! vocabulary's size and whose position `i` corresponds to the
//! vocabulary's `i`-th key. Keys absent from the input vectorize to zero.
//! The same functions run at training time (over a language's reference
//! profile) and at prediction time (over counts observed in the input
//! text), so the feature space is identical in both phases, including for
//! the stopword family, where the vector is a presence indicator over a
//! word set in both phases.
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::ngram::unigram_counts;
//! use glossa::classify::vectorize::unigram_vector;
//! use glossa::corpus::vocabulary::Vocabulary;
//!
//! let counts = unigram_counts(&["hello".to_string()]);
//! let vocabulary = Vocabulary::from_keys(vec!['e', 'h', 'l', 'o', 'z']);
//!
//! assert_eq!(unigram_vector(&counts, &vocabulary), vec![1.0, 1.0, 2.0, 1.0, 0.0]);
//! ```

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use crate::analysis::ngram::CountMap;
use crate::corpus::vocabulary::Vocabulary;

/// Vectorize a counts mapping along a vocabulary axis.
fn count_vector<K: Eq + Hash + Ord>(profile: &CountMap<K>, vocabulary: &Vocabulary<K>) -> Vec<f64> {
    vocabulary.iter().map(|key| profile.get(key) as f64).collect()
}

/// Character occurrence counts along the unigram axis.
pub fn unigram_vector(profile: &CountMap<char>, vocabulary: &Vocabulary<char>) -> Vec<f64> {
    count_vector(profile, vocabulary)
}

/// Trigram occurrence counts along the trigram axis.
pub fn trigram_vector(profile: &CountMap<String>, vocabulary: &Vocabulary<String>) -> Vec<f64> {
    count_vector(profile, vocabulary)
}

/// Word-presence indicator along the stopword axis.
///
/// Position `i` is `1.0` when the vocabulary's `i`-th word is a member of
/// `words`, else `0.0`.
pub fn stopword_vector<S: BuildHasher>(
    words: &HashSet<String, S>,
    vocabulary: &Vocabulary<String>,
) -> Vec<f64> {
    vocabulary
        .iter()
        .map(|word| if words.contains(word) { 1.0 } else { 0.0 })
        .collect()
}
