//! N-gram counting over normalized words.
//!
//! Provides [`CountMap`], a counting map with zero-default lookup, and the
//! two accumulators used by the statistics builder and the predictor:
//! [`unigram_counts`] (single characters) and [`trigram_counts`]
//! (overlapping 3-character windows).
//!
//! # Examples
//!
//! ```
//! use glossa::analysis::ngram::{trigram_counts, unigram_counts};
//!
//! let words = vec!["hello".to_string()];
//! let unigrams = unigram_counts(&words);
//! assert_eq!(unigrams.get(&'l'), 2);
//!
//! let trigrams = trigram_counts(&words);
//! assert_eq!(trigrams.get(&"ell".to_string()), 1);
//! assert_eq!(trigrams.get(&"xyz".to_string()), 0);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

/// A counting map with zero-default lookup.
///
/// [`get`](CountMap::get) returns `0` for absent keys rather than an
/// `Option`; absence and a zero count are indistinguishable by contract.
/// Keys are never removed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountMap<K: Eq + Hash> {
    counts: HashMap<K, u64, RandomState>,
}

impl<K: Eq + Hash> CountMap<K> {
    /// Create an empty count map.
    pub fn new() -> Self {
        CountMap {
            counts: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Add one occurrence of the key.
    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Get the count for a key, `0` if the key was never counted.
    pub fn get(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Iterate over the counted keys and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    /// Iterate over the counted keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Number of distinct counted keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count single-character occurrences across all characters of all words.
pub fn unigram_counts(words: &[String]) -> CountMap<char> {
    let mut counts = CountMap::new();

    for word in words {
        for c in word.chars() {
            counts.increment(c);
        }
    }

    counts
}

/// Count overlapping 3-character substrings per word.
///
/// A word of length `L >= 3` contributes `L - 2` trigrams via a sliding
/// window; shorter words contribute nothing. Lengths are in characters,
/// not bytes.
pub fn trigram_counts(words: &[String]) -> CountMap<String> {
    let mut counts = CountMap::new();

    for word in words {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < 3 {
            continue;
        }
        for window in chars.windows(3) {
            counts.increment(window.iter().collect());
        }
    }

    counts
}
