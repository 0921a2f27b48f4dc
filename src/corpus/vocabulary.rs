//! Global feature vocabularies.
//!
//! A [`Vocabulary`] is the union of a feature family's keys across all
//! configured languages, materialized as a sorted, deduplicated sequence.
//! The ordering is the canonical feature-vector axis: position `i` of every
//! vector produced against a vocabulary refers to its `i`-th key, at
//! training time and at prediction time alike. Vector positions are
//! meaningless across different vocabulary builds.
//!
//! # Examples
//!
//! ```
//! use glossa::corpus::vocabulary::Vocabulary;
//!
//! let vocab = Vocabulary::from_keys(vec!["the", "a", "of", "a"]);
//! assert_eq!(vocab.len(), 3);
//! assert_eq!(vocab.index_of(&"of"), Some(1));
//! assert_eq!(vocab.index_of(&"missing"), None);
//! ```

use serde::{Deserialize, Serialize};

/// A deterministically ordered feature axis.
///
/// Keys are held sorted and unique; lookups are by binary search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary<K> {
    keys: Vec<K>,
}

impl<K: Ord> Vocabulary<K> {
    /// Build a vocabulary from an arbitrary key collection.
    ///
    /// Keys are sorted lexicographically and deduplicated; the resulting
    /// order never changes for the lifetime of the vocabulary.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort();
        keys.dedup();
        Vocabulary { keys }
    }

    /// Position of a key on the feature axis, if present.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.keys.binary_search(key).ok()
    }

    /// Check whether a key belongs to the vocabulary.
    pub fn contains(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// The key at a given position.
    pub fn get(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Iterate over the keys in axis order.
    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.keys.iter()
    }

    /// Number of keys (the feature-vector dimensionality).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
