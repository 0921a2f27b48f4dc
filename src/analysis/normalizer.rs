//! Word normalization.
//!
//! The [`Normalizer`] turns raw text into a sequence of normalized words
//! against an [`Alphabet`]. A word is a maximal run of recognized
//! characters, folded one by one as they are consumed; any unrecognized
//! character (whitespace, digits, punctuation) acts as a separator and is
//! never part of the output. There are no error conditions.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use glossa::analysis::alphabet::Alphabet;
//! use glossa::analysis::normalizer::Normalizer;
//!
//! let fold: HashMap<char, char> = ('A'..='Z').zip('a'..='z').collect();
//! let alphabet = Alphabet::from_fold_table(&fold);
//! let normalizer = Normalizer::new(&alphabet);
//!
//! let words = normalizer.normalize("Hello, World!");
//! assert_eq!(words, vec!["hello", "world"]);
//! ```

use crate::analysis::alphabet::Alphabet;

/// Normalizes raw text into a sequence of folded words.
#[derive(Debug)]
pub struct Normalizer<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer over the given alphabet.
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Normalizer { alphabet }
    }

    /// Normalize text into an order-preserving sequence of words.
    ///
    /// Empty input yields an empty sequence. A word in flight when the
    /// input ends is flushed, so text that does not end on a separator
    /// keeps its final word.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();

        for c in text.chars() {
            if self.alphabet.contains(c) {
                current.push(self.alphabet.fold_char(c));
            } else if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            words.push(current);
        }

        words
    }
}
