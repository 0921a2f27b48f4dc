//! Alphabet tables with case folding.
//!
//! An [`Alphabet`] is the set of characters recognized as word material for
//! one language, together with a folding map that rewrites non-canonical
//! forms (uppercase, typically) to their canonical form. The recognized set
//! is derived from the folding table: its keys, its values, plus any extra
//! symbols inserted explicitly (an apostrophe, to keep contractions
//! together). A global alphabet is the union of all per-language alphabets.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use glossa::analysis::alphabet::Alphabet;
//!
//! let fold: HashMap<char, char> = [('A', 'a'), ('B', 'b')].into_iter().collect();
//! let alphabet = Alphabet::from_fold_table(&fold);
//!
//! assert!(alphabet.contains('A'));
//! assert!(alphabet.contains('a'));
//! assert!(!alphabet.contains('1'));
//! assert_eq!(alphabet.fold_char('A'), 'a');
//! assert_eq!(alphabet.fold_char('a'), 'a');
//! ```

use std::collections::{HashMap, HashSet};

use ahash::RandomState;
use serde::{Deserialize, Serialize};

/// The set of characters recognized for a language, with case folding.
///
/// Membership decides where words begin and end; the fold map rewrites each
/// accepted character to its canonical form as it is consumed. Characters
/// absent from the fold map fold to themselves.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Alphabet {
    /// All recognized characters (fold-table keys ∪ values ∪ extras).
    letters: HashSet<char, RandomState>,
    /// Non-canonical form → canonical form.
    fold: HashMap<char, char, RandomState>,
}

impl Alphabet {
    /// Create an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an alphabet from a folding table.
    ///
    /// The recognized set is the union of the table's keys and values, so a
    /// table mapping `'A' → 'a'` admits both forms.
    pub fn from_fold_table(fold_table: &HashMap<char, char>) -> Self {
        let mut letters = HashSet::with_hasher(RandomState::new());
        let mut fold = HashMap::with_hasher(RandomState::new());

        for (&from, &to) in fold_table {
            letters.insert(from);
            letters.insert(to);
            fold.insert(from, to);
        }

        Alphabet { letters, fold }
    }

    /// Insert an extra recognized character that folds to itself.
    pub fn insert(&mut self, c: char) {
        self.letters.insert(c);
    }

    /// Merge another alphabet into this one.
    ///
    /// On conflicting fold entries the other alphabet wins, so merging in a
    /// fixed language order keeps the union deterministic.
    pub fn merge(&mut self, other: &Alphabet) {
        self.letters.extend(other.letters.iter().copied());
        for (&from, &to) in &other.fold {
            self.fold.insert(from, to);
        }
    }

    /// Check whether a character is recognized.
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// Fold a character to its canonical form (identity when unmapped).
    pub fn fold_char(&self, c: char) -> char {
        self.fold.get(&c).copied().unwrap_or(c)
    }

    /// Number of recognized characters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check whether the alphabet recognizes no characters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_fold() -> HashMap<char, char> {
        ('A'..='Z').zip('a'..='z').collect()
    }

    #[test]
    fn test_from_fold_table() {
        let alphabet = Alphabet::from_fold_table(&ascii_fold());

        // 26 uppercase + 26 lowercase
        assert_eq!(alphabet.len(), 52);
        assert!(alphabet.contains('Q'));
        assert!(alphabet.contains('q'));
        assert!(!alphabet.contains('7'));
        assert!(!alphabet.contains(' '));
    }

    #[test]
    fn test_fold_char() {
        let alphabet = Alphabet::from_fold_table(&ascii_fold());

        assert_eq!(alphabet.fold_char('H'), 'h');
        assert_eq!(alphabet.fold_char('h'), 'h');
        // Unmapped characters fold to themselves
        assert_eq!(alphabet.fold_char('!'), '!');
    }

    #[test]
    fn test_insert_extra_symbol() {
        let mut alphabet = Alphabet::from_fold_table(&ascii_fold());
        assert!(!alphabet.contains('\''));

        alphabet.insert('\'');
        assert!(alphabet.contains('\''));
        assert_eq!(alphabet.fold_char('\''), '\'');
    }

    #[test]
    fn test_merge() {
        let latin = Alphabet::from_fold_table(&ascii_fold());
        let cyrillic_fold: HashMap<char, char> = [('А', 'а'), ('Б', 'б')].into_iter().collect();
        let cyrillic = Alphabet::from_fold_table(&cyrillic_fold);

        let mut global = Alphabet::new();
        global.merge(&latin);
        global.merge(&cyrillic);

        assert!(global.contains('z'));
        assert!(global.contains('б'));
        assert_eq!(global.fold_char('А'), 'а');
        assert_eq!(global.len(), 52 + 4);
    }

    #[test]
    fn test_merge_conflict_later_wins() {
        let first = Alphabet::from_fold_table(&[('X', 'x')].into_iter().collect());
        let second = Alphabet::from_fold_table(&[('X', 'y')].into_iter().collect());

        let mut global = Alphabet::new();
        global.merge(&first);
        global.merge(&second);

        assert_eq!(global.fold_char('X'), 'y');
    }
}
