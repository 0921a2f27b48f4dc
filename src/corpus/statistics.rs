//! Corpus statistics builder.
//!
//! [`CorpusStatistics::build`] turns a [`CorpusConfig`] into the complete
//! statistical description of the configured languages: per-language
//! unigram and trigram profiles, per-language stopword sets, the global
//! alphabet, and the three global vocabularies that fix the feature space.
//!
//! The build is an eager, statically ordered pipeline. Each stage consumes
//! the outputs of the stages before it and runs exactly once:
//!
//! ```text
//! languages → alphabets → corpus words → profiles → vocabularies
//! ```
//!
//! There is no lazy re-derivation: once built, the value is read-only and
//! internally consistent, or the build failed and nothing escapes.

use std::collections::{HashMap, HashSet};

use ahash::RandomState;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::alphabet::Alphabet;
use crate::analysis::ngram::{CountMap, trigram_counts, unigram_counts};
use crate::analysis::normalizer::Normalizer;
use crate::corpus::config::CorpusConfig;
use crate::corpus::vocabulary::Vocabulary;
use crate::error::{GlossaError, Result};
use crate::language::Language;

/// The statistical profile of one language's reference corpus.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageProfile {
    /// Character occurrence counts over all corpus words.
    unigrams: CountMap<char>,
    /// Overlapping 3-character window counts over all corpus words.
    trigrams: CountMap<String>,
    /// The configured stopword set.
    stopwords: HashSet<String, RandomState>,
}

impl LanguageProfile {
    /// Unigram occurrence counts.
    pub fn unigrams(&self) -> &CountMap<char> {
        &self.unigrams
    }

    /// Trigram occurrence counts.
    pub fn trigrams(&self) -> &CountMap<String> {
        &self.trigrams
    }

    /// The stopword set.
    pub fn stopwords(&self) -> &HashSet<String, RandomState> {
        &self.stopwords
    }
}

/// All per-language profiles and global vocabularies for a built model.
///
/// Constructed once by [`build`](CorpusStatistics::build) and read-only
/// thereafter; discarding and rebuilding is the only way to change it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorpusStatistics {
    /// Configured languages, sorted.
    languages: Vec<Language>,
    /// Union of all per-language alphabets, used at serve time.
    global_alphabet: Alphabet,
    /// Per-language profiles.
    profiles: HashMap<Language, LanguageProfile, RandomState>,
    /// Union of per-language unigram profile keys, sorted.
    unigram_vocabulary: Vocabulary<char>,
    /// Union of per-language trigram profile keys, sorted.
    trigram_vocabulary: Vocabulary<String>,
    /// Union of per-language stopwords, sorted.
    stopword_vocabulary: Vocabulary<String>,
}

impl CorpusStatistics {
    /// Run the build pipeline over a configuration bundle.
    ///
    /// Fails on the first configuration problem; a partially built value is
    /// never returned.
    pub fn build(config: &CorpusConfig) -> Result<Self> {
        // Stage 1: the closed language set, sorted.
        let languages = config.languages().to_vec();
        debug!("building corpus statistics for {} languages", languages.len());

        // Stage 2: per-language alphabets and their union. Merging in
        // sorted language order keeps conflicting fold entries
        // deterministic (later language wins).
        debug!("building alphabets");
        let mut alphabets: HashMap<Language, Alphabet, RandomState> = HashMap::default();
        let mut global_alphabet = Alphabet::new();
        for language in &languages {
            let mut alphabet = Alphabet::from_fold_table(config.fold_table(language)?);
            alphabet.insert(config.extra_symbol());
            global_alphabet.merge(&alphabet);
            alphabets.insert(language.clone(), alphabet);
        }

        // Stage 3: normalize each corpus with its own language's alphabet.
        debug!("normalizing reference corpora");
        let mut corpus_words: HashMap<Language, Vec<String>, RandomState> = HashMap::default();
        for language in &languages {
            let alphabet = alphabets
                .get(language)
                .ok_or_else(|| GlossaError::unknown_language(language.as_str()))?;
            let words = Normalizer::new(alphabet).normalize(config.corpus_text(language)?);
            debug!("normalized {} words for language '{language}'", words.len());
            corpus_words.insert(language.clone(), words);
        }

        // Stage 4: unigram/trigram profiles and stopword sets.
        debug!("accumulating n-gram profiles");
        let mut profiles: HashMap<Language, LanguageProfile, RandomState> = HashMap::default();
        for language in &languages {
            let words = corpus_words
                .get(language)
                .ok_or_else(|| GlossaError::unknown_language(language.as_str()))?;
            profiles.insert(
                language.clone(),
                LanguageProfile {
                    unigrams: unigram_counts(words),
                    trigrams: trigram_counts(words),
                    stopwords: config.stopword_set(language)?.iter().cloned().collect(),
                },
            );
        }

        // Stage 5: global vocabularies, the fixed feature axes.
        debug!("deriving global vocabularies");
        let unigram_vocabulary =
            Vocabulary::from_keys(profiles.values().flat_map(|p| p.unigrams.keys().copied()));
        let trigram_vocabulary =
            Vocabulary::from_keys(profiles.values().flat_map(|p| p.trigrams.keys().cloned()));
        let stopword_vocabulary =
            Vocabulary::from_keys(profiles.values().flat_map(|p| p.stopwords.iter().cloned()));

        debug!(
            "vocabulary sizes: {} unigrams, {} trigrams, {} stopwords",
            unigram_vocabulary.len(),
            trigram_vocabulary.len(),
            stopword_vocabulary.len()
        );

        Ok(CorpusStatistics {
            languages,
            global_alphabet,
            profiles,
            unigram_vocabulary,
            trigram_vocabulary,
            stopword_vocabulary,
        })
    }

    /// The configured languages, sorted.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// The union of all per-language alphabets.
    pub fn global_alphabet(&self) -> &Alphabet {
        &self.global_alphabet
    }

    /// The full profile for a language.
    pub fn profile(&self, language: &Language) -> Result<&LanguageProfile> {
        self.profiles
            .get(language)
            .ok_or_else(|| GlossaError::unknown_language(language.as_str()))
    }

    /// Unigram counts for a language.
    pub fn unigrams(&self, language: &Language) -> Result<&CountMap<char>> {
        Ok(self.profile(language)?.unigrams())
    }

    /// Trigram counts for a language.
    pub fn trigrams(&self, language: &Language) -> Result<&CountMap<String>> {
        Ok(self.profile(language)?.trigrams())
    }

    /// Stopword set for a language.
    pub fn stopwords(&self, language: &Language) -> Result<&HashSet<String, RandomState>> {
        Ok(self.profile(language)?.stopwords())
    }

    /// The global unigram feature axis.
    pub fn unigram_vocabulary(&self) -> &Vocabulary<char> {
        &self.unigram_vocabulary
    }

    /// The global trigram feature axis.
    pub fn trigram_vocabulary(&self) -> &Vocabulary<String> {
        &self.trigram_vocabulary
    }

    /// The global stopword feature axis.
    pub fn stopword_vocabulary(&self) -> &Vocabulary<String> {
        &self.stopword_vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> Language {
        Language::new(code)
    }

    fn two_language_config() -> CorpusConfig {
        let languages = vec![lang("en"), lang("ru")];

        let english_fold: HashMap<char, char> = ('A'..='Z').zip('a'..='z').collect();
        let russian_fold: HashMap<char, char> = ('А'..='Я').zip('а'..='я').collect();
        let fold_tables = [(lang("en"), english_fold), (lang("ru"), russian_fold)]
            .into_iter()
            .collect();

        let stopwords = [
            (
                lang("en"),
                ["the", "and", "of"].iter().map(|s| s.to_string()).collect(),
            ),
            (
                lang("ru"),
                ["и", "не", "на"].iter().map(|s| s.to_string()).collect(),
            ),
        ]
        .into_iter()
        .collect();

        let corpora = [
            (lang("en"), "The quick brown fox jumps over the lazy dog".to_string()),
            (lang("ru"), "Съешь же ещё этих мягких французских булок".to_string()),
        ]
        .into_iter()
        .collect();

        CorpusConfig::new(languages, fold_tables, stopwords, corpora).unwrap()
    }

    #[test]
    fn test_build_produces_profiles_for_all_languages() {
        let statistics = CorpusStatistics::build(&two_language_config()).unwrap();

        assert_eq!(statistics.languages(), &[lang("en"), lang("ru")]);
        assert!(statistics.profile(&lang("en")).is_ok());
        assert!(statistics.profile(&lang("ru")).is_ok());
    }

    #[test]
    fn test_profile_keys_subset_of_vocabulary() {
        let statistics = CorpusStatistics::build(&two_language_config()).unwrap();

        for language in statistics.languages() {
            let profile = statistics.profile(language).unwrap();
            for key in profile.unigrams().keys() {
                assert!(
                    statistics.unigram_vocabulary().contains(key),
                    "unigram '{key}' of '{language}' missing from vocabulary"
                );
            }
            for key in profile.trigrams().keys() {
                assert!(
                    statistics.trigram_vocabulary().contains(key),
                    "trigram '{key}' of '{language}' missing from vocabulary"
                );
            }
            for word in profile.stopwords() {
                assert!(statistics.stopword_vocabulary().contains(word));
            }
        }
    }

    #[test]
    fn test_corpora_normalized_with_own_alphabet() {
        let statistics = CorpusStatistics::build(&two_language_config()).unwrap();

        // The English profile counts only Latin characters, the Russian
        // profile only Cyrillic ones.
        let english = statistics.unigrams(&lang("en")).unwrap();
        assert!(english.get(&'e') > 0);
        assert_eq!(english.get(&'ж'), 0);

        let russian = statistics.unigrams(&lang("ru")).unwrap();
        assert!(russian.get(&'ж') > 0);
        assert_eq!(russian.get(&'e'), 0);
    }

    #[test]
    fn test_case_folding_applied_to_corpus() {
        let statistics = CorpusStatistics::build(&two_language_config()).unwrap();

        let english = statistics.unigrams(&lang("en")).unwrap();
        // "The ... the ...": both occurrences fold to lowercase
        assert_eq!(english.get(&'T'), 0);
        assert!(english.get(&'t') >= 2);
    }

    #[test]
    fn test_global_alphabet_is_union() {
        let statistics = CorpusStatistics::build(&two_language_config()).unwrap();

        let alphabet = statistics.global_alphabet();
        assert!(alphabet.contains('z'));
        assert!(alphabet.contains('я'));
        assert!(alphabet.contains('\''));
        assert_eq!(alphabet.fold_char('Ф'), 'ф');
        assert_eq!(alphabet.fold_char('F'), 'f');
    }

    #[test]
    fn test_unknown_language_lookup_fails() {
        let statistics = CorpusStatistics::build(&two_language_config()).unwrap();

        let err = statistics.unigrams(&lang("xx")).unwrap_err();
        assert!(matches!(err, GlossaError::UnknownLanguage(_)));
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = two_language_config();
        let a = CorpusStatistics::build(&config).unwrap();
        let b = CorpusStatistics::build(&config).unwrap();

        assert_eq!(a.unigram_vocabulary(), b.unigram_vocabulary());
        assert_eq!(a.trigram_vocabulary(), b.trigram_vocabulary());
        assert_eq!(a.stopword_vocabulary(), b.stopword_vocabulary());
    }
}
