//! Integration tests for the full build → predict pipeline.

use std::collections::{HashMap, HashSet};

use glossa::analysis::ngram::{trigram_counts, unigram_counts};
use glossa::analysis::normalizer::Normalizer;
use glossa::prelude::*;

fn lang(code: &str) -> Language {
    Language::new(code)
}

/// A small but realistic two-language configuration: Latin and Cyrillic
/// alphabets with uppercase folding, disjoint stopword sets, and a few
/// sentences of reference text each.
fn fixture_config() -> CorpusConfig {
    let languages = vec![lang("en"), lang("ru")];

    let english_fold: HashMap<char, char> = ('A'..='Z').zip('a'..='z').collect();
    let russian_fold: HashMap<char, char> = ('А'..='Я').zip('а'..='я').collect();
    let fold_tables = [(lang("en"), english_fold), (lang("ru"), russian_fold)]
        .into_iter()
        .collect();

    let stopwords: HashMap<Language, HashSet<String>> = [
        (
            lang("en"),
            ["the", "and", "of", "is", "in", "to"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        (
            lang("ru"),
            ["и", "не", "на", "что", "как", "это"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
    ]
    .into_iter()
    .collect();

    let corpora = [
        (
            lang("en"),
            "The quick brown fox jumps over the lazy dog. \
             Don't stop believing in the power of plain words."
                .to_string(),
        ),
        (
            lang("ru"),
            "Съешь же ещё этих мягких французских булок да выпей чаю. \
             Широкая электрификация южных губерний даст мощный толчок."
                .to_string(),
        ),
    ]
    .into_iter()
    .collect();

    CorpusConfig::new(languages, fold_tables, stopwords, corpora).unwrap()
}

#[test]
fn test_predict_returns_exactly_three_fixed_methods() -> Result<()> {
    let predictor = Predictor::build_fresh(&fixture_config())?;
    let predictions = predictor.predict("a sample text")?;

    let map = predictions.to_map();
    assert_eq!(map.len(), 3);
    assert!(map.contains_key(UNIGRAM_METHOD));
    assert!(map.contains_key(TRIGRAM_METHOD));
    assert!(map.contains_key(STOPWORDS_METHOD));
    Ok(())
}

#[test]
fn test_predicted_codes_come_from_configured_set() -> Result<()> {
    let predictor = Predictor::build_fresh(&fixture_config())?;
    let languages = predictor.statistics().languages();

    for text in ["hello there", "привет мир", "123 !!!", ""] {
        let predictions = predictor.predict(text)?;
        for (_, language) in predictions.iter() {
            assert!(languages.contains(language), "unexpected code {language}");
        }
    }
    Ok(())
}

#[test]
fn test_hello_world_counting_scenario() -> Result<()> {
    let predictor = Predictor::build_fresh(&fixture_config())?;
    let alphabet = predictor.statistics().global_alphabet();

    let words = Normalizer::new(alphabet).normalize("Hello World");
    assert_eq!(words, vec!["hello", "world"]);

    let unigrams = unigram_counts(&words);
    for (c, expected) in [('h', 1), ('e', 1), ('l', 3), ('o', 2), ('w', 1), ('r', 1), ('d', 1)] {
        assert_eq!(unigrams.get(&c), expected, "count of '{c}'");
    }

    let trigrams = trigram_counts(&words);
    for t in ["hel", "ell", "llo", "wor", "orl", "rld"] {
        assert_eq!(trigrams.get(&t.to_string()), 1, "count of '{t}'");
    }
    assert_eq!(trigrams.len(), 6);
    Ok(())
}

#[test]
fn test_apostrophe_keeps_contractions_together() -> Result<()> {
    let predictor = Predictor::build_fresh(&fixture_config())?;
    let alphabet = predictor.statistics().global_alphabet();

    let words = Normalizer::new(alphabet).normalize("don't stop");
    assert_eq!(words, vec!["don't", "stop"]);
    Ok(())
}

#[test]
fn test_scripts_separate_cleanly() -> Result<()> {
    let predictor = Predictor::build_fresh(&fixture_config())?;

    let english = predictor.predict("the quick brown fox")?;
    assert_eq!(english.unigram, lang("en"));
    assert_eq!(english.trigram, lang("en"));

    let russian = predictor.predict("мягких французских булок")?;
    assert_eq!(russian.unigram, lang("ru"));
    assert_eq!(russian.trigram, lang("ru"));
    Ok(())
}

#[test]
fn test_degenerate_round_trip_over_training_profiles() -> Result<()> {
    // One exemplar per class: every language's own training profile must
    // classify as that language, for all three families.
    let predictor = Predictor::build_fresh(&fixture_config())?;
    let statistics = predictor.statistics();

    for language in statistics.languages() {
        assert_eq!(
            predictor.unigram_bayes_method(statistics.unigrams(language)?)?,
            language
        );
        assert_eq!(
            predictor.trigram_bayes_method(statistics.trigrams(language)?)?,
            language
        );
        assert_eq!(
            predictor.stopwords_bayes_method(statistics.stopwords(language)?)?,
            language
        );
    }
    Ok(())
}

#[test]
fn test_separator_only_input_still_answers() -> Result<()> {
    let predictor = Predictor::build_fresh(&fixture_config())?;

    // No recognized words at all: zero vectors everywhere, answered by
    // the deterministic tie-break (first language in sorted order).
    let predictions = predictor.predict("123 !!!")?;
    assert_eq!(predictions.unigram, lang("en"));
    assert_eq!(predictions.trigram, lang("en"));
    assert_eq!(predictions.stopwords, lang("en"));
    Ok(())
}

#[test]
fn test_stopword_method_tracks_stopword_vocabulary() -> Result<()> {
    let predictor = Predictor::build_fresh(&fixture_config())?;

    // Text consisting purely of one language's stopwords pins the
    // stopword method to that language.
    let english = predictor.predict("the and of is in to")?;
    assert_eq!(english.stopwords, lang("en"));

    let russian = predictor.predict("и не на что как это")?;
    assert_eq!(russian.stopwords, lang("ru"));
    Ok(())
}

#[test]
fn test_serving_is_repeatable() -> Result<()> {
    let predictor = Predictor::build_fresh(&fixture_config())?;

    let first = predictor.predict("the quick brown fox")?;
    let second = predictor.predict("the quick brown fox")?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_predictor_is_shareable_across_threads() -> Result<()> {
    // Serving is read-only; concurrent callers need no locking.
    let predictor = std::sync::Arc::new(Predictor::build_fresh(&fixture_config())?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let predictor = predictor.clone();
            std::thread::spawn(move || predictor.predict("the lazy dog").unwrap().unigram)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), lang("en"));
    }
    Ok(())
}
