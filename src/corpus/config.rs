//! The build-time configuration bundle.
//!
//! A [`CorpusConfig`] carries everything the statistics builder needs: the
//! closed language set, a per-language case-folding table, per-language
//! stopword lists, per-language reference corpus texts, and the extra
//! alphabet symbol that keeps contractions together. All per-language
//! tables must cover exactly the configured language set; any gap or stray
//! entry is a configuration error, surfaced before anything is built.
//!
//! Configs can be constructed in memory with [`CorpusConfig::new`] or
//! loaded from a directory with [`CorpusConfig::load_from_dir`]:
//!
//! ```text
//! config/
//!   languages.json    # ["en", "ru"]
//!   alphabets.json    # {"en": {"A": "a", ...}, "ru": {...}}
//!   stopwords.json    # {"en": ["the", "a", ...], "ru": [...]}
//!   texts/
//!     en.txt          # UTF-8 reference corpus
//!     ru.txt
//! ```
//!
//! There is no ambient state: every path flows in through the directory
//! argument, and the parsed value is handed to the builder explicitly.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::{GlossaError, Result};
use crate::language::Language;

/// File name of the language list inside a config directory.
pub const LANGUAGES_FILE: &str = "languages.json";
/// File name of the per-language folding tables.
pub const ALPHABETS_FILE: &str = "alphabets.json";
/// File name of the per-language stopword lists.
pub const STOPWORDS_FILE: &str = "stopwords.json";
/// Subdirectory holding one `<code>.txt` reference corpus per language.
pub const TEXTS_DIR: &str = "texts";

/// Extra alphabet symbol used when none is configured.
pub const DEFAULT_EXTRA_SYMBOL: char = '\'';

/// The parsed configuration bundle for a model build.
#[derive(Clone, Debug)]
pub struct CorpusConfig {
    /// Configured language codes, sorted and deduplicated.
    languages: Vec<Language>,
    /// Per-language folding tables (non-canonical char → canonical char).
    fold_tables: HashMap<Language, HashMap<char, char>>,
    /// Per-language stopword sets.
    stopwords: HashMap<Language, HashSet<String>>,
    /// Per-language reference corpus texts.
    corpora: HashMap<Language, String>,
    /// Extra recognized symbol, folded to itself (allows contractions).
    extra_symbol: char,
}

impl CorpusConfig {
    /// Assemble a configuration from already-parsed parts.
    ///
    /// The language list is sorted and deduplicated; it must be non-empty,
    /// and each per-language table must cover exactly the resulting set.
    pub fn new(
        languages: Vec<Language>,
        fold_tables: HashMap<Language, HashMap<char, char>>,
        stopwords: HashMap<Language, HashSet<String>>,
        corpora: HashMap<Language, String>,
    ) -> Result<Self> {
        let mut languages = languages;
        languages.sort();
        languages.dedup();

        if languages.is_empty() {
            return Err(GlossaError::config("language list is empty"));
        }

        check_coverage(&fold_tables, &languages, "alphabet table")?;
        check_coverage(&stopwords, &languages, "stopword list")?;
        check_coverage(&corpora, &languages, "reference corpus")?;

        Ok(CorpusConfig {
            languages,
            fold_tables,
            stopwords,
            corpora,
            extra_symbol: DEFAULT_EXTRA_SYMBOL,
        })
    }

    /// Replace the extra alphabet symbol (defaults to `'`).
    pub fn with_extra_symbol(mut self, symbol: char) -> Self {
        self.extra_symbol = symbol;
        self
    }

    /// Load a configuration bundle from a directory.
    ///
    /// Expects `languages.json`, `alphabets.json`, `stopwords.json`, and a
    /// `texts/` directory with one `<code>.txt` file per language. Any
    /// missing or malformed file is a [`GlossaError::Config`].
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        debug!("loading corpus configuration from {}", dir.display());

        let codes: Vec<String> = read_json(&dir.join(LANGUAGES_FILE))?;
        let raw_alphabets: HashMap<String, HashMap<String, String>> =
            read_json(&dir.join(ALPHABETS_FILE))?;
        let raw_stopwords: HashMap<String, Vec<String>> = read_json(&dir.join(STOPWORDS_FILE))?;

        let languages: Vec<Language> = codes.into_iter().map(Language::from).collect();

        let mut fold_tables = HashMap::new();
        for (code, table) in raw_alphabets {
            let mut fold = HashMap::new();
            for (from, to) in table {
                fold.insert(table_char(&code, &from)?, table_char(&code, &to)?);
            }
            fold_tables.insert(Language::from(code), fold);
        }

        let stopwords: HashMap<Language, HashSet<String>> = raw_stopwords
            .into_iter()
            .map(|(code, words)| (Language::from(code), words.into_iter().collect()))
            .collect();

        let mut corpora = HashMap::new();
        for language in &languages {
            let path = dir.join(TEXTS_DIR).join(format!("{language}.txt"));
            let text = fs::read_to_string(&path).map_err(|e| {
                GlossaError::config(format!("cannot read corpus {}: {e}", path.display()))
            })?;
            corpora.insert(language.clone(), text);
        }

        Self::new(languages, fold_tables, stopwords, corpora)
    }

    /// The configured languages, sorted.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// The folding table for a language.
    pub fn fold_table(&self, language: &Language) -> Result<&HashMap<char, char>> {
        self.fold_tables
            .get(language)
            .ok_or_else(|| GlossaError::unknown_language(language.as_str()))
    }

    /// The stopword set for a language.
    pub fn stopword_set(&self, language: &Language) -> Result<&HashSet<String>> {
        self.stopwords
            .get(language)
            .ok_or_else(|| GlossaError::unknown_language(language.as_str()))
    }

    /// The reference corpus text for a language.
    pub fn corpus_text(&self, language: &Language) -> Result<&str> {
        self.corpora
            .get(language)
            .map(String::as_str)
            .ok_or_else(|| GlossaError::unknown_language(language.as_str()))
    }

    /// The extra recognized symbol.
    pub fn extra_symbol(&self) -> char {
        self.extra_symbol
    }
}

/// Check that a per-language table covers exactly the configured set.
fn check_coverage<T>(
    table: &HashMap<Language, T>,
    languages: &[Language],
    what: &str,
) -> Result<()> {
    for language in languages {
        if !table.contains_key(language) {
            return Err(GlossaError::config(format!(
                "{what} missing for language '{language}'"
            )));
        }
    }
    for key in table.keys() {
        if languages.binary_search(key).is_err() {
            return Err(GlossaError::config(format!(
                "{what} configured for unknown language '{key}'"
            )));
        }
    }
    Ok(())
}

/// Read and parse a JSON configuration file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .map_err(|e| GlossaError::config(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| GlossaError::config(format!("malformed {}: {e}", path.display())))
}

/// Parse a folding-table entry that must be a single character.
fn table_char(code: &str, s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GlossaError::config(format!(
            "alphabet entry '{s}' for language '{code}' is not a single character"
        ))),
    }
}
