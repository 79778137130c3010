use crate::error::{Result, SentimentError};
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;

/// Snowball languages, by name and ISO 639-1 code.
const LANGUAGES: &[(&str, &str, Algorithm)] = &[
    ("arabic", "ar", Algorithm::Arabic),
    ("danish", "da", Algorithm::Danish),
    ("dutch", "nl", Algorithm::Dutch),
    ("english", "en", Algorithm::English),
    ("finnish", "fi", Algorithm::Finnish),
    ("french", "fr", Algorithm::French),
    ("german", "de", Algorithm::German),
    ("greek", "el", Algorithm::Greek),
    ("hungarian", "hu", Algorithm::Hungarian),
    ("italian", "it", Algorithm::Italian),
    ("norwegian", "no", Algorithm::Norwegian),
    ("portuguese", "pt", Algorithm::Portuguese),
    ("romanian", "ro", Algorithm::Romanian),
    ("russian", "ru", Algorithm::Russian),
    ("spanish", "es", Algorithm::Spanish),
    ("swedish", "sv", Algorithm::Swedish),
    ("tamil", "ta", Algorithm::Tamil),
    ("turkish", "tr", Algorithm::Turkish),
];

pub const DEFAULT_LANGUAGE: &str = "english";

/// Resolve a language name or code to its canonical name and algorithm
fn resolve(language: &str) -> Result<(&'static str, Algorithm)> {
    let wanted = language.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|(name, code, _)| *name == wanted || *code == wanted)
        .map(|(name, _, algorithm)| (*name, *algorithm))
        .ok_or_else(|| SentimentError::UnsupportedLanguage(language.to_string()))
}

/// Names of every language a stemmer can be built for.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|(name, _, _)| *name)
}

/// A stemmer handle for one language.
///
/// The handle is owned by whoever created it and is released when dropped.
/// Use [`WordStemmer::duplicate`] to hand a separate handle to another worker.
pub struct WordStemmer {
    stemmer: Stemmer,
    language: &'static str,
    algorithm: Algorithm,
}

impl WordStemmer {
    /// Create a stemmer for the given language ("english", "en", ...)
    pub fn new(language: &str) -> Result<Self> {
        let (language, algorithm) = resolve(language)?;
        Ok(Self {
            stemmer: Stemmer::create(algorithm),
            language,
            algorithm,
        })
    }

    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
            language: DEFAULT_LANGUAGE,
            algorithm: Algorithm::English,
        }
    }

    /// Build an independent handle for the same language
    pub fn duplicate(&self) -> Self {
        Self {
            stemmer: Stemmer::create(self.algorithm),
            language: self.language,
            algorithm: self.algorithm,
        }
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Reduce a word to its stem.
    ///
    /// No pre-filtering happens here: punctuation, case and whitespace are
    /// whatever the Snowball algorithm makes of them.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    /// Stem a nullable value. Null and empty input give an empty string
    /// without touching the algorithm.
    pub fn stem_value(&self, word: Option<&str>) -> String {
        match word {
            Some(w) if !w.is_empty() => self.stem(w),
            _ => String::new(),
        }
    }
}

impl fmt::Debug for WordStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Default for WordStemmer {
    fn default() -> Self {
        Self::english()
    }
}
