use crate::error::Result;
use crate::lexicon::{read_word_list, Lexicon};
use crate::stemmer::{WordStemmer, DEFAULT_LANGUAGE};
use crate::tokenizer::tokens;
use crate::words::{NEGATIVE_WORDS, POSITIVE_WORDS};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Scorer options
#[derive(Debug, Clone)]
pub struct ScorerOptions {
    /// Stemming language, by name or ISO code
    pub language: String,
    /// File of positive words; the built-in list when `None`
    pub positive_words: Option<PathBuf>,
    /// File of negative words; the built-in list when `None`
    pub negative_words: Option<PathBuf>,
}

impl Default for ScorerOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            positive_words: None,
            negative_words: None,
        }
    }
}

/// How one token contributed to a score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenScore {
    pub token: String,
    pub stem: String,
    pub contribution: i64,
}

/// Lexicon-based sentiment scorer.
///
/// A scorer owns its stemmer handle and shares its lexicon. It is meant to
/// be used by one worker at a time; call [`Scorer::fork`] to get a scorer
/// for another worker.
#[derive(Debug)]
pub struct Scorer {
    stemmer: WordStemmer,
    lexicon: Arc<Lexicon>,
}

impl Scorer {
    /// Build a scorer from options. Fails if the language is unsupported or
    /// a word list file cannot be read.
    pub fn new(options: &ScorerOptions) -> Result<Self> {
        let stemmer = WordStemmer::new(&options.language)?;

        let positive = match &options.positive_words {
            Some(path) => read_word_list(path)?,
            None => POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        };
        let negative = match &options.negative_words {
            Some(path) => read_word_list(path)?,
            None => NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        };

        if stemmer.language() != DEFAULT_LANGUAGE
            && (options.positive_words.is_none() || options.negative_words.is_none())
        {
            tracing::warn!(
                language = stemmer.language(),
                "built-in word lists are English; scoring other languages needs custom lists"
            );
        }

        let lexicon = Lexicon::build(&stemmer, positive, negative);
        Ok(Self::with_lexicon(stemmer, Arc::new(lexicon)))
    }

    /// English scorer over the built-in lexicon
    pub fn english() -> Self {
        let stemmer = WordStemmer::english();
        let lexicon = Lexicon::builtin(&stemmer);
        Self::with_lexicon(stemmer, Arc::new(lexicon))
    }

    /// Pair a stemmer with an already built lexicon.
    ///
    /// The lexicon must have been stemmed with the same language, otherwise
    /// tokens and entries will not line up.
    pub fn with_lexicon(stemmer: WordStemmer, lexicon: Arc<Lexicon>) -> Self {
        Self { stemmer, lexicon }
    }

    /// A new scorer with its own stemmer handle over the same lexicon
    pub fn fork(&self) -> Self {
        Self {
            stemmer: self.stemmer.duplicate(),
            lexicon: Arc::clone(&self.lexicon),
        }
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn stemmer(&self) -> &WordStemmer {
        &self.stemmer
    }

    /// Number of positive tokens minus number of negative tokens in `text`
    pub fn score(&self, text: &str) -> i64 {
        tokens(text)
            .map(|token| self.lexicon.polarity(&self.stemmer.stem(token)))
            .sum()
    }

    /// Score a nullable value; null and empty text score 0
    pub fn score_value(&self, text: Option<&str>) -> i64 {
        match text {
            Some(t) if !t.is_empty() => self.score(t),
            _ => 0,
        }
    }

    /// Per-token contributions, in token order
    pub fn breakdown(&self, text: &str) -> Vec<TokenScore> {
        tokens(text)
            .map(|token| {
                let stem = self.stemmer.stem(token);
                let contribution = self.lexicon.polarity(&stem);
                TokenScore {
                    token: token.to_string(),
                    stem,
                    contribution,
                }
            })
            .collect()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SentimentError;

    #[test]
    fn test_score_scenarios() {
        let scorer = Scorer::english();
        assert_eq!(scorer.score("this is good"), 1);
        assert_eq!(scorer.score("this is bad"), -1);
        assert_eq!(scorer.score("good and bad"), 0);
        // Snowball English strips "-ness", so "goodness" matches too
        assert_eq!(scorer.score("goodness is good"), 2);
    }

    #[test]
    fn test_empty_and_null() {
        let scorer = Scorer::english();
        assert_eq!(scorer.score(""), 0);
        assert_eq!(scorer.score("   \n\t"), 0);
        assert_eq!(scorer.score_value(None), 0);
        assert_eq!(scorer.score_value(Some("")), 0);
        assert_eq!(scorer.score_value(Some("good good")), 2);
    }

    #[test]
    fn test_repeated_words_count_each_time() {
        let scorer = Scorer::english();
        assert_eq!(scorer.score("good good good"), 3);
        assert_eq!(scorer.score("bad bad"), -2);
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let scorer = Scorer::english();
        assert_eq!(scorer.score("good."), 0);
    }

    #[test]
    fn test_order_does_not_matter() {
        let scorer = Scorer::english();
        let a = scorer.score("great day but terrible traffic and good coffee");
        let b = scorer.score("coffee good and traffic terrible but day great");
        assert_eq!(a, b);
        assert_eq!(a, 1);
    }

    #[test]
    fn test_appending_tokens() {
        let scorer = Scorer::english();
        let base = "the table is in the kitchen";
        let before = scorer.score(base);
        assert_eq!(scorer.score(&format!("{} great", base)), before + 1);
        assert_eq!(scorer.score(&format!("{} terrible", base)), before - 1);
        assert_eq!(scorer.score(&format!("{} chair", base)), before);
    }

    #[test]
    fn test_overlapping_lexicon_nets_zero() {
        let stemmer = WordStemmer::english();
        let lexicon = Lexicon::build(&stemmer, ["sick", "good"], ["sick"]);
        let scorer = Scorer::with_lexicon(stemmer, Arc::new(lexicon));
        assert_eq!(scorer.score("sick"), 0);
        assert_eq!(scorer.score("sick good"), 1);
    }

    #[test]
    fn test_fork_shares_lexicon() {
        let scorer = Scorer::english();
        let forked = scorer.fork();
        assert!(Arc::ptr_eq(scorer.lexicon(), forked.lexicon()));
        assert_eq!(forked.score("this is good"), 1);
    }

    #[test]
    fn test_breakdown() {
        let scorer = Scorer::english();
        let parts = scorer.breakdown("running is good");
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].stem, "run");
        assert_eq!(parts[2].contribution, 1);
        let total: i64 = parts.iter().map(|p| p.contribution).sum();
        assert_eq!(total, scorer.score("running is good"));
    }

    #[test]
    fn test_new_with_options() -> Result<()> {
        let scorer = Scorer::new(&ScorerOptions::default())?;
        assert_eq!(scorer.score("this is good"), 1);
        assert_eq!(scorer.stemmer().language(), "english");
        Ok(())
    }

    #[test]
    fn test_new_unsupported_language() {
        let options = ScorerOptions {
            language: "esperanto".to_string(),
            ..ScorerOptions::default()
        };
        let err = Scorer::new(&options).unwrap_err();
        assert!(matches!(err, SentimentError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_new_missing_word_list() {
        let options = ScorerOptions {
            positive_words: Some(PathBuf::from("/nonexistent/positive.txt")),
            ..ScorerOptions::default()
        };
        assert!(matches!(
            Scorer::new(&options),
            Err(SentimentError::WordList { .. })
        ));
    }
}
