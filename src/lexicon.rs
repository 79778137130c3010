use crate::error::{Result, SentimentError};
use crate::stemmer::WordStemmer;
use crate::words::{NEGATIVE_WORDS, POSITIVE_WORDS};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Stemmed positive and negative term sets.
///
/// Both sets only ever hold stemmed forms. They are built once and never
/// mutated afterwards, so a lexicon can be shared freely between scorers.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Stem both word lists with `stemmer` and collect the results
    pub fn build<P, N>(stemmer: &WordStemmer, positive_words: P, negative_words: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let positive: HashSet<String> = positive_words
            .into_iter()
            .map(|w| stemmer.stem(w.as_ref()))
            .collect();
        let negative: HashSet<String> = negative_words
            .into_iter()
            .map(|w| stemmer.stem(w.as_ref()))
            .collect();

        tracing::debug!(
            language = stemmer.language(),
            positive = positive.len(),
            negative = negative.len(),
            "built sentiment lexicon"
        );

        Self { positive, negative }
    }

    /// Lexicon from the built-in English word lists
    pub fn builtin(stemmer: &WordStemmer) -> Self {
        Self::build(stemmer, POSITIVE_WORDS, NEGATIVE_WORDS)
    }

    pub fn is_positive(&self, stem: &str) -> bool {
        self.positive.contains(stem)
    }

    pub fn is_negative(&self, stem: &str) -> bool {
        self.negative.contains(stem)
    }

    /// Score contribution of one stemmed token.
    ///
    /// Membership is checked independently, so a stem found in both sets
    /// contributes nothing.
    pub fn polarity(&self, stem: &str) -> i64 {
        let mut delta = 0;
        if self.is_positive(stem) {
            delta += 1;
        }
        if self.is_negative(stem) {
            delta -= 1;
        }
        delta
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    /// Stems present in both sets
    pub fn overlap(&self) -> Vec<&str> {
        let mut shared: Vec<&str> = self
            .positive
            .intersection(&self.negative)
            .map(String::as_str)
            .collect();
        shared.sort_unstable();
        shared
    }
}

/// Read a word list file: one word per line, blank lines and `#` comments skipped
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| SentimentError::WordList {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&contents))
}

fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_stems_words() {
        let stemmer = WordStemmer::english();
        let lexicon = Lexicon::build(&stemmer, ["running", "runs", "good"], ["bad"]);
        // "running" and "runs" collapse onto "run"
        assert_eq!(lexicon.positive_len(), 2);
        assert!(lexicon.is_positive("run"));
        assert!(!lexicon.is_positive("running"));
        assert!(lexicon.is_negative("bad"));
    }

    #[test]
    fn test_polarity() {
        let stemmer = WordStemmer::english();
        let lexicon = Lexicon::build(&stemmer, ["good", "fine"], ["bad", "fine"]);
        assert_eq!(lexicon.polarity("good"), 1);
        assert_eq!(lexicon.polarity("bad"), -1);
        let fine = stemmer.stem("fine");
        assert_eq!(lexicon.polarity(&fine), 0);
        assert_eq!(lexicon.polarity("table"), 0);
        assert_eq!(lexicon.overlap(), vec![fine.as_str()]);
    }

    #[test]
    fn test_builtin_lexicon() {
        let lexicon = Lexicon::builtin(&WordStemmer::english());
        assert!(lexicon.is_positive("good"));
        assert!(lexicon.is_negative("bad"));
        assert!(lexicon.positive_len() > 100);
        assert!(lexicon.negative_len() > 100);
    }

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("# positive words\nhappy\n\n  joy  \n#skip\nlove\n");
        assert_eq!(words, vec!["happy", "joy", "love"]);
    }

    #[test]
    fn test_read_word_list_missing_file() {
        let err = read_word_list("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, SentimentError::WordList { .. }));
    }

    #[test]
    fn test_read_word_list_file() -> Result<()> {
        let path = std::env::temp_dir().join(format!("twsent-words-{}.txt", std::process::id()));
        fs::write(&path, "great\nsplendid\n").map_err(|source| SentimentError::WordList {
            path: path.clone(),
            source,
        })?;
        let words = read_word_list(&path)?;
        let _ = fs::remove_file(&path);
        assert_eq!(words, vec!["great", "splendid"]);
        Ok(())
    }
}
