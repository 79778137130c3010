// Re-export main components
pub mod api;
pub mod batch;
pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod stemmer;
pub mod tokenizer;
pub mod tweets;
pub mod words;

// Re-export commonly used types
pub use error::{Result, SentimentError};
pub use lexicon::Lexicon;
pub use scorer::{Scorer, ScorerOptions, TokenScore};
pub use stemmer::WordStemmer;
pub use tokenizer::tokenize;
pub use tweets::{parse_tweets, Tweet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() -> Result<()> {
        let scorer = Scorer::new(&ScorerOptions::default())?;

        assert_eq!(tokenize("this is good"), vec!["this", "is", "good"]);
        assert_eq!(scorer.stemmer().stem("running"), "run");
        assert_eq!(scorer.score("this is good"), 1);

        let mut tweets = parse_tweets(r#"{"statuses": [{"text": "this is bad"}]}"#)?;
        tweets::score_tweets(&scorer, &mut tweets);
        assert_eq!(tweets[0].score, Some(-1));

        Ok(())
    }
}
