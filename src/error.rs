use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a scorer or reading tweet data.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("unsupported stemming language: {0}")]
    UnsupportedLanguage(String),

    #[error("failed to read word list {}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON text: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
