use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, BufWriter, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use twsent::api::{create_router, AppState};
use twsent::batch::{score_rows_with_jobs, stem_rows};
use twsent::tweets::{score_tweets, SearchResponse};
use twsent::{Scorer, ScorerOptions, WordStemmer};

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Lexicon-based tweet sentiment scoring", long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct LexiconArgs {
    /// Stemming language (name or ISO code)
    #[arg(short, long, default_value = "english")]
    language: String,

    /// File of positive words, one per line
    #[arg(long)]
    positive: Option<PathBuf>,

    /// File of negative words, one per line
    #[arg(long)]
    negative: Option<PathBuf>,
}

impl LexiconArgs {
    fn scorer(&self) -> Result<Scorer> {
        let options = ScorerOptions {
            language: self.language.clone(),
            positive_words: self.positive.clone(),
            negative_words: self.negative.clone(),
        };
        Scorer::new(&options).context("Failed to initialize scorer")
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stem words given as arguments, or each line of stdin
    Stem {
        words: Vec<String>,

        /// Stemming language (name or ISO code)
        #[arg(short, long, default_value = "english")]
        language: String,
    },

    /// Score each line of stdin
    Score {
        #[command(flatten)]
        lexicon: LexiconArgs,

        /// Worker threads (1 scores on the main thread)
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Print JSON lines with the text alongside its score
        #[arg(long)]
        json: bool,
    },

    /// Parse a Twitter search response into JSON lines
    Tweets {
        /// Response file; stdin when omitted
        file: Option<PathBuf>,

        /// Add a sentiment score to every tweet
        #[arg(long)]
        score: bool,

        #[command(flatten)]
        lexicon: LexiconArgs,
    },

    /// Serve the HTTP API
    Serve {
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        addr: String,

        #[command(flatten)]
        lexicon: LexiconArgs,
    },
}

#[derive(Serialize)]
struct ScoredLine<'a> {
    text: &'a str,
    score: i64,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// Read stdin as rows; an empty line is a null row
fn read_rows() -> Result<Vec<Option<String>>> {
    let stdin = io::stdin();
    let mut rows = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        rows.push(if line.is_empty() { None } else { Some(line) });
    }
    Ok(rows)
}

fn run_stem(words: Vec<String>, language: &str) -> Result<()> {
    let stemmer = WordStemmer::new(language).context("Failed to initialize stemmer")?;

    let rows = if words.is_empty() {
        read_rows()?
    } else {
        words.into_iter().map(Some).collect()
    };

    let stems = stem_rows(&stemmer, rows.iter().map(|r| r.as_deref()));
    let mut out = BufWriter::new(io::stdout().lock());
    for stem in stems {
        writeln!(out, "{}", stem)?;
    }
    out.flush()?;
    Ok(())
}

fn run_score(lexicon: &LexiconArgs, jobs: usize, json: bool) -> Result<()> {
    let scorer = lexicon.scorer()?;
    let rows = read_rows()?;

    let start = Instant::now();
    let scores = score_rows_with_jobs(&scorer, &rows, jobs);
    tracing::debug!("Scored {} rows in {:?}", rows.len(), start.elapsed());

    let mut out = BufWriter::new(io::stdout().lock());
    for (row, score) in rows.iter().zip(scores) {
        if json {
            let line = ScoredLine {
                text: row.as_deref().unwrap_or(""),
                score,
            };
            writeln!(out, "{}", serde_json::to_string(&line)?)?;
        } else {
            writeln!(out, "{}", score)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_tweets(file: Option<PathBuf>, score: bool, lexicon: &LexiconArgs) -> Result<()> {
    let body = match &file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body).context("Failed to read stdin")?;
            body
        }
    };

    let response = SearchResponse::from_json(&body)?;
    let mut tweets = response.tweets();
    if score {
        score_tweets(&lexicon.scorer()?, &mut tweets);
    }
    if let Some(next) = response.next_results() {
        tracing::info!("More results available: {}", next);
    }

    let mut out = BufWriter::new(io::stdout().lock());
    for tweet in &tweets {
        writeln!(out, "{}", serde_json::to_string(tweet)?)?;
    }
    out.flush()?;
    Ok(())
}

async fn run_serve(addr: &str, lexicon: &LexiconArgs) -> Result<()> {
    let state = Arc::new(AppState::new(lexicon.scorer()?));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Stem { words, language } => run_stem(words, &language),
        Command::Score { lexicon, jobs, json } => run_score(&lexicon, jobs, json),
        Command::Tweets { file, score, lexicon } => run_tweets(file, score, &lexicon),
        Command::Serve { addr, lexicon } => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            runtime.block_on(run_serve(&addr, &lexicon))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_score() {
        let args = Args::try_parse_from(["twsent", "score", "--jobs", "4", "--json"]).unwrap();
        match args.command {
            Command::Score { lexicon, jobs, json } => {
                assert_eq!(lexicon.language, "english");
                assert_eq!(jobs, 4);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_parses_stem_words() {
        let args = Args::try_parse_from(["twsent", "-v", "stem", "running", "jumps"]).unwrap();
        assert_eq!(args.verbose, 1);
        match args.command {
            Command::Stem { words, .. } => assert_eq!(words, vec!["running", "jumps"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_parses_serve_with_lists() {
        let args = Args::try_parse_from([
            "twsent", "serve", "--addr", "0.0.0.0:8080", "--positive", "pos.txt",
        ])
        .unwrap();
        match args.command {
            Command::Serve { addr, lexicon } => {
                assert_eq!(addr, "0.0.0.0:8080");
                assert_eq!(lexicon.positive, Some(PathBuf::from("pos.txt")));
                assert_eq!(lexicon.negative, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Args::try_parse_from(["twsent"]).is_err());
    }
}
