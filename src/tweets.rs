use crate::error::Result;
use crate::scorer::Scorer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Max characters kept from a tweet's text
pub const MAX_TEXT_CHARS: usize = 500;
/// Max characters kept from a user's location
pub const MAX_LOCATION_CHARS: usize = 50;

const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";
const MISSING_QUERY: &str = "-";

// ========== Wire Types ==========

/// A Twitter `search/tweets.json` response body.
///
/// Nothing here talks to the network; callers hand in the JSON text. Null
/// values read the same as missing keys.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub statuses: Option<Vec<Status>>,
    #[serde(default)]
    pub search_metadata: Option<SearchMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub next_results: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub id_str: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub retweet_count: Option<i64>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

// ========== Rows ==========

/// One tweet, flattened
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tweet {
    pub tweet_id: u64,
    pub query: String,
    pub retweet_count: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub text: String,
    pub user_id: u64,
    pub user_name: String,
    pub user_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

impl SearchResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The query these results answer: the metadata query, then the
    /// top-level one, then "-"
    pub fn query(&self) -> &str {
        self.search_metadata
            .as_ref()
            .and_then(|m| m.query.as_deref())
            .or(self.query.as_deref())
            .unwrap_or(MISSING_QUERY)
    }

    /// Query string for the next page of results, if there is one
    pub fn next_results(&self) -> Option<&str> {
        self.search_metadata
            .as_ref()
            .and_then(|m| m.next_results.as_deref())
            .filter(|next| !next.is_empty())
    }

    /// Flatten every status into a row, in response order
    pub fn tweets(&self) -> Vec<Tweet> {
        let query = self.query();
        self.statuses
            .iter()
            .flatten()
            .map(|s| s.to_tweet(query))
            .collect()
    }
}

impl Status {
    fn to_tweet(&self, query: &str) -> Tweet {
        let (user_id, user_name, user_location) = match &self.user {
            Some(user) => (
                user.id.unwrap_or(0),
                user.screen_name.clone().unwrap_or_default(),
                truncate_chars(user.location.as_deref().unwrap_or(""), MAX_LOCATION_CHARS),
            ),
            None => (0, String::new(), String::new()),
        };

        Tweet {
            tweet_id: self
                .id_str
                .as_deref()
                .and_then(|id| id.trim().parse().ok())
                .unwrap_or(0),
            query: query.to_string(),
            retweet_count: self.retweet_count.unwrap_or(0),
            created_at: self.created_at.as_deref().and_then(parse_created_at),
            text: truncate_chars(self.text.as_deref().unwrap_or(""), MAX_TEXT_CHARS),
            user_id,
            user_name,
            user_location,
            score: None,
        }
    }
}

/// Parse a response body straight into tweet rows
pub fn parse_tweets(json: &str) -> Result<Vec<Tweet>> {
    Ok(SearchResponse::from_json(json)?.tweets())
}

/// Fill in each tweet's sentiment score
pub fn score_tweets(scorer: &Scorer, tweets: &mut [Tweet]) {
    for tweet in tweets.iter_mut() {
        tweet.score = Some(scorer.score_value(Some(&tweet.text)));
    }
}

/// Parse Twitter's `created_at` ("Mon Sep 24 03:35:21 +0000 2012")
pub fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(raw.trim(), CREATED_AT_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
