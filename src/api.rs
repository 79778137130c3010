use crate::batch::{score_rows, stem_rows};
use crate::error::SentimentError;
use crate::scorer::Scorer;
use crate::stemmer::{supported_languages, WordStemmer};
use crate::tweets::{parse_tweets, score_tweets, Tweet};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// ========== Request/Response Types ==========

#[derive(Debug, Deserialize)]
pub struct StemRequest {
    pub rows: Vec<Option<String>>,
    /// Stem with another language than the service default
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub rows: Vec<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct RowsResponse<T> {
    pub results: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct TweetsResponse {
    pub tweets: Vec<Tweet>,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub language: &'static str,
    pub positive_terms: usize,
    pub negative_terms: usize,
    pub languages: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}

// ========== Error Handling ==========

struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = format!("{:#}", self.0);

        let status = match self.0.downcast_ref::<SentimentError>() {
            Some(SentimentError::UnsupportedLanguage(_)) | Some(SentimentError::MalformedJson(_)) => {
                tracing::warn!("rejected request: {}", message);
                StatusCode::BAD_REQUEST
            }
            _ => {
                tracing::error!("API error: {}", message);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// ========== Handlers ==========

/// Shared service state.
///
/// Handlers never score with `base` directly: each request forks its own
/// scorer, which shares the lexicon but gets a fresh stemmer handle.
pub struct AppState {
    base: Scorer,
}

impl AppState {
    pub fn new(base: Scorer) -> Self {
        Self { base }
    }

    fn scorer(&self) -> Scorer {
        self.base.fork()
    }
}

async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK"))
}

async fn info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let lexicon = state.base.lexicon();
    Json(ApiResponse::success(InfoResponse {
        language: state.base.stemmer().language(),
        positive_terms: lexicon.positive_len(),
        negative_terms: lexicon.negative_len(),
        languages: supported_languages().collect(),
    }))
}

async fn stem(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let stemmer = match req.language.as_deref() {
        Some(language) => WordStemmer::new(language)?,
        None => state.base.stemmer().duplicate(),
    };

    let results = stem_rows(&stemmer, req.rows.iter().map(|r| r.as_deref()));
    Ok(Json(ApiResponse::success(RowsResponse { results })))
}

async fn score(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> Result<impl IntoResponse, AppError> {
    let scorer = state.scorer();
    let results = score_rows(&scorer, req.rows.iter().map(|r| r.as_deref()));
    Ok(Json(ApiResponse::success(RowsResponse { results })))
}

async fn tweets(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let mut tweets = parse_tweets(&body)?;
    score_tweets(&state.scorer(), &mut tweets);
    Ok(Json(ApiResponse::success(TweetsResponse { tweets })))
}

// ========== Router ==========

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(info))
        .route("/stem", post(stem))
        .route("/score", post(score))
        .route("/tweets", post(tweets))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
