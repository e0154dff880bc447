// src/api.rs
//! HTTP surface: the sentiment endpoint plus health and gated diagnostics.
//! Authentication stays with the upstream middleware layer; by the time a
//! request reaches this router the caller is already verified.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::assessment::Assessment;
use crate::metrics::Metrics;
use crate::recommend::Recommendations;
use crate::sentiment::{Lexicon, SentimentAnalyzer, SentimentReport};

// Gate for diagnostics routes (/metrics).
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

// Simple shared app state used by Axum.
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: SentimentAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }

    /// State with the lexicon resolved from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(SentimentAnalyzer::new(Lexicon::from_env()?)))
    }
}

/// Routes served with the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/sentiment/analyze", post(analyze_content))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Build the full app Router the way the binary serves it: env-resolved
/// lexicon, plus `/metrics` when `DEBUG_ROUTES=1`.
pub async fn app() -> anyhow::Result<Router> {
    let state = AppState::from_env()?;
    let lexicon_entries = state.analyzer.lexicon_len();
    let mut router = router(state);

    if debug_routes_enabled() {
        let metrics = Metrics::init(lexicon_entries);
        router = router.merge(metrics.router());
    }

    Ok(router)
}

fn debug_routes_enabled() -> bool {
    std::env::var(ENV_DEBUG_ROUTES).ok().as_deref() == Some("1")
}

#[derive(Debug, Deserialize)]
struct AnalyzeReq {
    content: String,
}

/// The `analysis` object of the response: the raw report plus the tone label.
#[derive(Debug, Serialize)]
struct AnalysisBody {
    score: i32,
    comparative: f64,
    assessment: Assessment,
    tokens: Vec<String>,
    positive: Vec<String>,
    negative: Vec<String>,
}

impl AnalysisBody {
    fn new(report: SentimentReport, assessment: Assessment) -> Self {
        Self {
            score: report.score,
            comparative: report.comparative,
            assessment,
            tokens: report.tokens,
            positive: report.positive,
            negative: report.negative,
        }
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeResp {
    analysis: AnalysisBody,
    recommendations: Recommendations,
}

/// Client-visible failures; the bodies are part of the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Content missing, not a string, or empty after trimming.
    InvalidInput,
    /// Unexpected failure during analysis; details stay server-side.
    Internal,
}

impl ApiError {
    fn status(self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(self) -> &'static str {
        match self {
            ApiError::InvalidInput => "Content is required for analysis",
            ApiError::Internal => "Failed to analyze content sentiment",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

async fn analyze_content(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeReq>, JsonRejection>,
) -> Result<Json<AnalyzeResp>, ApiError> {
    // Missing `content`, a non-string value, and malformed JSON all count as
    // invalid input; none of them reach the scorer.
    let Ok(Json(req)) = body else {
        counter!("sentiment_analyze_rejected_total").increment(1);
        return Err(ApiError::InvalidInput);
    };
    if req.content.trim().is_empty() {
        counter!("sentiment_analyze_rejected_total").increment(1);
        return Err(ApiError::InvalidInput);
    }

    let started = Instant::now();
    counter!("sentiment_analyze_requests_total").increment(1);

    let report = state.analyzer.analyze(&req.content);
    let assessment = Assessment::from_score(report.score);
    let recommendations = Recommendations::for_content(&state.analyzer, &req.content);

    // Never log raw content. Only hashed id + numeric outcome.
    info!(
        target: "sentiment",
        id = %anon_hash(&req.content),
        score = report.score,
        tokens = report.tokens.len(),
        assessment = %assessment,
        "content analyzed"
    );

    counter!("sentiment_assessment_total", "assessment" => assessment.label()).increment(1);
    histogram!("sentiment_analyze_ms").record(started.elapsed().as_secs_f64() * 1000.0);

    Ok(Json(AnalyzeResp {
        analysis: AnalysisBody::new(report, assessment),
        recommendations,
    }))
}

/// Panics inside a handler surface as the generic 500 body, without leaking
/// internals to the client.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(target: "sentiment", %detail, "analyze handler panicked");
    ApiError::Internal.into_response()
}

/// Short, stable content id for logs (first 6 bytes of SHA-256, hex).
fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
