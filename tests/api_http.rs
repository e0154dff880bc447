// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /api/sentiment/analyze  (response shape + invalid-input family)

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as Json};
use tower::ServiceExt as _; // for `oneshot`

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Build the same Router the binary uses.
async fn test_router() -> Router {
    blog_sentiment_analyzer::app()
        .await
        .expect("app() should build Router in tests")
}

/// POST a raw JSON payload to the analyze endpoint and parse the reply.
async fn post_analyze(app: Router, payload: String) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/sentiment/analyze")
        .header("content-type", "application/json")
        .body(Body::from(payload))
        .expect("build POST /api/sentiment/analyze");

    let resp = app.oneshot(req).await.expect("oneshot analyze");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    let v: Json = serde_json::from_slice(&bytes).expect("parse analyze json");
    (status, v)
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let app = test_router().await;

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK, "health should be 200");

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    let body = String::from_utf8(bytes).expect("utf8");
    assert_eq!(body.trim(), "OK", "health body should be 'OK'");
}

#[tokio::test]
async fn api_analyze_returns_expected_json_fields() {
    let app = test_router().await;

    let payload = json!({ "content": "Readers loved the interview; a wonderful, honest piece." });
    let (status, v) = post_analyze(app, payload.to_string()).await;
    assert_eq!(status, StatusCode::OK, "POST analyze should be 200");

    // Contract checks for UI consumers
    let analysis = v.get("analysis").expect("missing 'analysis'");
    assert!(analysis.get("score").is_some(), "missing 'analysis.score'");
    assert!(
        analysis.get("comparative").is_some(),
        "missing 'analysis.comparative'"
    );
    assert!(
        analysis.get("assessment").is_some(),
        "missing 'analysis.assessment'"
    );
    assert!(analysis["tokens"].is_array(), "'tokens' must be an array");
    assert!(analysis["positive"].is_array(), "'positive' must be an array");
    assert!(analysis["negative"].is_array(), "'negative' must be an array");

    let rec = v.get("recommendations").expect("missing 'recommendations'");
    assert!(rec["tone"].is_string(), "'tone' must be a string");
    assert!(rec["suggestions"].is_array(), "'suggestions' must be an array");
}

#[tokio::test]
async fn api_analyze_comparative_is_score_over_tokens() {
    let app = test_router().await;

    let payload = json!({ "content": "This post is great" });
    let (status, v) = post_analyze(app, payload.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let score = v["analysis"]["score"].as_i64().expect("score");
    let tokens = v["analysis"]["tokens"].as_array().expect("tokens").len();
    let comparative = v["analysis"]["comparative"].as_f64().expect("comparative");
    assert!(tokens > 0);
    assert!(
        (comparative - score as f64 / tokens as f64).abs() < 1e-9,
        "comparative {} != score {} / tokens {}",
        comparative,
        score,
        tokens
    );
}

#[tokio::test]
async fn api_analyze_rejects_missing_content_field() {
    let app = test_router().await;

    let (status, v) = post_analyze(app, json!({}).to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({ "error": "Content is required for analysis" }));
}

#[tokio::test]
async fn api_analyze_rejects_non_string_content() {
    let app = test_router().await;

    let (status, v) = post_analyze(app, json!({ "content": 42 }).to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({ "error": "Content is required for analysis" }));
}

#[tokio::test]
async fn api_analyze_rejects_whitespace_only_content() {
    let app = test_router().await;

    let (status, v) = post_analyze(app, json!({ "content": "   \n\t " }).to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({ "error": "Content is required for analysis" }));
}

#[tokio::test]
async fn api_analyze_rejects_malformed_json() {
    let app = test_router().await;

    let (status, v) = post_analyze(app, "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({ "error": "Content is required for analysis" }));
}
