// src/metrics.rs

use axum::{routing::get, Router};
use metrics::{describe_counter, describe_gauge, describe_histogram, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder and register series descriptions.
    /// The recorder is process-global, so the handle is cached; tests that
    /// rebuild the app reuse it.
    pub fn init(lexicon_entries: usize) -> Self {
        static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();
        let handle = HANDLE
            .get_or_init(|| {
                PrometheusBuilder::new()
                    .install_recorder()
                    .expect("prometheus: install recorder")
            })
            .clone();

        ensure_metrics_described();

        // Static gauge with the loaded lexicon size.
        gauge!("sentiment_lexicon_entries").set(lexicon_entries as f64);

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "sentiment_analyze_requests_total",
            "Analyze requests accepted for scoring."
        );
        describe_counter!(
            "sentiment_analyze_rejected_total",
            "Analyze requests rejected as invalid input."
        );
        describe_counter!(
            "sentiment_assessment_total",
            "Analyses by resulting tone band."
        );
        describe_histogram!(
            "sentiment_analyze_ms",
            "Analyze request handling time in milliseconds."
        );
        describe_gauge!(
            "sentiment_lexicon_entries",
            "Entries in the loaded sentiment lexicon."
        );
    });
}
