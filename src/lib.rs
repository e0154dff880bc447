// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod assessment;
pub mod metrics;
pub mod normalize;
pub mod recommend;
pub mod sentiment;

// ---- Re-exports for stable public API ----
pub use crate::api::{app, router, AppState};
pub use crate::assessment::Assessment;
pub use crate::recommend::Recommendations;
pub use crate::sentiment::{Lexicon, SentimentAnalyzer, SentimentReport};
