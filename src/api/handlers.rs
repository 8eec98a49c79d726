//! API Handlers
//!
//! HTTP request handlers for each LabSeq endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::MemoCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, StatsResponse, TermResponse};
use crate::seq::Evaluator;

/// Application state shared across all handlers.
///
/// Holds the evaluator (which owns the memoization cache) behind an
/// Arc so every concurrent request sees the same cache.
#[derive(Clone)]
pub struct AppState {
    /// Shared term evaluator
    pub evaluator: Arc<Evaluator>,
}

impl AppState {
    /// Creates a new AppState around an evaluator.
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The memoization cache is constructed empty here, at process
    /// start, and lives until the process exits.
    pub fn from_config(config: &Config) -> Self {
        let cache = Arc::new(MemoCache::new());
        Self::new(Evaluator::new(cache, config.iterative_threshold))
    }
}

/// Handler for GET /labseq/:n
///
/// Computes and returns the LabSeq term at the given index. Non-integer
/// path segments are rejected by the extractor before this runs;
/// negative indices fail with a 400 from the evaluator.
pub async fn term_handler(
    State(state): State<AppState>,
    Path(n): Path<i64>,
) -> Result<Json<TermResponse>> {
    let started = Instant::now();
    let computation = state.evaluator.compute(n).await?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let response = TermResponse::new(
        n as u64,
        &computation.value,
        elapsed_ms,
        computation.from_cache,
    );
    info!(
        n,
        digits = response.digits,
        elapsed_ms,
        from_cache = response.from_cache,
        strategy = ?computation.strategy,
        "term computed"
    );

    Ok(Json(response))
}

/// Handler for GET /stats
///
/// Returns current memoization cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.evaluator.cache().stats().await;
    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the service; never touches the core.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}
