//! Request Timing Middleware
//!
//! Logs how long each request took alongside the current cache hit ratio.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use super::handlers::AppState;

/// Wraps every routed request with a timer.
///
/// Successful responses log at info, anything else at warn.
pub async fn track_performance(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let hit_ratio = state.cache.read().await.hit_ratio();
    let status = response.status().as_u16();

    if response.status().is_success() {
        info!(%method, path = %path, status, elapsed_ms, hit_ratio, "Request completed");
    } else {
        warn!(%method, path = %path, status, elapsed_ms, hit_ratio, "Request failed");
    }

    response
}
