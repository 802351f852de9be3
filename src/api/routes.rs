//! API Routes
//!
//! Configures the Axum router with all bookstore endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    apply_discount_handler, calculate_total_handler, health_handler, metrics_handler,
    validate_payment_handler, AppState,
};
use super::timing::track_performance;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/calculate-total` - Cart total
/// - `POST /api/apply-discount` - Apply a discount code to a subtotal
/// - `POST /api/validate-payment` - Validate card details and amount
/// - `GET /research/metrics` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Timing: Logs elapsed time and cache hit ratio per request
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/calculate-total", post(calculate_total_handler))
        .route("/api/apply-discount", post(apply_discount_handler))
        .route("/api/validate-payment", post(validate_payment_handler))
        .route("/research/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            track_performance,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
