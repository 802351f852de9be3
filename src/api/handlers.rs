//! API Handlers
//!
//! HTTP request handlers for each bookstore endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use crate::cache::{CacheStore, JsonCache};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    parse_decimal, ApplyDiscountRequest, ApplyDiscountResponse, CalculateTotalRequest,
    CalculateTotalResponse, CartItemPayload, HealthResponse, MetricsResponse,
    ValidatePaymentRequest,
};
use crate::payment::{PaymentValidator, ValidationResult};
use crate::pricing::{self, DiscountTable, ZERO_TOTAL};

/// Application state shared across all handlers.
///
/// The cache is owned here rather than living in a global, and is wrapped
/// in Arc<RwLock<>> because every lookup updates its counters.
#[derive(Clone)]
pub struct AppState {
    /// Discount memoization cache
    pub cache: Arc<RwLock<JsonCache>>,
    /// Known discount codes
    pub discounts: Arc<DiscountTable>,
    /// Payment validation settings
    pub payments: PaymentValidator,
}

impl AppState {
    /// Creates a new AppState around the given cache with the stock
    /// discount table and payment settings.
    pub fn new(cache: JsonCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            discounts: Arc::new(DiscountTable::default()),
            payments: PaymentValidator::default(),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(config.cache_max_entries)).with_payment_validator(
            PaymentValidator::new(config.large_transaction_threshold),
        )
    }

    pub fn with_discounts(mut self, discounts: DiscountTable) -> Self {
        self.discounts = Arc::new(discounts);
        self
    }

    pub fn with_payment_validator(mut self, payments: PaymentValidator) -> Self {
        self.payments = payments;
        self
    }
}

/// Handler for POST /api/calculate-total
///
/// Sums the submitted cart lines; bad lines are skipped, not rejected.
pub async fn calculate_total_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculateTotalRequest>, JsonRejection>,
) -> Result<Json<CalculateTotalResponse>> {
    let Json(req) = payload?;

    let total = pricing::cart_total(req.items.iter().map(CartItemPayload::to_cart_item));
    let hit_ratio = state.cache.read().await.hit_ratio();

    Ok(Json(CalculateTotalResponse::new(
        total,
        req.items.len(),
        hit_ratio,
    )))
}

/// Handler for POST /api/apply-discount
///
/// An unparsable subtotal is not an error: the discounted total is 0.00.
pub async fn apply_discount_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ApplyDiscountRequest>, JsonRejection>,
) -> Result<Json<ApplyDiscountResponse>> {
    let Json(req) = payload?;
    let subtotal = parse_decimal(&req.subtotal);

    // Write lock: a memoized lookup still bumps hit counters
    let mut cache = state.cache.write().await;
    let discounted = match &subtotal {
        Ok(subtotal) => {
            pricing::apply_discount(&mut cache, &state.discounts, *subtotal, &req.discount_code)
        }
        Err(err) => {
            warn!(error = %err, "Unparsable subtotal, discounted total is zero");
            ZERO_TOTAL
        }
    };
    let hit_ratio = cache.hit_ratio();
    drop(cache);

    let discount_applied = subtotal.map_or(true, |subtotal| subtotal != discounted);

    Ok(Json(ApplyDiscountResponse::new(
        req.subtotal,
        discounted,
        discount_applied,
        req.discount_code,
        hit_ratio,
    )))
}

/// Handler for POST /api/validate-payment
///
/// Validation failures are reported in the body with a 200 status.
pub async fn validate_payment_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ValidatePaymentRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>> {
    let Json(req) = payload?;

    let result = state.payments.validate_payment(&req.to_card_data());
    if !result.success {
        info!(errors = ?result.errors, "Payment validation failed");
    }

    Ok(Json(result))
}

/// Handler for GET /research/metrics
///
/// Returns current cache statistics.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(MetricsResponse::from(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
